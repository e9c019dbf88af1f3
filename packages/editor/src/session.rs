//! # Edit Session Management
//!
//! An [`EditSession`] is the single owner of one page's editing state:
//! the element forest, its undo/redo history, the id generator, page
//! settings, viewport, and selection. Every inbound operation funnels
//! through it.
//!
//! Commit discipline: each successful structural or style mutation applies
//! through the mutation engine, records exactly one history snapshot, then
//! notifies subscribers. Auto-save is a subscriber, never an embedded
//! concern; the session itself performs no I/O and never awaits.

use crate::history::History;
use crate::interaction::{
    CanvasRect, ElementBox, InteractionController, Point, ResizeDirection, StyleDelta,
};
use crate::mutations::{ElementPatch, Mutation, MutationOutcome};
use crate::EditorError;
use pageforge_document::{
    contains, count, find, BuilderElement, ElementSeed, IdGenerator, PageSettings,
    ProjectSnapshot, StyleMap, Template, Viewport,
};

/// Called after every recorded snapshot with the new forest.
pub type RecordSubscriber = Box<dyn FnMut(&[BuilderElement])>;

/// Single-owner editing session for one page.
pub struct EditSession {
    elements: Vec<BuilderElement>,
    history: History,
    ids: IdGenerator,
    settings: PageSettings,
    viewport: Viewport,
    selected: Option<String>,
    hovered: Option<String>,
    /// Increments on every committed change, undo/redo included.
    version: u64,
    interaction: InteractionController,
    subscribers: Vec<RecordSubscriber>,
}

impl EditSession {
    /// Create an empty session; `page_name` seeds element id generation.
    pub fn new(page_name: &str) -> Self {
        Self {
            elements: Vec::new(),
            history: History::new(),
            ids: IdGenerator::new(page_name),
            settings: PageSettings::default(),
            viewport: Viewport::default(),
            selected: None,
            hovered: None,
            version: 0,
            interaction: InteractionController::new(),
            subscribers: Vec::new(),
        }
    }

    // --- mutation surface ---

    /// Add a new top-level element; returns its fresh id.
    pub fn add_element(&mut self, seed: ElementSeed) -> String {
        let outcome = Mutation::Add { seed }.apply(&mut self.elements, &mut self.ids);
        let id = outcome
            .created()
            .expect("add always creates an element")
            .to_string();
        self.commit();
        id
    }

    /// Merge a partial patch into the matching element. Returns false (and
    /// records nothing) when the id is stale.
    pub fn update_element(&mut self, node_id: &str, patch: ElementPatch) -> bool {
        let outcome = Mutation::Update {
            node_id: node_id.to_string(),
            patch,
        }
        .apply(&mut self.elements, &mut self.ids);

        if outcome.is_applied() {
            self.commit();
        }
        outcome.is_applied()
    }

    /// Replace an element's content string (inline text editing).
    pub fn set_content(&mut self, node_id: &str, content: impl Into<String>) -> bool {
        self.update_element(node_id, ElementPatch::content(content))
    }

    /// Flip an element between `display: none` and `display: block`.
    pub fn toggle_visibility(&mut self, node_id: &str) -> bool {
        let Some(element) = find(&self.elements, node_id) else {
            return false;
        };

        let hidden = element
            .styles
            .get("display")
            .and_then(|v| v.as_text())
            .map(|v| v == "none")
            .unwrap_or(false);
        let next = if hidden { "block" } else { "none" };

        self.update_element(node_id, ElementPatch::default().with_style("display", next))
    }

    /// Delete the element and its subtree. A selection pointing at the
    /// removed subtree is dropped.
    pub fn delete_element(&mut self, node_id: &str) -> bool {
        let outcome = Mutation::Delete {
            node_id: node_id.to_string(),
        }
        .apply(&mut self.elements, &mut self.ids);

        if outcome.is_applied() {
            self.prune_selection();
            self.commit();
        }
        outcome.is_applied()
    }

    /// Duplicate the element as a new top-level sibling; returns the copy's id.
    pub fn duplicate_element(&mut self, node_id: &str) -> Option<String> {
        let outcome = Mutation::Duplicate {
            node_id: node_id.to_string(),
        }
        .apply(&mut self.elements, &mut self.ids);

        let created = outcome.created().map(str::to_string);
        if outcome.is_applied() {
            self.commit();
        }
        created
    }

    /// Empty the canvas.
    pub fn clear(&mut self) {
        Mutation::Clear.apply(&mut self.elements, &mut self.ids);
        self.selected = None;
        self.hovered = None;
        self.commit();
    }

    /// Replace the canvas and page settings with a template.
    pub fn apply_template(&mut self, template: &Template) {
        self.elements = template.instantiate(&mut self.ids);
        self.settings = template.settings.clone();
        self.selected = None;
        self.hovered = None;
        tracing::debug!(template = %template.name, "template applied");
        self.commit();
    }

    // --- history ---

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.elements = snapshot.to_vec();
        self.prune_selection();
        self.version += 1;
        self.notify();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.elements = snapshot.to_vec();
        self.prune_selection();
        self.version += 1;
        self.notify();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- interaction ---

    /// Pointer-down on a drag handle. Ignored for stale ids; the grabbed
    /// element becomes the selection, matching direct manipulation.
    pub fn begin_drag(&mut self, node_id: &str, origin: Point, start: ElementBox) -> bool {
        if !contains(&self.elements, node_id) {
            return false;
        }
        self.interaction.begin_drag(node_id, origin, start);
        self.selected = Some(node_id.to_string());
        true
    }

    /// Pointer-down on a resize handle.
    pub fn begin_resize(
        &mut self,
        node_id: &str,
        direction: ResizeDirection,
        origin: Point,
        start: ElementBox,
    ) -> bool {
        if !contains(&self.elements, node_id) {
            return false;
        }
        self.interaction.begin_resize(node_id, direction, origin, start);
        self.selected = Some(node_id.to_string());
        true
    }

    /// Pointer-move tick. Applies the computed delta transiently: the tree
    /// changes so the render layer can follow the pointer, but history is
    /// untouched until the gesture ends. Returns whether a delta applied.
    pub fn pointer_move(&mut self, pointer: Point, canvas: Option<CanvasRect>) -> bool {
        let Some(delta) = self.interaction.pointer_move(pointer, canvas, self.viewport) else {
            return false;
        };
        self.apply_transient(delta)
    }

    /// Pointer-up: persist the gesture's end state as a single recorded
    /// update. Gestures that never moved record nothing.
    pub fn end_interaction(&mut self) {
        let Some(done) = self.interaction.finish() else {
            return;
        };
        if done.moved && contains(&self.elements, &done.node_id) {
            self.commit();
        }
    }

    /// Abandon an in-flight gesture (lost pointer-up, window blur): the
    /// forest rolls back to the last recorded snapshot.
    pub fn cancel_interaction(&mut self) {
        if self.interaction.cancel().is_some() {
            self.elements = self.history.current().to_vec();
            self.prune_selection();
        }
    }

    /// True while a drag or resize is in flight.
    pub fn interaction_active(&self) -> bool {
        !self.interaction.is_idle()
    }

    fn apply_transient(&mut self, delta: StyleDelta) -> bool {
        let mut styles = delta.styles;

        // Resized elements keep their positioning mode; elements that never
        // had one get explicit relative positioning so width/height stick.
        let positioned = find(&self.elements, &delta.node_id)
            .map(|el| el.styles.contains_key("position"))
            .unwrap_or(false);
        if !positioned && !styles.contains_key("position") {
            styles.insert("position".to_string(), "relative".into());
        }

        let outcome = Mutation::Update {
            node_id: delta.node_id,
            patch: ElementPatch::styles(styles),
        }
        .apply(&mut self.elements, &mut self.ids);
        outcome.is_applied()
    }

    // --- selection ---

    pub fn select(&mut self, node_id: Option<&str>) {
        self.selected = node_id.map(str::to_string);
    }

    pub fn set_hovered(&mut self, node_id: Option<&str>) {
        self.hovered = node_id.map(str::to_string);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    // --- settings & viewport ---

    /// Page settings edits are not mutations; they bypass history.
    pub fn set_page_settings(&mut self, settings: PageSettings) {
        self.settings = settings;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- persistence handoff ---

    /// The full project state for the host's persistence layer.
    pub fn export_project(&self) -> ProjectSnapshot {
        ProjectSnapshot::new(self.elements.clone(), self.settings.clone(), self.viewport)
    }

    pub fn export_json(&self) -> Result<String, EditorError> {
        Ok(self.export_project().to_json()?)
    }

    /// Replace session state with a previously exported snapshot. History
    /// restarts at the restored state; id allocation resumes past every
    /// restored id.
    pub fn restore(&mut self, snapshot: ProjectSnapshot) {
        self.ids.resume_after(&snapshot.elements);
        self.elements = snapshot.elements;
        self.settings = snapshot.page_settings;
        self.viewport = snapshot.viewport;
        self.selected = None;
        self.hovered = None;
        self.history.reset(self.elements.clone());
        self.version += 1;
        tracing::debug!(elements = self.elements.len(), "project restored");
    }

    pub fn restore_json(&mut self, json: &str) -> Result<(), EditorError> {
        let snapshot = ProjectSnapshot::from_json(json)?;
        self.restore(snapshot);
        Ok(())
    }

    // --- observers ---

    /// Register a subscriber invoked after every recorded snapshot
    /// (auto-save lives here, outside the core).
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[BuilderElement]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // --- accessors ---

    pub fn elements(&self) -> &[BuilderElement] {
        &self.elements
    }

    pub fn find(&self, node_id: &str) -> Option<&BuilderElement> {
        find(&self.elements, node_id)
    }

    pub fn element_count(&self) -> usize {
        count(&self.elements)
    }

    pub fn page_settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Merge raw style pairs into an element (styles panel edits).
    pub fn update_styles(&mut self, node_id: &str, styles: StyleMap) -> bool {
        self.update_element(node_id, ElementPatch::styles(styles))
    }

    // --- internals ---

    fn commit(&mut self) {
        self.version += 1;
        self.history.record(self.elements.clone());
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.elements);
        }
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selected {
            if !contains(&self.elements, id) {
                self.selected = None;
            }
        }
        if let Some(id) = &self.hovered {
            if !contains(&self.elements, id) {
                self.hovered = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_document::ElementKind;

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("landing");

        assert!(session.elements().is_empty());
        assert_eq!(session.version(), 0);
        assert!(session.selected().is_none());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_add_records_and_versions() {
        let mut session = EditSession::new("landing");
        let id = session.add_element(ElementSeed::new(ElementKind::Text, "hi"));

        assert_eq!(session.element_count(), 1);
        assert_eq!(session.find(&id).unwrap().content, "hi");
        assert_eq!(session.version(), 1);
        assert!(session.can_undo());
    }

    #[test]
    fn test_stale_update_records_nothing() {
        let mut session = EditSession::new("landing");
        session.add_element(ElementSeed::new(ElementKind::Text, "hi"));
        let version = session.version();

        assert!(!session.update_element("missing", ElementPatch::content("bye")));
        assert_eq!(session.version(), version);
        assert!(!session.can_redo());
    }

    #[test]
    fn test_delete_prunes_selection() {
        let mut session = EditSession::new("landing");
        let id = session.add_element(ElementSeed::new(ElementKind::Text, "hi"));
        session.select(Some(&id));

        session.delete_element(&id);
        assert!(session.selected().is_none());
    }
}
