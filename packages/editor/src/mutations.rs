//! # Tree Mutations
//!
//! Semantic operations on the page element forest.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user-level operation
//! 2. **Stale-id tolerant**: Operating on an unknown id is a no-op, not a
//!    fault; UI events may race with a prior delete
//! 3. **Minimal**: No redundant or overly generic operations
//! 4. **Centralized recursion**: All tree walking lives here and in the
//!    document crate; callers never re-implement traversal
//!
//! ## Mutation Semantics
//!
//! ### Add
//! - Instantiates the seed with fresh ids and appends at top level
//! - Nesting into a container is composed by the UI from Add + Update
//!
//! ### Update
//! - `content` is replaced atomically; `styles` merge shallowly (new keys
//!   overwrite or extend, omitted keys survive); `children` replace wholesale
//!
//! ### Delete
//! - Removes the node and all descendants, wherever it sits in the hierarchy
//!
//! ### Duplicate
//! - Deep-copies the subtree, re-ids every copied node, appends the copy as
//!   a top-level sibling and suffixes its content with `" (Copy)"`

use pageforge_document::{find, find_mut, BuilderElement, ElementSeed, IdGenerator, StyleMap};
use serde::{Deserialize, Serialize};

/// Semantic mutations over the element forest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new element at top level
    Add { seed: ElementSeed },

    /// Merge a partial patch into the element matching `node_id`
    Update { node_id: String, patch: ElementPatch },

    /// Remove the element and its subtree
    Delete { node_id: String },

    /// Deep-copy the subtree as a new top-level sibling
    Duplicate { node_id: String },

    /// Empty the whole canvas
    Clear,
}

/// Partial element update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Shallow-merged into the element's style bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,

    /// Replaces the element's children wholesale. Ignored on leaf kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BuilderElement>>,
}

impl ElementPatch {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn styles(styles: StyleMap) -> Self {
        Self {
            styles: Some(styles),
            ..Self::default()
        }
    }

    pub fn children(children: Vec<BuilderElement>) -> Self {
        Self {
            children: Some(children),
            ..Self::default()
        }
    }

    /// Add one style pair to the patch.
    pub fn with_style(
        mut self,
        key: impl Into<String>,
        value: impl Into<pageforge_document::StyleValue>,
    ) -> Self {
        self.styles
            .get_or_insert_with(StyleMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.styles.is_none() && self.children.is_none()
    }
}

/// What applying a mutation did to the forest
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The forest changed; `created` carries the id of a newly minted root
    /// (for Add and Duplicate)
    Applied { created: Option<String> },

    /// Nothing changed (stale or unknown id)
    Noop,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    pub fn created(&self) -> Option<&str> {
        match self {
            MutationOutcome::Applied { created } => created.as_deref(),
            MutationOutcome::Noop => None,
        }
    }
}

impl Mutation {
    /// Apply the mutation. Unknown ids produce [`MutationOutcome::Noop`];
    /// nothing here ever fails.
    pub fn apply(
        &self,
        elements: &mut Vec<BuilderElement>,
        ids: &mut IdGenerator,
    ) -> MutationOutcome {
        match self {
            Mutation::Add { seed } => Self::apply_add(elements, seed, ids),
            Mutation::Update { node_id, patch } => Self::apply_update(elements, node_id, patch),
            Mutation::Delete { node_id } => Self::apply_delete(elements, node_id),
            Mutation::Duplicate { node_id } => Self::apply_duplicate(elements, node_id, ids),
            Mutation::Clear => Self::apply_clear(elements),
        }
    }

    fn apply_add(
        elements: &mut Vec<BuilderElement>,
        seed: &ElementSeed,
        ids: &mut IdGenerator,
    ) -> MutationOutcome {
        let element = seed.instantiate(ids);
        let id = element.id.clone();
        tracing::debug!(id = %id, kind = seed.kind.label(), "element added");
        elements.push(element);
        MutationOutcome::Applied { created: Some(id) }
    }

    fn apply_update(
        elements: &mut [BuilderElement],
        node_id: &str,
        patch: &ElementPatch,
    ) -> MutationOutcome {
        let Some(element) = find_mut(elements, node_id) else {
            tracing::debug!(node_id = %node_id, "update skipped, stale id");
            return MutationOutcome::Noop;
        };

        if let Some(content) = &patch.content {
            element.content = content.clone();
        }
        if let Some(styles) = &patch.styles {
            for (key, value) in styles {
                element.styles.insert(key.clone(), value.clone());
            }
        }
        if let Some(children) = &patch.children {
            if element.kind.accepts_children() {
                element.children = children.clone();
            } else {
                tracing::warn!(node_id = %node_id, "children patch ignored on leaf element");
            }
        }

        MutationOutcome::Applied { created: None }
    }

    fn apply_delete(elements: &mut Vec<BuilderElement>, node_id: &str) -> MutationOutcome {
        match remove_element(elements, node_id) {
            Some(removed) => {
                tracing::debug!(node_id = %removed.id, "element deleted");
                MutationOutcome::Applied { created: None }
            }
            None => {
                tracing::debug!(node_id = %node_id, "delete skipped, stale id");
                MutationOutcome::Noop
            }
        }
    }

    fn apply_duplicate(
        elements: &mut Vec<BuilderElement>,
        node_id: &str,
        ids: &mut IdGenerator,
    ) -> MutationOutcome {
        let Some(original) = find(elements, node_id) else {
            tracing::debug!(node_id = %node_id, "duplicate skipped, stale id");
            return MutationOutcome::Noop;
        };

        let mut copy = original.clone();
        reassign_ids(&mut copy, ids);
        copy.content.push_str(" (Copy)");

        let id = copy.id.clone();
        tracing::debug!(source = %node_id, copy = %id, "element duplicated");
        elements.push(copy);
        MutationOutcome::Applied { created: Some(id) }
    }

    fn apply_clear(elements: &mut Vec<BuilderElement>) -> MutationOutcome {
        tracing::debug!(count = elements.len(), "canvas cleared");
        elements.clear();
        MutationOutcome::Applied { created: None }
    }
}

/// Remove the element matching `node_id` from wherever it occurs and return
/// it, subtree intact.
fn remove_element(elements: &mut Vec<BuilderElement>, node_id: &str) -> Option<BuilderElement> {
    if let Some(pos) = elements.iter().position(|el| el.id == node_id) {
        return Some(elements.remove(pos));
    }

    for element in elements {
        if let Some(removed) = remove_element(&mut element.children, node_id) {
            return Some(removed);
        }
    }

    None
}

/// Fresh ids for every node of a duplicated subtree, keeping ids unique
/// across the whole forest.
fn reassign_ids(element: &mut BuilderElement, ids: &mut IdGenerator) {
    element.id = ids.new_id();
    for child in &mut element.children {
        reassign_ids(child, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_document::ElementKind;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::Update {
            node_id: "page-1".to_string(),
            patch: ElementPatch::content("Hello World"),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_children_patch_ignored_on_leaf() {
        let mut ids = IdGenerator::from_seed("t".to_string());
        let mut elements = Vec::new();

        let outcome = Mutation::Add {
            seed: ElementSeed::new(ElementKind::Text, "hi"),
        }
        .apply(&mut elements, &mut ids);
        let id = outcome.created().unwrap().to_string();

        let stray_child = ElementSeed::new(ElementKind::Text, "stray").instantiate(&mut ids);
        Mutation::Update {
            node_id: id.clone(),
            patch: ElementPatch::children(vec![stray_child]),
        }
        .apply(&mut elements, &mut ids);

        assert!(elements[0].children.is_empty());
    }
}
