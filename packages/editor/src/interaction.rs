//! # Interaction Controller
//!
//! Turns continuous pointer movement into discrete style deltas.
//!
//! ## State machine
//!
//! ```text
//! Idle --(begin_drag)----> Dragging --(finish/cancel)--> Idle
//! Idle --(begin_resize)--> Resizing --(finish/cancel)--> Idle
//! ```
//!
//! One element may be active at a time; beginning a new interaction while
//! one is in flight replaces it. Pointer-move ticks produce a [`StyleDelta`]
//! the session applies transiently; only the end state of a gesture is
//! recorded in history. A tick with an unmeasurable canvas or a non-finite
//! delta produces no delta at all.

use pageforge_document::{StyleMap, Viewport};
use serde::{Deserialize, Serialize};

/// Margin kept visible when an element is dragged to the right edge.
const DRAG_EDGE_MARGIN: f64 = 100.0;

/// Z-index applied while an element is being dragged, keeping it on top.
const DRAG_Z_INDEX: &str = "10";

/// The eight resize handle orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeDirection {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "ne")]
    Northeast,
    #[serde(rename = "nw")]
    Northwest,
    #[serde(rename = "se")]
    Southeast,
    #[serde(rename = "sw")]
    Southwest,
}

impl ResizeDirection {
    /// +1 when the handle grows width with positive horizontal delta,
    /// -1 when it grows with negative delta, 0 when width is untouched.
    fn horizontal_sign(&self) -> f64 {
        match self {
            ResizeDirection::East | ResizeDirection::Northeast | ResizeDirection::Southeast => 1.0,
            ResizeDirection::West | ResizeDirection::Northwest | ResizeDirection::Southwest => -1.0,
            ResizeDirection::North | ResizeDirection::South => 0.0,
        }
    }

    fn vertical_sign(&self) -> f64 {
        match self {
            ResizeDirection::South | ResizeDirection::Southeast | ResizeDirection::Southwest => 1.0,
            ResizeDirection::North | ResizeDirection::Northeast | ResizeDirection::Northwest => {
                -1.0
            }
            ResizeDirection::East | ResizeDirection::West => 0.0,
        }
    }

    pub fn affects_width(&self) -> bool {
        self.horizontal_sign() != 0.0
    }

    pub fn affects_height(&self) -> bool {
        self.vertical_sign() != 0.0
    }
}

/// A pointer position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box at pointer-down, canvas-relative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The measured canvas bounding box. The render layer may fail to measure
/// it (not mounted, zero size); such ticks are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Drag,
    Resize(ResizeDirection),
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveInteraction {
    node_id: String,
    gesture: Gesture,
    /// Pointer position at pointer-down.
    origin: Point,
    /// Element bounds at pointer-down.
    start: ElementBox,
    /// Whether any delta has been produced this gesture.
    moved: bool,
}

/// A style patch for one element, produced by a pointer-move tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDelta {
    pub node_id: String,
    pub styles: StyleMap,
}

/// A gesture that just ended via pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedGesture {
    pub node_id: String,
    /// False when the pointer never moved; nothing to persist then.
    pub moved: bool,
}

/// Pointer state machine. Owns no tree data; the session feeds it geometry
/// and applies the deltas it produces.
#[derive(Debug, Default)]
pub struct InteractionController {
    active: Option<ActiveInteraction>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down on a drag handle. Replaces any in-flight interaction.
    pub fn begin_drag(&mut self, node_id: impl Into<String>, origin: Point, start: ElementBox) {
        let node_id = node_id.into();
        tracing::debug!(node_id = %node_id, "drag started");
        self.active = Some(ActiveInteraction {
            node_id,
            gesture: Gesture::Drag,
            origin,
            start,
            moved: false,
        });
    }

    /// Pointer-down on a resize handle. Replaces any in-flight interaction.
    pub fn begin_resize(
        &mut self,
        node_id: impl Into<String>,
        direction: ResizeDirection,
        origin: Point,
        start: ElementBox,
    ) {
        let node_id = node_id.into();
        tracing::debug!(node_id = %node_id, ?direction, "resize started");
        self.active = Some(ActiveInteraction {
            node_id,
            gesture: Gesture::Resize(direction),
            origin,
            start,
            moved: false,
        });
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Id of the element being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        match &self.active {
            Some(a) if a.gesture == Gesture::Drag => Some(&a.node_id),
            _ => None,
        }
    }

    /// Id of the element being resized, if any.
    pub fn resizing(&self) -> Option<&str> {
        match &self.active {
            Some(a) if matches!(a.gesture, Gesture::Resize(_)) => Some(&a.node_id),
            _ => None,
        }
    }

    /// Compute the style delta for a pointer-move tick. Returns `None` when
    /// idle, when the canvas is unmeasurable, or when the delta is not
    /// finite; no mutation happens on such ticks.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        canvas: Option<CanvasRect>,
        viewport: Viewport,
    ) -> Option<StyleDelta> {
        let active = self.active.as_mut()?;

        let canvas = canvas.filter(CanvasRect::is_measurable)?;

        let dx = pointer.x - active.origin.x;
        let dy = pointer.y - active.origin.y;
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }

        let mut styles = StyleMap::new();
        match active.gesture {
            Gesture::Drag => {
                let max_left = (canvas.width - DRAG_EDGE_MARGIN).max(0.0);
                let left = (active.start.x + dx).clamp(0.0, max_left);
                let top = (active.start.y + dy).max(0.0);

                styles.insert("position".to_string(), "absolute".into());
                styles.insert("left".to_string(), format!("{}px", left).into());
                styles.insert("top".to_string(), format!("{}px", top).into());
                styles.insert("zIndex".to_string(), DRAG_Z_INDEX.into());
                styles.insert("transition".to_string(), "none".into());
            }
            Gesture::Resize(direction) => {
                if direction.affects_width() {
                    let width =
                        viewport.clamp_width(active.start.width + direction.horizontal_sign() * dx);
                    styles.insert("width".to_string(), format!("{}px", width).into());
                }
                if direction.affects_height() {
                    let height = viewport
                        .clamp_height(active.start.height + direction.vertical_sign() * dy);
                    styles.insert("height".to_string(), format!("{}px", height).into());
                }
                styles.insert("transition".to_string(), "none".into());
            }
        }

        active.moved = true;
        Some(StyleDelta {
            node_id: active.node_id.clone(),
            styles,
        })
    }

    /// Pointer-up: end the gesture and report what to persist.
    pub fn finish(&mut self) -> Option<CompletedGesture> {
        let active = self.active.take()?;
        tracing::debug!(node_id = %active.node_id, moved = active.moved, "interaction finished");
        Some(CompletedGesture {
            node_id: active.node_id,
            moved: active.moved,
        })
    }

    /// Safety net for lost pointer-up events (blur, visibility change):
    /// force-exit to Idle without persisting anything.
    pub fn cancel(&mut self) -> Option<String> {
        let active = self.active.take()?;
        tracing::debug!(node_id = %active.node_id, "interaction cancelled");
        Some(active.node_id)
    }
}
