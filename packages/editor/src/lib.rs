//! # Pageforge Editor
//!
//! Core editing engine for the Pageforge builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: element tree + settings + presets │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session-owned mutation engine       │
//! │  - Apply add/update/delete/duplicate/clear  │
//! │  - Record snapshots for undo/redo           │
//! │  - Translate drag/resize into style deltas  │
//! │  - Hand project snapshots to persistence    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render layer (external): tree → visuals     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is source of truth**: the render layer is a derived view
//! 2. **Stale ids are no-ops**: UI events may race a delete; nothing throws
//! 3. **One record per gesture**: pointer-move ticks mutate transiently,
//!    only the end state lands in history
//! 4. **No embedded side effects**: auto-save observes `record`, the
//!    session never performs I/O
//!
//! ## Usage
//!
//! ```rust
//! use pageforge_editor::{EditSession, ElementPatch};
//! use pageforge_document::{presets, ElementKind};
//!
//! let mut session = EditSession::new("landing");
//!
//! // Add an element from the panel presets
//! let id = session.add_element(presets::seed(ElementKind::Text));
//!
//! // Edit it
//! session.update_element(&id, ElementPatch::content("Hello!"));
//!
//! // Step back
//! session.undo();
//! ```

mod errors;
mod history;
mod interaction;
mod mutations;
mod session;

pub use errors::EditorError;
pub use history::{History, DEFAULT_CAPACITY};
pub use interaction::{
    CanvasRect, CompletedGesture, ElementBox, InteractionController, Point, ResizeDirection,
    StyleDelta,
};
pub use mutations::{ElementPatch, Mutation, MutationOutcome};
pub use session::{EditSession, RecordSubscriber};

// Re-export the document model for convenience
pub use pageforge_document::{
    BuilderElement, ElementKind, ElementSeed, PageSettings, ProjectSnapshot, StyleMap, StyleValue,
    Template, Viewport,
};
