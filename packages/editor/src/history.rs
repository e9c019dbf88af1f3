//! # Undo/Redo History
//!
//! A bounded, linear log of whole-forest snapshots with a cursor.
//!
//! ## Design
//!
//! - Every committed mutation records one snapshot
//! - Undo/redo move the cursor and return the snapshot it lands on
//! - Recording after an undo truncates the abandoned future (standard
//!   branch-on-new-edit discipline)
//! - When the log exceeds its capacity, the oldest snapshots are evicted
//!   from the front and the cursor shifts down by the evicted count, so
//!   undo from the newest entry bottoms out exactly at the oldest retained
//!   snapshot

use pageforge_document::BuilderElement;

/// Default number of retained snapshots
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded snapshot log for undo/redo
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots, oldest first
    entries: Vec<Vec<BuilderElement>>,

    /// Index of the currently displayed snapshot
    cursor: usize,

    /// Maximum retained snapshots
    capacity: usize,
}

impl History {
    /// Create a history with the default capacity, seeded with one empty
    /// snapshot (the blank canvas is always undoable-to).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![Vec::new()],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a new snapshot, discarding any undone-then-abandoned future.
    pub fn record(&mut self, snapshot: Vec<BuilderElement>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.drain(..evicted);
            self.cursor -= evicted;
            tracing::debug!(evicted, "history capacity reached, oldest snapshots dropped");
        }
    }

    /// Step back one snapshot; `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&[BuilderElement]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "undo");
        Some(&self.entries[self.cursor])
    }

    /// Step forward one snapshot; `None` when already at the newest.
    pub fn redo(&mut self) -> Option<&[BuilderElement]> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "redo");
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The snapshot the cursor currently points at.
    pub fn current(&self) -> &[BuilderElement] {
        &self.entries[self.cursor]
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false // always holds at least the seed snapshot
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Drop everything and restart from the given snapshot (used when a
    /// saved project is restored).
    pub fn reset(&mut self, snapshot: Vec<BuilderElement>) {
        self.entries = vec![snapshot];
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
