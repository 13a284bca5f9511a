//! Bounded undo/redo ledger over document snapshots.
//!
//! Snapshots are full, independent clones of the document taken *before* a
//! trackable command applies, so the last `past` entry is always exactly what
//! a single undo should produce. The document model never sees this module;
//! the session feeds it snapshots and receives snapshots back.

use crate::document::EditorDocument;

/// Maximum number of undo steps retained.
pub const MAX_HISTORY: usize = 50;

/// The undo/redo ledger: pre-command snapshots in each direction.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Snapshots that undo walks back through, most recent last.
    past: Vec<EditorDocument>,
    /// Snapshots produced by undo, most recent first.
    future: Vec<EditorDocument>,
}

impl History {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-command snapshot of a trackable command.
    ///
    /// Drops the oldest entry when [`MAX_HISTORY`] would be exceeded, and
    /// clears `future`: acting after an undo discards the undone-away branch.
    pub fn record(&mut self, snapshot: EditorDocument) {
        self.past.push(snapshot);
        if self.past.len() > MAX_HISTORY {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Take one step back.
    ///
    /// Returns the snapshot to restore, pushing `current` onto the front of
    /// `future` so a redo can return to it. `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &EditorDocument) -> Option<EditorDocument> {
        let snapshot = self.past.pop()?;
        self.future.insert(0, current.clone());
        Some(snapshot)
    }

    /// Take one step forward.
    ///
    /// Returns the snapshot to restore, pushing `current` onto `past`.
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &EditorDocument) -> Option<EditorDocument> {
        if self.future.is_empty() {
            return None;
        }
        let snapshot = self.future.remove(0);
        self.past.push(current.clone());
        Some(snapshot)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of stored undo steps.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of stored redo steps.
    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}
