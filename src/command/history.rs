use std::sync::Arc;

use crate::path::{Path, PathRef};

/// Linear undo/redo over path snapshots.
///
/// Always holds at least one entry, and `index` always points at a valid one.
/// Entries past `index` are the redoable ones until the next commit drops them.
#[derive(Debug, Clone)]
pub struct PathHistory {
    entries: Vec<PathRef>,
    index: usize,
}

impl Default for PathHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PathHistory {
    /// Creates a history holding only the empty, open path.
    pub fn new() -> Self {
        Self {
            entries: vec![Arc::new(Path::new())],
            index: 0,
        }
    }

    /// Record a snapshot, discarding anything that could still be redone.
    pub fn commit(&mut self, path: PathRef) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index = self.entries.len() - 1;
        log::debug!("history commit: {} entries", self.entries.len());
    }

    /// Step back one entry and return it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<PathRef> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(Arc::clone(&self.entries[self.index]))
    }

    /// Step forward one entry and return it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<PathRef> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(Arc::clone(&self.entries[self.index]))
    }

    /// Back to the single empty snapshot. Not undoable.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn current(&self) -> &PathRef {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
