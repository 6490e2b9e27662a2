//! Linear undo history of raster snapshots.

/// Ordered snapshots with a cursor pointing at the one currently on screen.
///
/// The stack is never empty: it is created with the initial (blank) capture
/// and `cursor < len` always holds.
#[derive(Debug, Clone)]
pub struct HistoryStack<S> {
    entries: Vec<S>,
    cursor: usize,
}

// Never empty, so `len` has no `is_empty` partner.
#[allow(clippy::len_without_is_empty)]
impl<S> HistoryStack<S> {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Record a new snapshot, discarding anything that was undone.
    pub fn push(&mut self, snapshot: S) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry.
    /// Returns the snapshot to restore, or None if already at the first entry.
    pub fn undo(&mut self) -> Option<&S> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &S {
        &self.entries[self.cursor]
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, including any redo tail not yet discarded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
