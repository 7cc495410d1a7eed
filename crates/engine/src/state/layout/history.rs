//! Undo/redo history over furniture snapshots

use shared::FurnitureItem;

/// Linear, branch-discarding edit history
///
/// A sequence of furniture snapshots plus a cursor. Entries past the cursor
/// are redo entries; they are dropped on the next commit. The history always
/// holds at least one entry, so the cursor is always valid. Restored
/// snapshots are independent copies, never live references into the store.
pub struct History {
    entries: Vec<Vec<FurnitureItem>>,
    idx: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A history seeded with a single empty snapshot
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new()],
            idx: 0,
        }
    }

    /// Record a snapshot after a completed edit gesture.
    ///
    /// One gesture commits once, however many transient updates happened in
    /// between, so one drag yields exactly one history entry. Any redo
    /// entries beyond the cursor are discarded.
    pub fn commit(&mut self, furniture: &[FurnitureItem]) {
        self.entries.truncate(self.idx + 1);
        self.entries.push(furniture.to_vec());
        self.idx = self.entries.len() - 1;
    }

    /// Step back and return the snapshot at the new cursor; `None` (and no
    /// state change) when already at the oldest entry.
    pub fn undo(&mut self) -> Option<Vec<FurnitureItem>> {
        if self.idx == 0 {
            return None;
        }
        self.idx -= 1;
        Some(self.entries[self.idx].clone())
    }

    /// Step forward and return the snapshot at the new cursor; `None` (and
    /// no state change) when already at the newest entry.
    pub fn redo(&mut self) -> Option<Vec<FurnitureItem>> {
        if self.idx + 1 >= self.entries.len() {
            return None;
        }
        self.idx += 1;
        Some(self.entries[self.idx].clone())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.idx > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.idx + 1 < self.entries.len()
    }

    /// Replace the whole history with a single entry. Loading a design is
    /// deliberately not undoable back into the previous design's edits.
    pub fn reset(&mut self, furniture: &[FurnitureItem]) {
        self.entries = vec![furniture.to_vec()];
        self.idx = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> FurnitureItem {
        FurnitureItem {
            id: id.to_string(),
            kind: "Chair".to_string(),
            width: 0.6,
            height: 0.6,
            x: 200.0,
            y: 160.0,
            rotation: 0.0,
            scale: 1.0,
            color: "#8B7355".to_string(),
            material: None,
            model_url: None,
        }
    }

    #[test]
    fn test_fresh_history_has_no_moves() {
        let mut h = History::new();
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(h.undo().is_none());
        assert!(h.redo().is_none());
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut h = History::new();
        h.commit(&[item("a")]);
        h.commit(&[item("a"), item("b")]);

        let snap = h.undo().unwrap();
        assert_eq!(snap.len(), 1);
        let snap = h.undo().unwrap();
        assert!(snap.is_empty());
        assert!(h.undo().is_none());

        let snap = h.redo().unwrap();
        assert_eq!(snap.len(), 1);
        let snap = h.redo().unwrap();
        assert_eq!(snap.len(), 2);
        assert!(h.redo().is_none());
    }

    #[test]
    fn test_commit_discards_redo_branch() {
        let mut h = History::new();
        h.commit(&[item("a")]);
        h.commit(&[item("a"), item("b")]);
        h.undo();
        assert!(h.can_redo());

        h.commit(&[item("a"), item("c")]);
        assert!(!h.can_redo());

        // The discarded branch is gone; undo now walks the new lineage
        let snap = h.undo().unwrap();
        assert_eq!(snap[0].id, "a");
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut h = History::new();
        let mut furniture = vec![item("a")];
        h.commit(&furniture);
        furniture[0].x = 999.0;

        h.undo();
        let snap = h.redo().unwrap();
        assert_eq!(snap[0].x, 200.0);
    }

    #[test]
    fn test_reset_leaves_single_entry() {
        let mut h = History::new();
        h.commit(&[item("a")]);
        h.commit(&[item("b")]);
        h.reset(&[item("z")]);

        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(h.undo().is_none());
    }
}
