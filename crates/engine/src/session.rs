//! Editing session façade
//!
//! One `LayoutSession` owns everything a single editing session needs: the
//! live layout, its history and the current selection. History is an
//! implementation-internal structure — the furniture list is the observable
//! state a renderer should watch, and sessions are explicit objects with a
//! lifecycle (created when the editor opens, dropped on navigation away),
//! not process-wide globals.

use shared::{DesignSnapshot, FurnitureItem, FurnitureUpdate, ObjectId, Room};

use crate::catalog::CatalogEntry;
use crate::geometry::normalize_rotation;
use crate::state::layout::{History, LayoutState};

/// Grid snapping settings
#[derive(Debug, Clone, PartialEq)]
pub struct SnapSettings {
    /// Snapping enabled
    pub enabled: bool,
    /// Grid cell size in canvas units
    pub grid_size: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        // 8 canvas units = 0.1 m
        Self {
            enabled: true,
            grid_size: 8.0,
        }
    }
}

/// A single editing session: one room, one furniture collection, one history
#[derive(Default)]
pub struct LayoutSession {
    pub layout: LayoutState,
    pub snap: SnapSettings,
    history: History,
    selected: Option<ObjectId>,
}

impl LayoutSession {
    /// Create a session with the default room and no furniture.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Furniture commands ────────────────────────────────────

    /// Add a catalog item, select it and commit one history entry.
    pub fn add_furniture(&mut self, entry: &CatalogEntry) -> ObjectId {
        let id = self.layout.add_from_catalog(entry);
        self.selected = Some(id.clone());
        self.commit_history();
        id
    }

    /// Transient update during a gesture (drag, slider); no history commit.
    /// Rotations are normalized to [0, 360) on the way in.
    pub fn update_furniture(&mut self, id: &ObjectId, update: &FurnitureUpdate) {
        let mut update = update.clone();
        if let Some(deg) = update.rotation {
            update.rotation = Some(normalize_rotation(deg));
        }
        self.layout.update_item(id, &update);
    }

    /// Snap-then-clamp a candidate center and write it through. Returns the
    /// final center so the caller can reconcile its transient visual
    /// position; no history commit.
    pub fn apply_placement(&mut self, id: &ObjectId, cx: f64, cy: f64) -> Option<(f64, f64)> {
        let snap = self.snap.enabled.then_some(self.snap.grid_size);
        self.layout.apply_placement(id, cx, cy, snap)
    }

    /// Checkpoint the current furniture state. Called once when a gesture
    /// settles, so one drag yields one history entry.
    pub fn commit_history(&mut self) {
        self.history.commit(&self.layout.furniture);
    }

    /// Delete an item, clear the selection and commit immediately — one user
    /// action, one history entry.
    pub fn delete_furniture(&mut self, id: &ObjectId) {
        self.layout.remove_item(id);
        self.selected = None;
        self.commit_history();
    }

    // ── Undo / redo ───────────────────────────────────────────

    /// Restore the previous snapshot, if any, and clear the selection.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.layout.furniture = snapshot;
            self.layout.notify_mutated();
            self.selected = None;
        }
    }

    /// Restore the next snapshot, if any, and clear the selection.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.layout.furniture = snapshot;
            self.layout.notify_mutated();
            self.selected = None;
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected = id;
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.selected.as_ref().and_then(|id| self.layout.get_item(id))
    }

    // ── Room & persistence boundary ───────────────────────────

    /// Replace the room wholesale (finished setup form or a completed custom
    /// outline). Furniture and history are untouched.
    pub fn set_room(&mut self, room: Room) {
        self.layout.set_room(room);
    }

    /// Replace room, furniture and history from a persisted snapshot. The
    /// loaded state becomes the single history entry.
    pub fn load_design(&mut self, snapshot: DesignSnapshot) {
        self.history.reset(&snapshot.furniture);
        self.layout.set_room(snapshot.room);
        self.layout.furniture = snapshot.furniture;
        self.layout.notify_mutated();
        self.selected = None;
        tracing::debug!(
            items = self.layout.furniture.len(),
            "design loaded into session"
        );
    }

    /// Deep copy of the current room and furniture for persistence.
    pub fn snapshot_for_save(&self) -> DesignSnapshot {
        DesignSnapshot {
            room: self.layout.room.clone(),
            furniture: self.layout.furniture.clone(),
        }
    }
}
