//! Layout state management
//!
//! This module provides the live furniture collection with its room context,
//! plus undo/redo history and snapshot persistence.

mod furniture_ops;
mod history;
mod persistence;

pub use history::History;
pub use persistence::{
    autosave, delete_design, has_autosave, list_designs, load_autosave, load_design, save_design,
};

use shared::{FurnitureItem, ObjectId, Room};

/// Live layout state: one room and the furniture placed in it
///
/// Items are kept in insertion order; rendering may reorder for display, the
/// store does not. History holds copies of this state, never references into
/// it.
#[derive(Default)]
pub struct LayoutState {
    /// Room configuration currently being edited
    pub room: Room,
    /// Placed furniture, in insertion order
    pub furniture: Vec<FurnitureItem>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl LayoutState {
    /// Current state version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get an item by id
    pub fn get_item(&self, id: &ObjectId) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|f| f.id == *id)
    }

    /// Get a mutable item by id
    pub fn get_item_mut(&mut self, id: &ObjectId) -> Option<&mut FurnitureItem> {
        self.furniture.iter_mut().find(|f| f.id == *id)
    }

    /// Bump the version without any other effect
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Replace the room wholesale. Rooms are never edited field-by-field
    /// during furniture editing.
    pub fn set_room(&mut self, room: Room) {
        self.room = room;
        self.version += 1;
    }
}
