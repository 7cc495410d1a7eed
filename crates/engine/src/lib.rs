//! 2D room-layout geometry and edit-history engine.
//!
//! Owns everything with algorithmic content in the layout designer: room
//! floor shapes and containment, rotation-aware boundary clamping, grid
//! snapping, the furniture store and its undo/redo history, composed behind
//! a per-session façade. Rendering, networking and authentication live in
//! other layers and only ever see plain snapshots.

pub mod catalog;
pub mod fixtures;
pub mod geometry;
pub mod session;
pub mod state;

pub use session::{LayoutSession, SnapSettings};
pub use state::layout::{History, LayoutState};
