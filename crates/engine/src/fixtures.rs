//! Factory functions for creating test data.
//!
//! Convenient helpers to construct rooms, furniture items and sessions used
//! by unit and integration tests.

use shared::{FurnitureItem, Point2D, Room, RoomShape};

use crate::catalog;
use crate::session::LayoutSession;

// ── Room factories ──────────────────────────────────────────────

/// The default 4×3 m rectangle room.
pub fn room_4x3() -> Room {
    Room::default()
}

/// A 6×5 m L-shape room: main bar 480×240, wing 240×160 canvas units.
pub fn l_room_6x5() -> Room {
    Room {
        width: 6.0,
        length: 5.0,
        shape: RoomShape::LShape,
        ..Room::default()
    }
}

/// A custom room whose outline is a triangle over the 4×3 m floor area.
pub fn triangle_room() -> Room {
    Room {
        shape: RoomShape::Custom,
        custom_polygon: Some(vec![
            Point2D::new(40.0, 40.0),
            Point2D::new(360.0, 40.0),
            Point2D::new(200.0, 280.0),
        ]),
        ..Room::default()
    }
}

/// A custom room still being drawn: too few points to act as a floor.
pub fn unfinished_custom_room() -> Room {
    Room {
        shape: RoomShape::Custom,
        custom_polygon: Some(vec![Point2D::new(40.0, 40.0), Point2D::new(360.0, 40.0)]),
        ..Room::default()
    }
}

// ── Furniture factories ─────────────────────────────────────────

/// A furniture item with explicit footprint and placement.
pub fn item_at(id: &str, kind: &str, width: f64, height: f64, x: f64, y: f64) -> FurnitureItem {
    FurnitureItem {
        id: id.to_string(),
        kind: kind.to_string(),
        width,
        height,
        x,
        y,
        rotation: 0.0,
        scale: 1.0,
        color: "#808080".to_string(),
        material: None,
        model_url: None,
    }
}

/// A 0.6×0.6 m chair centered in the default room.
pub fn chair(id: &str) -> FurnitureItem {
    item_at(id, "Chair", 0.6, 0.6, 200.0, 160.0)
}

/// A 2.0×0.9 m sofa centered in the default room.
pub fn sofa(id: &str) -> FurnitureItem {
    item_at(id, "Sofa", 2.0, 0.9, 200.0, 160.0)
}

/// A 2.0×1.6 m bed centered in the default room.
pub fn bed(id: &str) -> FurnitureItem {
    item_at(id, "Bed", 2.0, 1.6, 200.0, 160.0)
}

// ── Session factories ───────────────────────────────────────────

/// A fresh session with the default room and nothing placed.
pub fn empty_session() -> LayoutSession {
    LayoutSession::new()
}

/// A session with one chair already added and committed.
pub fn session_with_chair() -> (LayoutSession, shared::ObjectId) {
    let mut session = LayoutSession::new();
    let id = session.add_furniture(&catalog::find("Chair").expect("catalog chair"));
    (session, id)
}
