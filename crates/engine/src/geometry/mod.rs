//! Geometric primitives for furniture placement.

pub mod clamp;
pub mod extent;
pub mod room;
pub mod snap;

pub use clamp::clamp_to_room;
pub use extent::{half_extents, normalize_rotation};
pub use room::{
    contains_point, floor_regions, l_shape_rects, point_in_polygon, polygon_centroid, region_for,
    FloorPlan, FloorRect,
};
pub use snap::{snap_point, snap_to_grid};

/// Canvas units per metre
pub const CANVAS_SCALE: f64 = 80.0;

/// Inset from the canvas origin to the room's top-left corner, in canvas units
pub const CANVAS_PAD: f64 = 40.0;

/// Convert a canvas coordinate to metres in the room's frame.
///
/// The same conversion maps a 2D canvas position onto the 3D scene's ground
/// plane (the scene's up axis is the 2D plane's normal).
pub fn canvas_to_metres(v: f64) -> f64 {
    (v - CANVAS_PAD) / CANVAS_SCALE
}

/// Convert metres in the room's frame to a canvas coordinate.
pub fn metres_to_canvas(m: f64) -> f64 {
    CANVAS_PAD + m * CANVAS_SCALE
}
