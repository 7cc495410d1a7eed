//! Grid snapping.

/// Quantize a coordinate to the nearest grid line.
///
/// Snapping runs before clamping, never after: a snapped center can still be
/// clamped back onto the floor, while clamping first and snapping after can
/// push the result back out of bounds. Non-positive resolutions disable the
/// grid and return the value unchanged.
pub fn snap_to_grid(value: f64, resolution: f64) -> f64 {
    if resolution <= 0.0 {
        return value;
    }
    (value / resolution).round() * resolution
}

/// Snap both coordinates of a point.
pub fn snap_point(x: f64, y: f64, resolution: f64) -> (f64, f64) {
    (snap_to_grid(x, resolution), snap_to_grid(y, resolution))
}
