//! Boundary clamping for furniture placement.

use kurbo::{Line, Point};
use shared::{FurnitureItem, Point2D, Room, RoomShape};

use super::extent::half_extents;
use super::room;

/// Inset applied when a center is pulled back onto a custom polygon's
/// boundary, so the result lands strictly inside rather than on the edge.
const POLYGON_EDGE_INSET: f64 = 1.0;

/// Clamp a candidate center so the item's rotated bounding box stays inside
/// the applicable floor region. Returns the corrected center; the caller
/// applies it. Never fails and never mutates the item.
pub fn clamp_to_room(cx: f64, cy: f64, item: &FurnitureItem, room: &Room) -> (f64, f64) {
    if room.shape == RoomShape::Custom {
        return clamp_to_polygon(cx, cy, room);
    }

    let (hw, hh) = half_extents(item.width, item.height, item.scale, item.rotation);
    // region_for is only None for Custom, which is handled above
    let Some(rect) = room::region_for(room, cy) else {
        return (cx, cy);
    };
    (
        clamp_axis(cx, rect.left(), rect.right(), hw),
        clamp_axis(cy, rect.top(), rect.bottom(), hh),
    )
}

/// Per-axis clamp. An item wider than the span degrades to the span's
/// midpoint instead of producing an inverted range.
fn clamp_axis(v: f64, lo: f64, hi: f64, half: f64) -> f64 {
    if hi - lo < 2.0 * half {
        return (lo + hi) / 2.0;
    }
    v.clamp(lo + half, hi - half)
}

/// Custom polygons have no per-axis clamp. Policy: an undefined outline
/// (fewer than three points) leaves the center untouched; a center already
/// inside is returned unchanged; a center outside is pulled back to the
/// boundary along the ray from the polygon centroid, inset slightly inward.
/// If that ray crosses no edge, the result is the centroid when it lies
/// inside, else the vertex nearest the candidate.
///
/// The rotated bounding box is not checked against the polygon edges here,
/// only the center — arbitrary concave outlines have no cheap exact clamp,
/// and keeping the center inside matches how the editor treats mid-draw
/// rooms.
fn clamp_to_polygon(cx: f64, cy: f64, room: &Room) -> (f64, f64) {
    let Some(poly) = room.usable_polygon() else {
        return (cx, cy);
    };
    let candidate = Point::new(cx, cy);
    if room::point_in_polygon(poly, candidate) {
        return (cx, cy);
    }
    let Some(centroid) = room::polygon_centroid(poly) else {
        return (cx, cy);
    };

    // Walk the ray centroid → candidate and find the last boundary crossing
    // before the candidate. Crossings alternate inside/outside, so the span
    // just before the last one is inside the polygon.
    let ray = Line::new(centroid, candidate);
    let mut exit_t: Option<f64> = None;
    let n = poly.len();
    for i in 0..n {
        let a = Point::new(poly[i].x, poly[i].y);
        let b = Point::new(poly[(i + 1) % n].x, poly[(i + 1) % n].y);
        if let Some((t, u)) = segment_intersection(ray, Line::new(a, b)) {
            if (0.0..=1.0).contains(&t) && (-1e-9..=1.0 + 1e-9).contains(&u) {
                exit_t = Some(exit_t.map_or(t, |best: f64| best.max(t)));
            }
        }
    }

    let Some(t) = exit_t else {
        // No crossing found. A concave outline can put its own centroid
        // outside the floor (the ray then starts and ends outside without
        // touching an edge), so the centroid is only a valid fallback when
        // it is itself inside; otherwise settle for the vertex nearest the
        // candidate.
        if room::point_in_polygon(poly, centroid) {
            return (centroid.x, centroid.y);
        }
        return nearest_vertex(poly, candidate);
    };

    let dir = candidate - centroid;
    let len = dir.hypot();
    if len < 1e-9 {
        return (centroid.x, centroid.y);
    }
    let inset_t = (t - POLYGON_EDGE_INSET / len).max(0.0);
    let clamped = centroid + dir * inset_t;
    tracing::debug!(
        from = ?(cx, cy),
        to = ?(clamped.x, clamped.y),
        "center pulled back inside custom polygon"
    );
    (clamped.x, clamped.y)
}

/// The polygon vertex closest to a point. Callers guarantee at least three
/// vertices.
fn nearest_vertex(poly: &[Point2D], to: Point) -> (f64, f64) {
    let mut best = (poly[0].x, poly[0].y);
    let mut best_d = f64::INFINITY;
    for p in poly {
        let d = (p.x - to.x).powi(2) + (p.y - to.y).powi(2);
        if d < best_d {
            best_d = d;
            best = (p.x, p.y);
        }
    }
    best
}

/// Intersection of two segments as parameters along each; parallel segments
/// yield nothing.
fn segment_intersection(l1: Line, l2: Line) -> Option<(f64, f64)> {
    let d1 = l1.p1 - l1.p0;
    let d2 = l2.p1 - l2.p0;
    let cross = d1.x * d2.y - d1.y * d2.x;

    if cross.abs() < 1e-10 {
        return None;
    }

    let d = l2.p0 - l1.p0;
    let t = (d.x * d2.y - d.y * d2.x) / cross;
    let u = (d.x * d1.y - d.y * d1.x) / cross;
    Some((t, u))
}
