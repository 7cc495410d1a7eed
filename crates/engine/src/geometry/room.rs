//! Room floor shapes and containment.

use kurbo::Point;
use shared::{Point2D, Room, RoomShape};

use super::{CANVAS_PAD, CANVAS_SCALE};

/// Axis-aligned floor rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl FloorRect {
    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

/// The floor's occupied area for a given room shape
#[derive(Debug, Clone, PartialEq)]
pub enum FloorPlan {
    /// Union of axis-aligned rectangles (Rectangle, Square, L-Shape)
    Rects(Vec<FloorRect>),
    /// Explicit outline (Custom); fewer than three points means the floor is
    /// not defined yet
    Polygon(Vec<Point2D>),
}

/// Rectangle spanning the full room footprint, inset by the canvas pad.
fn full_rect(room: &Room) -> FloorRect {
    FloorRect {
        x: CANVAS_PAD,
        y: CANVAS_PAD,
        w: room.width * CANVAS_SCALE,
        h: room.length * CANVAS_SCALE,
    }
}

/// The two rectangles forming an L-shaped floor: a main bar across the full
/// width and 60% of the length, and a wing below it covering half the width.
/// Both anchor at the pad origin.
pub fn l_shape_rects(room: &Room) -> [FloorRect; 2] {
    let full_w = room.width * CANVAS_SCALE;
    let full_h = room.length * CANVAS_SCALE;
    let main_h = (full_h * 0.6).round();
    let wing_h = full_h - main_h;
    let wing_w = (full_w * 0.5).round();
    [
        FloorRect {
            x: CANVAS_PAD,
            y: CANVAS_PAD,
            w: full_w,
            h: main_h,
        },
        FloorRect {
            x: CANVAS_PAD,
            y: CANVAS_PAD + main_h,
            w: wing_w,
            h: wing_h,
        },
    ]
}

/// The floor region(s) for the room's active shape.
pub fn floor_regions(room: &Room) -> FloorPlan {
    match room.shape {
        RoomShape::Rectangle | RoomShape::Square => FloorPlan::Rects(vec![full_rect(room)]),
        RoomShape::LShape => FloorPlan::Rects(l_shape_rects(room).to_vec()),
        RoomShape::Custom => {
            FloorPlan::Polygon(room.custom_polygon.clone().unwrap_or_default())
        }
    }
}

/// Pick the rectangle that governs clamping for a candidate center.
///
/// L-shape membership is decided by the center's vertical coordinate alone:
/// the item belongs to the wing once its center passes the main bar's
/// bottom, regardless of how far its footprint overhangs the boundary.
/// Downstream clamping relies on this exact behaviour; it is not a true
/// polygon containment test. Custom rooms have no governing rectangle.
pub fn region_for(room: &Room, cy: f64) -> Option<FloorRect> {
    match room.shape {
        RoomShape::Rectangle | RoomShape::Square => Some(full_rect(room)),
        RoomShape::LShape => {
            let [main, wing] = l_shape_rects(room);
            if cy > main.bottom() {
                Some(wing)
            } else {
                Some(main)
            }
        }
        RoomShape::Custom => None,
    }
}

/// Is the point on the room's floor?
pub fn contains_point(room: &Room, x: f64, y: f64) -> bool {
    match floor_regions(room) {
        FloorPlan::Rects(rects) => rects.iter().any(|r| r.contains(x, y)),
        FloorPlan::Polygon(poly) => point_in_polygon(&poly, Point::new(x, y)),
    }
}

/// Even-odd ray casting. Polygons with fewer than three points contain
/// nothing.
pub fn point_in_polygon(poly: &[Point2D], pt: Point) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (pi, pj) = (poly[i], poly[j]);
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = pi.x + (pt.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Area-weighted centroid of a polygon. Collinear outlines fall back to the
/// vertex average; fewer than three points have no centroid.
pub fn polygon_centroid(poly: &[Point2D]) -> Option<Point> {
    if poly.len() < 3 {
        return None;
    }
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let cross = poly[j].x * poly[i].y - poly[i].x * poly[j].y;
        area2 += cross;
        cx += (poly[j].x + poly[i].x) * cross;
        cy += (poly[j].y + poly[i].y) * cross;
        j = i;
    }
    if area2.abs() < 1e-9 {
        let n = poly.len() as f64;
        let avg_x = poly.iter().map(|p| p.x).sum::<f64>() / n;
        let avg_y = poly.iter().map(|p| p.y).sum::<f64>() / n;
        return Some(Point::new(avg_x, avg_y));
    }
    Some(Point::new(cx / (3.0 * area2), cy / (3.0 * area2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_room() -> Room {
        Room {
            width: 6.0,
            length: 5.0,
            shape: RoomShape::LShape,
            ..Room::default()
        }
    }

    fn triangle() -> Vec<Point2D> {
        vec![
            Point2D::new(40.0, 40.0),
            Point2D::new(360.0, 40.0),
            Point2D::new(200.0, 280.0),
        ]
    }

    #[test]
    fn test_rectangle_floor_spans_padded_room() {
        let room = Room::default(); // 4×3 m
        let FloorPlan::Rects(rects) = floor_regions(&room) else {
            panic!("rectangle room must yield rects");
        };
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].left(), 40.0);
        assert_eq!(rects[0].right(), 360.0);
        assert_eq!(rects[0].top(), 40.0);
        assert_eq!(rects[0].bottom(), 280.0);
    }

    #[test]
    fn test_l_shape_rects_dimensions() {
        // 6×5 m: full 480×400, main bar 480×240, wing 240×160 below it
        let [main, wing] = l_shape_rects(&l_room());
        assert_eq!((main.w, main.h), (480.0, 240.0));
        assert_eq!(main.bottom(), 280.0);
        assert_eq!((wing.w, wing.h), (240.0, 160.0));
        assert_eq!(wing.top(), 280.0);
        assert_eq!(wing.left(), 40.0);
    }

    #[test]
    fn test_region_for_picks_wing_by_center_coordinate() {
        let room = l_room();
        let [main, wing] = l_shape_rects(&room);

        // Center well inside the main bar
        assert_eq!(region_for(&room, 100.0), Some(main));
        // Center past the main bar's bottom (280)
        assert_eq!(region_for(&room, 300.0), Some(wing));
        // Horizontal position is deliberately ignored
        assert_eq!(region_for(&room, 350.0), Some(wing));

        // The center decides, not the footprint: a center still inside the
        // main bar stays with the main bar even when the item's lower edge
        // would overhang the boundary
        assert_eq!(region_for(&room, 270.0), Some(main));
        assert_eq!(region_for(&room, 280.0), Some(main));
    }

    #[test]
    fn test_contains_point_l_shape_union() {
        let room = l_room();
        // Inside main bar
        assert!(contains_point(&room, 400.0, 100.0));
        // Inside wing
        assert!(contains_point(&room, 100.0, 350.0));
        // The notch: right half below the main bar is outside
        assert!(!contains_point(&room, 400.0, 350.0));
        // Outside the pad
        assert!(!contains_point(&room, 10.0, 10.0));
    }

    #[test]
    fn test_point_in_polygon_triangle() {
        let poly = triangle();
        assert!(point_in_polygon(&poly, Point::new(200.0, 100.0)));
        assert!(!point_in_polygon(&poly, Point::new(60.0, 260.0)));
        assert!(!point_in_polygon(&poly, Point::new(500.0, 100.0)));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let two_points = vec![Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0)];
        assert!(!point_in_polygon(&two_points, Point::new(50.0, 0.0)));

        let room = Room {
            shape: RoomShape::Custom,
            custom_polygon: Some(two_points),
            ..Room::default()
        };
        assert!(!contains_point(&room, 50.0, 0.0));
    }

    #[test]
    fn test_polygon_centroid() {
        let square = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(100.0, 100.0),
            Point2D::new(0.0, 100.0),
        ];
        let c = polygon_centroid(&square).unwrap();
        assert_relative_eq!(c.x, 50.0);
        assert_relative_eq!(c.y, 50.0);

        assert!(polygon_centroid(&[Point2D::new(0.0, 0.0)]).is_none());

        // Collinear points fall back to the vertex average
        let line = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(100.0, 0.0),
        ];
        let c = polygon_centroid(&line).unwrap();
        assert_relative_eq!(c.x, 50.0);
        assert_relative_eq!(c.y, 0.0);
    }
}
