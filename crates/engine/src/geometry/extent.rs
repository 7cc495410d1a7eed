//! Axis-aligned half-extents of a rotated, scaled footprint.

use super::CANVAS_SCALE;

/// Normalize a rotation in degrees to [0, 360).
pub fn normalize_rotation(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Half-width and half-height, in canvas units, of the smallest axis-aligned
/// box containing the footprint after scaling and rotation, centered at the
/// origin.
///
/// At 0°/180° this is exactly half the scaled footprint; at 90°/270° the two
/// halves swap; intermediate angles land between the axis-aligned and
/// diagonal extents.
pub fn half_extents(width_m: f64, height_m: f64, scale: f64, rotation_deg: f64) -> (f64, f64) {
    let iw = width_m * CANVAS_SCALE * scale;
    let ih = height_m * CANVAS_SCALE * scale;
    let rad = rotation_deg.to_radians();
    let sin = rad.sin().abs();
    let cos = rad.cos().abs();
    ((cos * iw + sin * ih) / 2.0, (sin * iw + cos * ih) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_aligned_extents() {
        // Chair 0.6×0.6 m at scale 1: 48×48 canvas units
        let (hw, hh) = half_extents(0.6, 0.6, 1.0, 0.0);
        assert_relative_eq!(hw, 24.0);
        assert_relative_eq!(hh, 24.0);

        // Sofa 2.0×0.9 m: 160×72
        let (hw, hh) = half_extents(2.0, 0.9, 1.0, 180.0);
        assert_relative_eq!(hw, 80.0, epsilon = 1e-9);
        assert_relative_eq!(hh, 36.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let (hw, hh) = half_extents(2.0, 0.9, 1.0, 90.0);
        assert_relative_eq!(hw, 36.0, epsilon = 1e-9);
        assert_relative_eq!(hh, 80.0, epsilon = 1e-9);

        let (hw270, hh270) = half_extents(2.0, 0.9, 1.0, 270.0);
        assert_relative_eq!(hw270, hw, epsilon = 1e-9);
        assert_relative_eq!(hh270, hh, epsilon = 1e-9);
    }

    #[test]
    fn test_intermediate_angle_grows_extents() {
        // Bed 2.0×1.6 m at 45° needs more room than axis-aligned on both axes
        let (hw0, hh0) = half_extents(2.0, 1.6, 1.0, 0.0);
        let (hw45, hh45) = half_extents(2.0, 1.6, 1.0, 45.0);
        assert!(hw45 > hw0);
        assert!(hh45 > hh0);
        // Bounded by the diagonal
        let diag = (hw0 * hw0 + hh0 * hh0).sqrt();
        assert!(hw45 <= diag + 1e-9);
        assert!(hh45 <= diag + 1e-9);
    }

    #[test]
    fn test_scale_multiplies_extents() {
        let (hw1, hh1) = half_extents(1.2, 0.6, 1.0, 30.0);
        let (hw2, hh2) = half_extents(1.2, 0.6, 2.0, 30.0);
        assert_relative_eq!(hw2, 2.0 * hw1, epsilon = 1e-9);
        assert_relative_eq!(hh2, 2.0 * hh1, epsilon = 1e-9);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let (hw, hh) = half_extents(2.0, 1.6, 1.0, 37.0);
        let (hw2, hh2) = half_extents(2.0, 1.6, 1.0, 397.0);
        assert_relative_eq!(hw, hw2, epsilon = 1e-9);
        assert_relative_eq!(hh, hh2, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0.0), 0.0);
        assert_eq!(normalize_rotation(360.0), 0.0);
        assert_eq!(normalize_rotation(-90.0), 270.0);
        assert_eq!(normalize_rotation(725.0), 5.0);
    }
}
