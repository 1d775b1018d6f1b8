//! 2D affine transform pipeline.
//!
//! Places a shape defined in local coordinates into world coordinates by a
//! fixed composition of steps:
//!
//! 1. scale about the origin
//! 2. rotate about the origin
//! 3. reflect across the X axis, then across the Y axis
//! 4. shear (simultaneous)
//! 5. translate
//!
//! The order is part of the contract; reordering changes results. Each step is
//! also exposed on its own so callers can assemble other pipelines.

mod batch;
mod steps;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

pub use batch::transform_points_simd;
pub use steps::{reflect_x, reflect_y, rotate, scale, shear, translate};

/// Parameters of the affine pipeline.
///
/// The default value is the identity: unit scale, no rotation, no reflection,
/// no shear, no translation. A step with neutral values has no visible effect,
/// so there are no separate on/off switches.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::transform::TransformParams;
///
/// let params = TransformParams::new().with_translation(10.0, 5.0);
/// assert_eq!(params.apply(Point::new(1.0, 1.0)), Point::new(11.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Horizontal scale factor.
    pub scale_x: f32,
    /// Vertical scale factor.
    pub scale_y: f32,
    /// Counter-clockwise rotation in degrees.
    pub rotation_degrees: f32,
    /// Negate `y` after rotation.
    pub reflect_x_axis: bool,
    /// Negate `x` after rotation.
    pub reflect_y_axis: bool,
    /// Horizontal shear factor (`x += shear_x · y`).
    pub shear_x: f32,
    /// Vertical shear factor (`y += shear_y · x`).
    pub shear_y: f32,
    /// Horizontal translation.
    pub translate_x: f32,
    /// Vertical translation.
    pub translate_y: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformParams {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_degrees: 0.0,
        reflect_x_axis: false,
        reflect_y_axis: false,
        shear_x: 0.0,
        shear_y: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Identity parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Set the scale factors.
    #[must_use]
    pub const fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale_x = sx;
        self.scale_y = sy;
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set both reflection flags.
    #[must_use]
    pub const fn with_reflection(mut self, across_x_axis: bool, across_y_axis: bool) -> Self {
        self.reflect_x_axis = across_x_axis;
        self.reflect_y_axis = across_y_axis;
        self
    }

    /// Set the shear factors.
    #[must_use]
    pub const fn with_shear(mut self, shx: f32, shy: f32) -> Self {
        self.shear_x = shx;
        self.shear_y = shy;
        self
    }

    /// Set the translation.
    #[must_use]
    pub const fn with_translation(mut self, tx: f32, ty: f32) -> Self {
        self.translate_x = tx;
        self.translate_y = ty;
        self
    }

    /// Whether every parameter is neutral.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Map a single point through the pipeline.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        apply_transform(p, self)
    }

    /// Map every point through the pipeline, preserving order.
    #[must_use]
    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| apply_transform(p, self)).collect()
    }
}

/// Map a local-space point to world space.
///
/// Steps run in the fixed order scale → rotate → reflect → shear → translate.
/// Non-finite input propagates through the arithmetic unchanged in kind.
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::transform::{apply_transform, TransformParams};
///
/// let params = TransformParams::new()
///     .with_scale(2.0, 2.0)
///     .with_rotation(90.0)
///     .with_translation(10.0, 0.0);
/// let p = apply_transform(Point::new(1.0, 0.0), &params);
/// assert!((p.x - 10.0).abs() < 1e-5);
/// assert!((p.y - 2.0).abs() < 1e-5);
/// ```
#[must_use]
pub fn apply_transform(p: Point, params: &TransformParams) -> Point {
    let mut p = scale(p, params.scale_x, params.scale_y);
    p = rotate(p, params.rotation_degrees);
    if params.reflect_x_axis {
        p = reflect_x(p);
    }
    if params.reflect_y_axis {
        p = reflect_y(p);
    }
    p = shear(p, params.shear_x, params.shear_y);
    translate(p, params.translate_x, params.translate_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity_params() {
        let params = TransformParams::default();
        assert!(params.is_identity());
        for p in [
            Point::new(0.0, 0.0),
            Point::new(1.5, -2.25),
            Point::new(-1e6, 3e5),
        ] {
            assert_eq!(apply_transform(p, &params), p);
        }
    }

    #[test]
    fn test_reflect_x_involution() {
        let params = TransformParams::new().with_reflection(true, false);
        let p = Point::new(4.0, -9.5);
        assert_eq!(params.apply(params.apply(p)), p);
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let params = TransformParams::new()
            .with_scale(2.0, 2.0)
            .with_rotation(90.0)
            .with_translation(10.0, 0.0);
        let p = params.apply(Point::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_order_is_not_commutative() {
        // Scale after translation would give (22, 0) instead of (12, 0).
        let params = TransformParams::new()
            .with_scale(2.0, 1.0)
            .with_translation(10.0, 0.0);
        assert_eq!(params.apply(Point::new(1.0, 0.0)), Point::new(12.0, 0.0));
    }

    #[test]
    fn test_reflection_happens_after_rotation() {
        // Rotate (1, 0) to (0, 1), then reflect across X to (0, -1).
        let params = TransformParams::new()
            .with_rotation(90.0)
            .with_reflection(true, false);
        let p = params.apply(Point::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_shear_after_reflection() {
        // Reflect (1, 1) across Y to (-1, 1), then shear x by 2: (-1 + 2, 1).
        let params = TransformParams::new()
            .with_reflection(false, true)
            .with_shear(2.0, 0.0);
        assert_eq!(params.apply(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let params = TransformParams::new().with_translation(1.0, 1.0);
        let out = params.apply_all(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert_eq!(out, vec![Point::new(1.0, 1.0), Point::new(6.0, 6.0)]);
    }

    #[test]
    fn test_nan_in_nan_out() {
        let params = TransformParams::new().with_rotation(30.0);
        let p = params.apply(Point::new(f32::NAN, 0.0));
        assert!(p.x.is_nan());
        assert!(p.y.is_nan());
    }

    #[test]
    fn test_builder_sets_fields() {
        let params = TransformParams::new()
            .with_scale(1.8, 1.8)
            .with_rotation(45.0)
            .with_reflection(false, true)
            .with_shear(0.9, 0.4)
            .with_translation(100.0, 520.0);
        assert_eq!(params.scale_x, 1.8);
        assert_eq!(params.rotation_degrees, 45.0);
        assert!(params.reflect_y_axis);
        assert!(!params.reflect_x_axis);
        assert_eq!(params.shear_y, 0.4);
        assert_eq!(params.translate_y, 520.0);
        assert!(!params.is_identity());
    }
}
