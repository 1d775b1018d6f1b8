//! Individual affine steps.
//!
//! Each function maps one point and nothing else. No matrix is built; the
//! arithmetic is written out per step.

use crate::geometry::Point;

/// Scale about the origin.
#[inline]
#[must_use]
pub fn scale(p: Point, sx: f32, sy: f32) -> Point {
    Point::new(p.x * sx, p.y * sy)
}

/// Rotate counter-clockwise about the origin by `degrees`.
///
/// `x' = x·cosθ − y·sinθ`, `y' = x·sinθ + y·cosθ`.
#[inline]
#[must_use]
pub fn rotate(p: Point, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Reflect across the X axis (negates `y`).
#[inline]
#[must_use]
pub fn reflect_x(p: Point) -> Point {
    Point::new(p.x, -p.y)
}

/// Reflect across the Y axis (negates `x`).
#[inline]
#[must_use]
pub fn reflect_y(p: Point) -> Point {
    Point::new(-p.x, p.y)
}

/// Shear: `x' = x + shx·y`, `y' = y + shy·x`.
///
/// Both outputs read the pre-shear coordinates.
#[inline]
#[must_use]
pub fn shear(p: Point, shx: f32, shy: f32) -> Point {
    Point::new(p.x + shx * p.y, p.y + shy * p.x)
}

/// Translate by `(tx, ty)`.
#[inline]
#[must_use]
pub fn translate(p: Point, tx: f32, ty: f32) -> Point {
    Point::new(p.x + tx, p.y + ty)
}
