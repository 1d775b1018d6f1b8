//! SIMD batch evaluation of the transform pipeline.
//!
//! Evaluates the same step order as [`apply_transform`](super::apply_transform)
//! column-wise over all x and all y coordinates using trueno vectors, which
//! dispatch to the best available backend (SSE2/AVX2/AVX512/NEON).

use trueno::Vector;

use super::TransformParams;
use crate::error::{Error, Result};
use crate::geometry::Point;

fn backend<E: std::fmt::Display>(err: E) -> Error {
    Error::Backend(err.to_string())
}

/// Transform many points at once.
///
/// Results agree with the scalar pipeline up to f32 rounding. Order is
/// preserved; an empty input yields an empty output.
///
/// # Errors
///
/// Returns [`Error::Backend`] if a trueno vector operation fails.
pub fn transform_points_simd(points: &[Point], params: &TransformParams) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let n = points.len();
    let splat = |v: f32| Vector::from_vec(vec![v; n]);

    let xs = Vector::from_vec(points.iter().map(|p| p.x).collect());
    let ys = Vector::from_vec(points.iter().map(|p| p.y).collect());

    // Scale
    let xs = xs.mul(&splat(params.scale_x)).map_err(backend)?;
    let ys = ys.mul(&splat(params.scale_y)).map_err(backend)?;

    // Rotate
    let (sin, cos) = params.rotation_degrees.to_radians().sin_cos();
    let rx = xs
        .mul(&splat(cos))
        .map_err(backend)?
        .add(&ys.mul(&splat(-sin)).map_err(backend)?)
        .map_err(backend)?;
    let ry = xs
        .mul(&splat(sin))
        .map_err(backend)?
        .add(&ys.mul(&splat(cos)).map_err(backend)?)
        .map_err(backend)?;

    // Reflect
    let ry = if params.reflect_x_axis {
        ry.mul(&splat(-1.0)).map_err(backend)?
    } else {
        ry
    };
    let rx = if params.reflect_y_axis {
        rx.mul(&splat(-1.0)).map_err(backend)?
    } else {
        rx
    };

    // Shear, both columns from the pre-shear values
    let sx = rx
        .add(&ry.mul(&splat(params.shear_x)).map_err(backend)?)
        .map_err(backend)?;
    let sy = ry
        .add(&rx.mul(&splat(params.shear_y)).map_err(backend)?)
        .map_err(backend)?;

    // Translate
    let tx = sx.add(&splat(params.translate_x)).map_err(backend)?;
    let ty = sy.add(&splat(params.translate_y)).map_err(backend)?;

    Ok(tx
        .as_slice()
        .iter()
        .zip(ty.as_slice())
        .map(|(&x, &y)| Point::new(x, y))
        .collect())
}
