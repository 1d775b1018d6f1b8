//! Reference sequences and properties of the rasterization and transform core.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashSet;

use approx::assert_relative_eq;
use proptest::prelude::*;
use trueno_raster::geometry::{Pixel, Point};
use trueno_raster::raster::{
    rasterize_circle_midpoint, rasterize_line_bresenham, rasterize_line_dda,
};
use trueno_raster::transform::{apply_transform, reflect_x, shear, TransformParams};

fn px(coords: &[(i32, i32)]) -> Vec<Pixel> {
    coords.iter().map(|&(x, y)| Pixel::new(x, y)).collect()
}

// ============================================================================
// DDA
// ============================================================================

#[test]
fn dda_single_point() {
    assert_eq!(rasterize_line_dda(0, 0, 0, 0), px(&[(0, 0)]));
}

#[test]
fn dda_horizontal() {
    assert_eq!(
        rasterize_line_dda(0, 0, 4, 0),
        px(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])
    );
}

// ============================================================================
// Bresenham
// ============================================================================

#[test]
fn bresenham_gentle_rising_reference() {
    // pk starts at 0, so the first step already moves y
    assert_eq!(
        rasterize_line_bresenham(0, 0, 4, 2),
        px(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)])
    );
    assert_eq!(
        rasterize_line_bresenham(0, 0, 5, 2),
        px(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
    );
}

#[test]
fn bresenham_vertical_runs_upward() {
    assert_eq!(
        rasterize_line_bresenham(3, 2, 3, -1),
        px(&[(3, -1), (3, 0), (3, 1), (3, 2)])
    );
}

#[test]
fn bresenham_diagonals() {
    assert_eq!(
        rasterize_line_bresenham(0, 0, 3, 3),
        px(&[(0, 0), (1, 1), (2, 2), (3, 3)])
    );
    assert_eq!(
        rasterize_line_bresenham(0, 0, 3, -3),
        px(&[(0, 0), (1, -1), (2, -2), (3, -3)])
    );
}

// ============================================================================
// Midpoint circle
// ============================================================================

#[test]
fn circle_zero_radius_is_empty() {
    assert!(rasterize_circle_midpoint(0, 0, 0).is_empty());
}

#[test]
fn circle_radius_five_is_round_and_symmetric() {
    let points = rasterize_circle_midpoint(0, 0, 5);
    assert!(!points.is_empty());

    for p in &points {
        let d = f64::from(p.x * p.x + p.y * p.y).sqrt().round();
        assert!((d - 5.0).abs() <= 1.0, "{p:?} is {d} from the center");
    }

    let set: HashSet<Pixel> = points.iter().copied().collect();
    for p in &set {
        for (x, y) in [
            (p.x, p.y),
            (-p.x, p.y),
            (p.x, -p.y),
            (-p.x, -p.y),
            (p.y, p.x),
            (-p.y, p.x),
            (p.y, -p.x),
            (-p.y, -p.x),
        ] {
            assert!(set.contains(&Pixel::new(x, y)), "missing mirror ({x}, {y}) of {p:?}");
        }
    }
}

// ============================================================================
// Affine transform
// ============================================================================

#[test]
fn transform_scale_rotate_translate() {
    let params = TransformParams::new()
        .with_scale(2.0, 2.0)
        .with_rotation(90.0)
        .with_translation(10.0, 0.0);
    let p = apply_transform(Point::new(1.0, 0.0), &params);
    assert_relative_eq!(p.x, 10.0, epsilon = 1e-5);
    assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
}

#[test]
fn shear_uses_pre_shear_coordinates() {
    assert_eq!(shear(Point::new(1.0, 1.0), 1.0, 0.0), Point::new(2.0, 1.0));
    // Sequential evaluation would give y = 1 + 1 * 2 = 3
    assert_eq!(shear(Point::new(1.0, 1.0), 1.0, 1.0), Point::new(2.0, 2.0));
}

#[test]
fn transform_nan_propagates() {
    let p = apply_transform(Point::new(f32::NAN, 1.0), &TransformParams::IDENTITY);
    assert!(p.x.is_nan());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn dda_point_count(x1 in -500i32..500, y1 in -500i32..500, x2 in -500i32..500, y2 in -500i32..500) {
        let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
        prop_assert_eq!(rasterize_line_dda(x1, y1, x2, y2).len(), expected);
    }

    #[test]
    fn bresenham_direction_gives_same_set(x1 in -500i32..500, y1 in -500i32..500, x2 in -500i32..500, y2 in -500i32..500) {
        let forward: HashSet<Pixel> = rasterize_line_bresenham(x1, y1, x2, y2).into_iter().collect();
        let backward: HashSet<Pixel> = rasterize_line_bresenham(x2, y2, x1, y1).into_iter().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn identity_transform_is_identity(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
        let p = Point::new(x, y);
        prop_assert_eq!(apply_transform(p, &TransformParams::IDENTITY), p);
    }

    #[test]
    fn reflect_x_is_involution(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
        let params = TransformParams::new().with_reflection(true, false);
        let p = Point::new(x, y);
        prop_assert_eq!(apply_transform(apply_transform(p, &params), &params), p);
        prop_assert_eq!(reflect_x(reflect_x(p)), p);
    }
}
