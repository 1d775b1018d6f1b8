//! Line rasterization.
//!
//! Two classical algorithms with different numeric trade-offs:
//!
//! - [`rasterize_line_dda`]: floating-point increments, one sample per step of
//!   the dominant axis. Accumulates rounding error; no correction is applied.
//! - [`rasterize_line_bresenham`]: integer decision variable, split into a
//!   vertical special case and four slope regimes.

use crate::geometry::Pixel;

// ============================================================================
// DDA
// ============================================================================

/// Rasterize a line with the Digital Differential Analyzer.
///
/// Emits `max(|Δx|, |Δy|) + 1` pixels, or exactly one pixel when both
/// endpoints coincide. Samples are `(round(x), round(y))` with rounding half
/// away from zero, where the accumulator starts at an endpoint and advances by
/// `Δ / steps` after every emission.
///
/// Swapping the endpoints yields the exact reverse sequence: the recurrence
/// always runs from the lexicographically smaller endpoint and the result is
/// reversed when the caller's start is the larger one.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Pixel;
/// use trueno_raster::raster::rasterize_line_dda;
///
/// let pixels = rasterize_line_dda(0, 0, 4, 0);
/// assert_eq!(pixels.len(), 5);
/// assert_eq!(pixels[4], Pixel::new(4, 0));
/// ```
#[must_use]
pub fn rasterize_line_dda(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    if (x2, y2) < (x1, y1) {
        let mut pixels = dda_from(x2, y2, x1, y1);
        pixels.reverse();
        return pixels;
    }
    dda_from(x1, y1, x2, y2)
}

fn dda_from(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    // f64 holds every i32 difference exactly
    let xdif = f64::from(x2) - f64::from(x1);
    let ydif = f64::from(y2) - f64::from(y1);

    let steps = xdif.abs().max(ydif.abs()) as u32;
    if steps == 0 {
        return vec![Pixel::new(x1, y1)];
    }

    let xinc = xdif / f64::from(steps);
    let yinc = ydif / f64::from(steps);

    let mut pixels = Vec::with_capacity(steps as usize + 1);
    let mut x = f64::from(x1);
    let mut y = f64::from(y1);
    for _ in 0..=steps {
        pixels.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += xinc;
        y += yinc;
    }
    pixels
}

// ============================================================================
// Bresenham
// ============================================================================

/// Slope regime of a line, as used to pick a Bresenham case.
///
/// `m = Δy / Δx`; regimes are decided with exact integer comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeRegime {
    /// `x1 == x2`.
    Vertical,
    /// `0 ≤ m ≤ 1`: drive on x, step y up.
    GentleRising,
    /// `m > 1`: drive on y, step x right.
    SteepRising,
    /// `-1 ≤ m < 0`: drive on x, step y down.
    GentleFalling,
    /// `m < -1`: drive on y downwards, step x right.
    SteepFalling,
}

impl SlopeRegime {
    /// Classify the line from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn classify(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        if x1 == x2 {
            return Self::Vertical;
        }
        let dx = i64::from(x2) - i64::from(x1);
        let dy = i64::from(y2) - i64::from(y1);
        let rising = dy == 0 || (dy > 0) == (dx > 0);
        let steep = dy.abs() > dx.abs();

        match (rising, steep) {
            (true, false) => Self::GentleRising,
            (true, true) => Self::SteepRising,
            (false, false) => Self::GentleFalling,
            (false, true) => Self::SteepFalling,
        }
    }
}

/// Rasterize a line with Bresenham's integer algorithm.
///
/// Each regime first normalizes the endpoint order (smaller x first, except
/// [`SlopeRegime::SteepRising`] which starts at the smaller y), then runs its
/// own decision-variable recurrence. The result has `|dominant Δ| + 1` pixels.
///
/// Because of that normalization, `(A, B)` and `(B, A)` run the same
/// recurrence from the same start and return identical sequences, not
/// reversed ones. Callers should rely only on the pixel sets being equal.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Pixel;
/// use trueno_raster::raster::rasterize_line_bresenham;
///
/// let pixels = rasterize_line_bresenham(0, 0, 5, 2);
/// assert_eq!(pixels[1], Pixel::new(1, 0));
/// assert_eq!(pixels[5], Pixel::new(5, 2));
/// ```
#[must_use]
pub fn rasterize_line_bresenham(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    match SlopeRegime::classify(x1, y1, x2, y2) {
        SlopeRegime::Vertical => {
            let (ys, ye) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
            (ys..=ye).map(|y| Pixel::new(x1, y)).collect()
        }
        SlopeRegime::GentleRising => {
            let (x1, y1, x2, y2) = start_at_smaller_x(x1, y1, x2, y2);
            gentle_rising(x1, y1, x2 - x1, y2 - y1)
        }
        SlopeRegime::SteepRising => {
            let (x1, y1, x2, y2) = start_at_smaller_y(x1, y1, x2, y2);
            steep_rising(x1, y1, x2 - x1, y2 - y1)
        }
        SlopeRegime::GentleFalling => {
            let (x1, y1, x2, y2) = start_at_smaller_x(x1, y1, x2, y2);
            gentle_falling(x1, y1, x2 - x1, y1 - y2)
        }
        SlopeRegime::SteepFalling => {
            let (x1, y1, x2, y2) = start_at_smaller_x(x1, y1, x2, y2);
            steep_falling(x1, y1, x2 - x1, y1 - y2)
        }
    }
}

fn start_at_smaller_x(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64, i64, i64) {
    if x1 > x2 {
        widen(x2, y2, x1, y1)
    } else {
        widen(x1, y1, x2, y2)
    }
}

fn start_at_smaller_y(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64, i64, i64) {
    if y1 > y2 {
        widen(x2, y2, x1, y1)
    } else {
        widen(x1, y1, x2, y2)
    }
}

fn widen(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64, i64, i64) {
    (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2))
}

#[inline]
fn pixel(x: i64, y: i64) -> Pixel {
    Pixel::new(x as i32, y as i32)
}

/// `0 ≤ m ≤ 1`; `dx > 0`, `0 ≤ dy ≤ dx`.
fn gentle_rising(mut x: i64, mut y: i64, dx: i64, dy: i64) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(dx as usize + 1);
    let mut pk = 2 * dy - dx;
    for _ in 0..=dx {
        pixels.push(pixel(x, y));
        x += 1;
        if pk < 0 {
            pk += 2 * dy;
        } else {
            y += 1;
            pk += 2 * dy - 2 * dx;
        }
    }
    pixels
}

/// `m > 1`; `dy > dx > 0`.
fn steep_rising(mut x: i64, mut y: i64, dx: i64, dy: i64) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(dy as usize + 1);
    let mut pk = 2 * dx - dy;
    for _ in 0..=dy {
        pixels.push(pixel(x, y));
        y += 1;
        if pk < 0 {
            pk += 2 * dx;
        } else {
            x += 1;
            pk += 2 * dx - 2 * dy;
        }
    }
    pixels
}

/// `-1 ≤ m < 0`; `dx > 0`, `0 < fall ≤ dx` where `fall = y1 - y2`.
fn gentle_falling(mut x: i64, mut y: i64, dx: i64, fall: i64) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(dx as usize + 1);
    let mut pk = 2 * fall - dx;
    for _ in 0..=dx {
        pixels.push(pixel(x, y));
        x += 1;
        if pk < 0 {
            pk += 2 * fall;
        } else {
            y -= 1;
            pk += 2 * fall - 2 * dx;
        }
    }
    pixels
}

/// `m < -1`; `fall > dx > 0` where `fall = y1 - y2`.
fn steep_falling(mut x: i64, mut y: i64, dx: i64, fall: i64) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(fall as usize + 1);
    let mut pk = 2 * dx - fall;
    for _ in 0..=fall {
        pixels.push(pixel(x, y));
        y -= 1;
        if pk < 0 {
            pk += 2 * dx;
        } else {
            x += 1;
            pk += 2 * dx - 2 * fall;
        }
    }
    pixels
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// DDA emits one pixel per dominant-axis step plus the start.
        #[test]
        fn prop_dda_point_count(
            x1 in -500i32..500, y1 in -500i32..500,
            x2 in -500i32..500, y2 in -500i32..500,
        ) {
            let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
            prop_assert_eq!(rasterize_line_dda(x1, y1, x2, y2).len(), expected);
        }

        /// Swapping DDA endpoints reverses the sequence.
        #[test]
        fn prop_dda_reverse_symmetry(
            x1 in -500i32..500, y1 in -500i32..500,
            x2 in -500i32..500, y2 in -500i32..500,
        ) {
            let forward = rasterize_line_dda(x1, y1, x2, y2);
            let mut backward = rasterize_line_dda(x2, y2, x1, y1);
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        /// DDA starts and ends on the endpoints and never skips on the dominant axis.
        #[test]
        fn prop_dda_endpoints_and_no_gaps(
            x1 in -200i32..200, y1 in -200i32..200,
            x2 in -200i32..200, y2 in -200i32..200,
        ) {
            let pixels = rasterize_line_dda(x1, y1, x2, y2);
            prop_assert_eq!(pixels.first().copied(), Some(Pixel::new(x1, y1)));
            prop_assert_eq!(pixels.last().copied(), Some(Pixel::new(x2, y2)));
            for pair in pixels.windows(2) {
                prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
                prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
        }

        /// Far from the origin DDA still hits both endpoints with the exact count.
        #[test]
        fn prop_dda_exact_at_large_coordinates(
            x1 in -2_000_000_000i32..2_000_000_000, y1 in -2_000_000_000i32..2_000_000_000,
            dx in -300i32..300, dy in -300i32..300,
        ) {
            let (x2, y2) = (x1 + dx, y1 + dy);
            let pixels = rasterize_line_dda(x1, y1, x2, y2);
            prop_assert_eq!(pixels.len(), dx.abs().max(dy.abs()) as usize + 1);
            prop_assert_eq!(pixels.first().copied(), Some(Pixel::new(x1, y1)));
            prop_assert_eq!(pixels.last().copied(), Some(Pixel::new(x2, y2)));
        }

        /// Bresenham emits `|dominant Δ| + 1` pixels in every regime.
        #[test]
        fn prop_bresenham_point_count(
            x1 in -500i32..500, y1 in -500i32..500,
            x2 in -500i32..500, y2 in -500i32..500,
        ) {
            let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
            prop_assert_eq!(rasterize_line_bresenham(x1, y1, x2, y2).len(), expected);
        }

        /// Bresenham pixel sets match under endpoint swap.
        #[test]
        fn prop_bresenham_swap_same_set(
            x1 in -500i32..500, y1 in -500i32..500,
            x2 in -500i32..500, y2 in -500i32..500,
        ) {
            let a: BTreeSet<_> = rasterize_line_bresenham(x1, y1, x2, y2).into_iter().collect();
            let b: BTreeSet<_> = rasterize_line_bresenham(x2, y2, x1, y1).into_iter().collect();
            prop_assert_eq!(a, b);
        }

        /// Bresenham covers both endpoints and stays 8-connected.
        #[test]
        fn prop_bresenham_connected(
            x1 in -300i32..300, y1 in -300i32..300,
            x2 in -300i32..300, y2 in -300i32..300,
        ) {
            let pixels = rasterize_line_bresenham(x1, y1, x2, y2);
            prop_assert!(pixels.contains(&Pixel::new(x1, y1)));
            prop_assert!(pixels.contains(&Pixel::new(x2, y2)));
            for pair in pixels.windows(2) {
                prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
                prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
        }
    }
}
