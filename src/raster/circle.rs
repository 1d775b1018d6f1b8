//! Midpoint circle rasterization.

use crate::geometry::Pixel;

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Walks one octant from `(0, r)` while `x < y` and emits the eight symmetric
/// points of every step, in the order `(x,y) (y,x) (-x,y) (-y,x) (-x,-y)
/// (-y,-x) (x,-y) (y,-x)` around the center. Points on the axes are emitted
/// more than once; the sequence is not deduplicated.
///
/// A radius of zero (or less) yields an empty sequence. Callers that want a
/// visible dot at radius zero plot the center themselves.
///
/// # Example
///
/// ```
/// use trueno_raster::raster::rasterize_circle_midpoint;
///
/// assert!(rasterize_circle_midpoint(0, 0, 0).is_empty());
/// assert_eq!(rasterize_circle_midpoint(10, 10, 5).len(), 24);
/// ```
#[must_use]
pub fn rasterize_circle_midpoint(cx: i32, cy: i32, r: i32) -> Vec<Pixel> {
    let mut pixels = Vec::new();

    let mut x: i64 = 0;
    let mut y = i64::from(r);
    let mut p = 1 - i64::from(r);

    while x < y {
        push_octants(&mut pixels, i64::from(cx), i64::from(cy), x, y);

        x += 1;
        if p < 0 {
            p += 2 * x + 3;
        } else {
            y -= 1;
            p += 2 * x - 2 * y + 5;
        }
    }

    pixels
}

#[inline]
fn push_octants(pixels: &mut Vec<Pixel>, cx: i64, cy: i64, x: i64, y: i64) {
    let offsets = [
        (x, y),
        (y, x),
        (-x, y),
        (-y, x),
        (-x, -y),
        (-y, -x),
        (x, -y),
        (y, -x),
    ];
    pixels.extend(
        offsets
            .iter()
            .map(|&(dx, dy)| Pixel::new((cx + dx) as i32, (cy + dy) as i32)),
    );
}
