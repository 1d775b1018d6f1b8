//! Primitive rendering functions.
//!
//! Thin glue between the pure rasterizer/transform core and a [`Framebuffer`]:
//! rasterize, then plot. All clipping happens in the framebuffer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, Line, Pixel, Polygon};
use crate::raster::{rasterize_circle_midpoint, rasterize_line, rasterize_polyline, LineAlgorithm};
use crate::transform::TransformParams;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Lines
// ============================================================================

/// Draw a line between integer endpoints with the chosen algorithm.
///
/// Returns the number of pixels that landed on the framebuffer.
pub fn draw_line(
    fb: &mut Framebuffer,
    algorithm: LineAlgorithm,
    start: Pixel,
    end: Pixel,
    color: Rgba,
) -> usize {
    let pixels = rasterize_line(algorithm, start.x, start.y, end.x, end.y);
    tracing::trace!(%algorithm, ?start, ?end, pixels = pixels.len(), "draw line");
    fb.plot_pixels(&pixels, color)
}

/// A line segment paired with the algorithm that rasterizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedLine {
    /// Float endpoints, truncated toward zero when drawn.
    pub line: Line,
    /// Rasterization algorithm.
    pub algorithm: LineAlgorithm,
}

impl StrokedLine {
    /// Create a stroked line.
    #[must_use]
    pub const fn new(line: Line, algorithm: LineAlgorithm) -> Self {
        Self { line, algorithm }
    }
}

impl Drawable for StrokedLine {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line(
            fb,
            self.algorithm,
            self.line.start.to_pixel(),
            self.line.end.to_pixel(),
            color,
        );
    }
}

// ============================================================================
// Circles
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
///
/// A radius of zero draws nothing.
pub fn draw_circle_outline(fb: &mut Framebuffer, circle: Circle, color: Rgba) -> usize {
    let pixels = rasterize_circle_midpoint(circle.center.x, circle.center.y, circle.radius);
    tracing::trace!(?circle, pixels = pixels.len(), "draw circle");
    fb.plot_pixels(&pixels, color)
}

impl Drawable for Circle {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_circle_outline(fb, *self, color);
    }
}

// ============================================================================
// Polygons
// ============================================================================

/// Draw the closed outline of a polygon after mapping its vertices through
/// `params`.
pub fn draw_polygon_outline(
    fb: &mut Framebuffer,
    polygon: &Polygon,
    params: &TransformParams,
    algorithm: LineAlgorithm,
    color: Rgba,
) -> usize {
    let closed = polygon.closed_vertices();
    let world = if params.is_identity() { closed } else { params.apply_all(&closed) };
    let pixels = rasterize_polyline(algorithm, &world);
    tracing::trace!(
        vertices = polygon.vertices.len(),
        pixels = pixels.len(),
        "draw polygon"
    );
    fb.plot_pixels(&pixels, color)
}

/// A local-space polygon placed into the world by a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPolygon {
    /// Local-space outline.
    pub polygon: Polygon,
    /// Local-to-world transform.
    pub params: TransformParams,
    /// Algorithm for the outline edges.
    pub algorithm: LineAlgorithm,
}

impl Drawable for PlacedPolygon {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_polygon_outline(fb, &self.polygon, &self.params, self.algorithm, color);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn canvas() -> Framebuffer {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_both_algorithms() {
        for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            let mut fb = canvas();
            let landed = draw_line(
                &mut fb,
                algorithm,
                Pixel::new(10, 10),
                Pixel::new(90, 90),
                Rgba::BLACK,
            );
            assert_eq!(landed, 81);
            assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
            assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
            assert_eq!(fb.get_pixel(90, 90), Some(Rgba::BLACK));
        }
    }

    #[test]
    fn test_drawable_stroked_line() {
        let mut fb = canvas();
        StrokedLine::new(Line::from_coords(50.9, 10.0, 50.2, 90.0), LineAlgorithm::Bresenham)
            .draw(&mut fb, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 90), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 81);
    }

    #[test]
    fn test_drawable_circle() {
        let mut fb = canvas();
        Circle::new(50, 50, 20).draw(&mut fb, Rgba::GREEN);
        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_zero_radius_circle_draws_nothing() {
        let mut fb = canvas();
        assert_eq!(draw_circle_outline(&mut fb, Circle::new(50, 50, 0), Rgba::RED), 0);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_identity_polygon_outline() {
        let mut fb = canvas();
        let square = Polygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(10.0, 20.0),
        ]);
        draw_polygon_outline(
            &mut fb,
            &square,
            &TransformParams::IDENTITY,
            LineAlgorithm::Bresenham,
            Rgba::RED,
        );
        assert_eq!(fb.get_pixel(15, 10), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(20, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(15, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(10, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::WHITE));
        assert_eq!(fb.count_color(Rgba::RED), 40);
    }

    #[test]
    fn test_placed_polygon_is_translated() {
        let mut fb = canvas();
        let kite = PlacedPolygon {
            polygon: Polygon::diamond(10.0, 10.0),
            params: TransformParams::new().with_translation(50.0, 50.0),
            algorithm: LineAlgorithm::Dda,
        };
        kite.draw(&mut fb, Rgba::BLUE);
        assert_eq!(fb.get_pixel(50, 60), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(60, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 40), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(40, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }
}
