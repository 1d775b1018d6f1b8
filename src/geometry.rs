//! Geometric value types.
//!
//! [`Point`] carries floating-point coordinates (transform input/output, float
//! line endpoints). [`Pixel`] carries integer raster coordinates. Both are plain
//! `Copy` values with no identity beyond their coordinates.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Convert to a pixel by truncating each coordinate toward zero.
    ///
    /// Non-finite coordinates saturate (NaN maps to 0).
    #[must_use]
    pub fn to_pixel(self) -> Pixel {
        Pixel::new(self.x as i32, self.y as i32)
    }

    /// Check that both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An integer raster coordinate.
///
/// Ordered lexicographically by `(x, y)` so pixel sets can be collected into
/// ordered containers and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A circle with an integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Pixel,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self {
            center: Pixel::new(cx, cy),
            radius,
        }
    }
}

/// A closed polygon described by vertices in local coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Vertices in order; the last vertex connects back to the first.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Diamond with the given half-width and half-height, centered on the origin.
    ///
    /// Vertices run top, right, bottom, left.
    #[must_use]
    pub fn diamond(half_width: f32, half_height: f32) -> Self {
        Self::new(vec![
            Point::new(0.0, half_height),
            Point::new(half_width, 0.0),
            Point::new(0.0, -half_height),
            Point::new(-half_width, 0.0),
        ])
    }

    /// Vertices with the first one repeated at the end, closing the outline.
    #[must_use]
    pub fn closed_vertices(&self) -> Vec<Point> {
        let mut closed = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            closed.push(first);
        }
        closed
    }
}
