//! Drawing rasterized primitives onto a framebuffer.
//!
//! The rasterizer in [`crate::raster`] produces pixel sequences; this module
//! plots them. Shapes placed with a [`crate::transform::TransformParams`] have
//! their vertices mapped before their edges are rasterized.

mod primitives;

pub use primitives::{
    draw_circle_outline, draw_line, draw_polygon_outline, Drawable, PlacedPolygon, StrokedLine,
};
