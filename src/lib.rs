//! # Trueno-Raster
//!
//! Classic scan-conversion algorithms and a 2D affine placement pipeline,
//! drawn onto a SIMD-friendly RGBA framebuffer.
//!
//! The core is pure: [`raster`] turns line and circle descriptions into ordered
//! pixel sequences and [`transform`] maps local-space points into world space.
//! Everything else ([`framebuffer`], [`render`], [`output`], [`config`]) is a
//! consumer of that core.
//!
//! ## Features
//!
//! - **DDA and Bresenham lines**: same endpoints, same pixel count, exact integer
//!   regime classification for Bresenham
//! - **Midpoint circles**: 8-way octant symmetry, integer decision variable
//! - **Affine pipeline**: scale → rotate → reflect → shear → translate, with a
//!   batch path on [trueno](https://crates.io/crates/trueno) vectors
//! - **PNG output**: pure Rust encoding
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fb.clear(Rgba::WHITE);
//!
//! let kite = Polygon::diamond(10.0, 14.0);
//! let params = TransformParams::new().with_rotation(30.0).with_translation(32.0, 32.0);
//! draw_polygon_outline(&mut fb, &kite, &params, LineAlgorithm::Bresenham, Rgba::RED);
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `gpu`: Enable GPU compute acceleration in trueno
//! - `parallel`: Enable parallel processing in trueno
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*. Addison-Wesley.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, pixels, lines, circles, polygons).
pub mod geometry;

/// Line and circle scan conversion.
pub mod raster;

/// 2D affine transform pipeline.
pub mod transform;

// ============================================================================
// Rendering Modules
// ============================================================================

/// RGBA colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Drawing rasterized primitives onto a framebuffer.
pub mod render;

/// Output encoders (PNG).
pub mod output;

/// YAML render configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RenderConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Line, Pixel, Point, Polygon};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        rasterize_circle_midpoint, rasterize_line, rasterize_line_bresenham, rasterize_line_dda,
        rasterize_polyline, LineAlgorithm, PixelSequence,
    };
    pub use crate::render::{
        draw_circle_outline, draw_line, draw_polygon_outline, Drawable, PlacedPolygon,
        StrokedLine,
    };
    pub use crate::transform::{apply_transform, transform_points_simd, TransformParams};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

// ============================================================================
// Tests
// ============================================================================
