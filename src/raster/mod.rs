//! Line and circle rasterization.
//!
//! Converts continuous line and circle descriptions into ordered sequences of
//! integer [`Pixel`]s. Every function here is pure: no drawing surface, no
//! clipping, no allocation beyond the returned vector.
//!
//! # Algorithms
//!
//! - **DDA**: floating-point per-step increments
//! - **Bresenham's Line**: integer decision variable, four slope regimes
//! - **Midpoint Circle**: integer decision variable with 8-way octant symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter." *The Computer Journal*, 10(3), 282-289.

mod circle;
mod line;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::{Pixel, Point};

pub use circle::rasterize_circle_midpoint;
pub use line::{rasterize_line_bresenham, rasterize_line_dda, SlopeRegime};

/// Ordered pixel output of a rasterization call.
pub type PixelSequence = Vec<Pixel>;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAlgorithm {
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's integer algorithm.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// Configuration name of this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            other => Err(Error::ConfigInvalid {
                key: "line_algorithm".to_string(),
                message: format!("unknown algorithm '{other}' (expected 'dda' or 'bresenham')"),
            }),
        }
    }
}

/// Rasterize a line with the chosen algorithm.
#[must_use]
pub fn rasterize_line(algorithm: LineAlgorithm, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
    match algorithm {
        LineAlgorithm::Dda => rasterize_line_dda(x1, y1, x2, y2),
        LineAlgorithm::Bresenham => rasterize_line_bresenham(x1, y1, x2, y2),
    }
}

/// Rasterize an open polyline through `points`.
///
/// Vertices are truncated toward zero to pixel coordinates and every
/// consecutive pair is rasterized with `algorithm`. Segment sequences are
/// concatenated as-is, so a shared vertex appears once per adjacent segment.
/// A single vertex yields that pixel; no vertices yield an empty sequence.
#[must_use]
pub fn rasterize_polyline(algorithm: LineAlgorithm, points: &[Point]) -> PixelSequence {
    match points {
        [] => Vec::new(),
        [only] => vec![only.to_pixel()],
        _ => points
            .windows(2)
            .flat_map(|pair| {
                let a = pair[0].to_pixel();
                let b = pair[1].to_pixel();
                rasterize_line(algorithm, a.x, a.y, b.x, b.y)
            })
            .collect(),
    }
}
