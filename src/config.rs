//! Render configuration for the preview binary.
//!
//! YAML with a default for every field, so a partial file (or no file at all)
//! still yields a complete configuration.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Polygon};
use crate::raster::LineAlgorithm;
use crate::transform::TransformParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted canvas side in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Largest accepted number of wire segments.
pub const MAX_WIRE_SEGMENTS: u32 = 4_096;

/// Kite and wire geometry must stay within this many canvas lengths of the
/// origin, which bounds the length of every rasterized segment.
pub const EXTENT_FACTOR: f32 = 4.0;

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color.
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_background() -> Rgba {
    Rgba::NIGHT_SKY
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Diamond kite placed by the affine pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KiteConfig {
    /// Draw the kite.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Half of the diamond's width in local units.
    #[serde(default = "default_kite_half_width")]
    pub half_width: f32,

    /// Half of the diamond's height in local units.
    #[serde(default = "default_kite_half_height")]
    pub half_height: f32,

    /// Outline color.
    #[serde(default = "default_kite_color")]
    pub color: Rgba,

    /// Local-to-world transform.
    #[serde(default = "default_kite_transform")]
    pub transform: TransformParams,
}

fn default_true() -> bool {
    true
}
fn default_kite_half_width() -> f32 {
    22.0
}
fn default_kite_half_height() -> f32 {
    28.0
}
fn default_kite_color() -> Rgba {
    Rgba::rgb(255, 64, 64)
}
fn default_kite_transform() -> TransformParams {
    TransformParams::new().with_translation(400.0, 200.0)
}

impl Default for KiteConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            half_width: default_kite_half_width(),
            half_height: default_kite_half_height(),
            color: default_kite_color(),
            transform: default_kite_transform(),
        }
    }
}

/// Sagging wire with bulbs, drawn as a polyline plus midpoint circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfig {
    /// Draw the wire.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Left end x.
    #[serde(default = "default_wire_start_x")]
    pub start_x: f32,

    /// Right end x.
    #[serde(default = "default_wire_end_x")]
    pub end_x: f32,

    /// Height of both ends.
    #[serde(default = "default_wire_y")]
    pub y: f32,

    /// Maximum sag at the middle.
    #[serde(default = "default_wire_sag")]
    pub sag: f32,

    /// Number of straight segments approximating the curve.
    #[serde(default = "default_wire_segments")]
    pub segments: u32,

    /// Bulb radius in pixels (0 draws no bulbs).
    #[serde(default = "default_bulb_radius")]
    pub bulb_radius: i32,

    /// Wire color (alpha-blended).
    #[serde(default = "default_wire_color")]
    pub color: Rgba,
}

fn default_wire_start_x() -> f32 {
    80.0
}
fn default_wire_end_x() -> f32 {
    720.0
}
fn default_wire_y() -> f32 {
    420.0
}
fn default_wire_sag() -> f32 {
    6.0
}
fn default_wire_segments() -> u32 {
    6
}
fn default_bulb_radius() -> i32 {
    3
}
fn default_wire_color() -> Rgba {
    Rgba::rgb(204, 204, 204).with_alpha(153)
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            start_x: default_wire_start_x(),
            end_x: default_wire_end_x(),
            y: default_wire_y(),
            sag: default_wire_sag(),
            segments: default_wire_segments(),
            bulb_radius: default_bulb_radius(),
            color: default_wire_color(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Algorithm for every straight edge.
    #[serde(default)]
    pub line_algorithm: LineAlgorithm,

    /// Output PNG path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Kite settings.
    #[serde(default)]
    pub kite: KiteConfig,

    /// Wire settings.
    #[serde(default)]
    pub wire: WireConfig,
}

fn default_version() -> u32 {
    1
}
fn default_output() -> PathBuf {
    PathBuf::from("trueno-raster.png")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            line_algorithm: LineAlgorithm::default(),
            output: default_output(),
            kite: KiteConfig::default(),
            wire: WireConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "using default render config");
                Self::default()
            }
        }
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| {
            Err(Error::ConfigInvalid {
                key: key.to_string(),
                message: message.to_string(),
            })
        };

        if self.canvas.width == 0 {
            return invalid("canvas.width", "must be greater than zero");
        }
        if self.canvas.height == 0 {
            return invalid("canvas.height", "must be greater than zero");
        }
        if self.canvas.width > MAX_CANVAS_DIMENSION {
            return invalid("canvas.width", "exceeds the maximum canvas size");
        }
        if self.canvas.height > MAX_CANVAS_DIMENSION {
            return invalid("canvas.height", "exceeds the maximum canvas size");
        }
        if self.wire.segments == 0 {
            return invalid("wire.segments", "must be at least 1");
        }
        if self.wire.segments > MAX_WIRE_SEGMENTS {
            return invalid("wire.segments", "too many segments");
        }
        if self.wire.bulb_radius < 0 {
            return invalid("wire.bulb_radius", "must not be negative");
        }

        let t = &self.kite.transform;
        let finite = [
            t.scale_x,
            t.scale_y,
            t.rotation_degrees,
            t.shear_x,
            t.shear_y,
            t.translate_x,
            t.translate_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return invalid("kite.transform", "all values must be finite");
        }

        let limit = EXTENT_FACTOR * self.canvas.width.max(self.canvas.height) as f32;
        let within = |p: &Point| p.is_finite() && p.x.abs() <= limit && p.y.abs() <= limit;

        let diamond = Polygon::diamond(self.kite.half_width, self.kite.half_height);
        if !t.apply_all(&diamond.vertices).iter().all(within) {
            return invalid("kite", "placed outline reaches too far beyond the canvas");
        }

        let w = &self.wire;
        let wire_corners = [
            Point::new(w.start_x, w.y),
            Point::new(w.end_x, w.y),
            Point::new(w.start_x, w.y + w.sag),
            Point::new(w.end_x, w.y + w.sag),
        ];
        if !wire_corners.iter().all(within) {
            return invalid("wire", "reaches too far beyond the canvas");
        }
        if w.bulb_radius as f32 > limit {
            return invalid("wire.bulb_radius", "larger than the canvas allows");
        }

        Ok(())
    }
}
