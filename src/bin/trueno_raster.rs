//! trueno-raster - render a kite and a festival wire to PNG.
//!
//! Usage: `trueno-raster [CONFIG_PATH]`
//!
//! Without an argument the config is read from
//! `<config_dir>/trueno-raster/config.yaml`, falling back to defaults.

use std::f32::consts::PI;

use tracing_subscriber::EnvFilter;
use trueno_raster::prelude::{
    draw_line, draw_polygon_outline, rasterize_circle_midpoint, rasterize_polyline,
    transform_points_simd, Framebuffer, LineAlgorithm, Pixel, PngEncoder, Point, Polygon,
    RenderConfig, Rgba, TransformParams,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An explicit path must exist; the default location may not
    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::load_or_default(
            dirs::config_dir().map(|p| p.join("trueno-raster/config.yaml")).unwrap_or_default(),
        ),
    };

    let fb = render(&config)?;
    PngEncoder::write_to_file(&fb, &config.output)?;
    tracing::info!(
        output = %config.output.display(),
        width = fb.width(),
        height = fb.height(),
        backend = ?Framebuffer::backend(),
        "render complete"
    );

    Ok(())
}

fn render(config: &RenderConfig) -> trueno_raster::Result<Framebuffer> {
    let mut fb = Framebuffer::new(config.canvas.width, config.canvas.height)?;
    fb.clear(config.canvas.background);

    if config.wire.enabled {
        draw_wire(&mut fb, config);
    }
    if config.kite.enabled {
        draw_kite(&mut fb, config)?;
    }

    Ok(fb)
}

/// Sagging wire as a DDA polyline with a bulb at every segment midpoint.
fn draw_wire(fb: &mut Framebuffer, config: &RenderConfig) {
    let wire = &config.wire;
    let segments = wire.segments.max(1);

    let vertices: Vec<Point> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let x = wire.start_x + (wire.end_x - wire.start_x) * t;
            Point::new(x, wire.y + wire.sag * (PI * t).sin())
        })
        .collect();

    let pixels = rasterize_polyline(LineAlgorithm::Dda, &vertices);
    let landed = fb.blend_pixels(&pixels, wire.color);
    tracing::debug!(segments, pixels = pixels.len(), landed, "wire");

    for pair in vertices.windows(2) {
        let mid = pair[0].lerp(pair[1], 0.5).to_pixel();
        let bulb = rasterize_circle_midpoint(mid.x, mid.y + wire.bulb_radius, wire.bulb_radius);
        fb.plot_pixels(&bulb, Rgba::YELLOW);
    }
}

/// Diamond kite placed by the configured transform, with a Bresenham string
/// from its lowest vertex to the bottom of the canvas.
fn draw_kite(fb: &mut Framebuffer, config: &RenderConfig) -> trueno_raster::Result<()> {
    let kite = &config.kite;
    let diamond = Polygon::diamond(kite.half_width, kite.half_height);

    let world = transform_points_simd(&diamond.vertices, &kite.transform)?;
    let outline = Polygon::new(world.clone());
    let landed = draw_polygon_outline(
        fb,
        &outline,
        &TransformParams::IDENTITY,
        config.line_algorithm,
        kite.color,
    );
    tracing::debug!(algorithm = %config.line_algorithm, landed, "kite");

    let lowest = world
        .iter()
        .copied()
        .fold(None, |acc: Option<Point>, p| match acc {
            Some(q) if q.y >= p.y => Some(q),
            _ => Some(p),
        });
    if let Some(tail) = lowest {
        let anchor = Pixel::new(config.canvas.width as i32 / 4, config.canvas.height as i32 - 1);
        draw_line(fb, LineAlgorithm::Bresenham, tail.to_pixel(), anchor, Rgba::WHITE);
    }

    Ok(())
}
