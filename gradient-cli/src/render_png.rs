//! PNG preview rendering for hex-grid gradient files.

use anyhow::{Context, Result};
use gradient::gradient::Grid;
use gradient::render;
use std::path::Path;

/// Pixel dimensions of `grid` drawn at `scale`, or `None` if the image
/// would not fit a PNG header or an in-memory RGB buffer.
pub fn scaled_size(grid: &Grid, scale: usize) -> Option<(u32, u32)> {
    let width = grid.width().checked_mul(scale)?;
    let height = grid.height().checked_mul(scale)?;
    let bytes = width.checked_mul(height)?.checked_mul(3)?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
}

/// Write `grid` as an RGB PNG, each cell drawn as a `scale x scale` block.
pub fn write_grid_png(grid: &Grid, scale: usize, path: &Path) -> Result<()> {
    let (width, height) = scaled_size(grid, scale).with_context(|| {
        format!(
            "--scale {scale} too large for a {}x{} grid",
            grid.width(),
            grid.height()
        )
    })?;
    let img = grid_to_image(grid, scale);
    write_rgb_png(path, &img.pixels, width, height)
}

struct RgbImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

/// Upscale a grid's RGB888 pixels by nearest neighbour.
///
/// `scale` must already have passed [`scaled_size`].
fn grid_to_image(grid: &Grid, scale: usize) -> RgbImage {
    let rgb = render::to_rgb8(grid);
    let width = grid.width() * scale;
    let height = grid.height() * scale;
    let mut pixels = vec![0u8; width * height * 3];

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let src = (y * grid.width() + x) * 3;
            let color = &rgb[src..src + 3];
            for sy in 0..scale {
                let row_start = ((y * scale + sy) * width + x * scale) * 3;
                for sx in 0..scale {
                    let dst = row_start + sx * 3;
                    pixels[dst..dst + 3].copy_from_slice(color);
                }
            }
        }
    }

    RgbImage {
        pixels,
        width,
        height,
    }
}

fn write_rgb_png(path: &Path, pixels: &[u8], width: u32, height: u32) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let w = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("writing PNG header for {}", path.display()))?;
    writer
        .write_image_data(pixels)
        .with_context(|| format!("writing PNG data for {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("finishing PNG {}", path.display()))?;

    Ok(())
}
