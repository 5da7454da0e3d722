use crate::color::{Channel, Rgb565};
use crate::gradient::Grid;

/// Expand one channel to 8 bits, truncating: `value / max * 255`.
#[inline]
pub fn expand_channel(value: u8, channel: Channel) -> u8 {
    (u32::from(value) * 255 / u32::from(channel.max())) as u8
}

/// Expand a pixel to `[r, g, b]` with 8 bits per channel.
pub fn to_rgb888(pixel: Rgb565) -> [u8; 3] {
    Channel::ALL.map(|c| expand_channel(pixel.channel(c), c))
}

/// Convert a grid to packed RGB888 bytes (3 per pixel), top row first.
///
/// The byte order matches the hex-grid text layout, so the result can be
/// handed straight to an image encoder.
pub fn to_rgb8(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.width() * grid.height() * 3);
    for row in grid.rows_top_down() {
        out.extend(row.iter().flat_map(|&p| to_rgb888(p)));
    }
    out
}
