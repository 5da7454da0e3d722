use crate::color::{unpack_channel, Channel, Rgb565};
use crate::error::{ChannelRangeError, ParamsError};

/// The four packed RGB565 words anchoring a gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corners {
    pub top_left: u16,
    pub top_right: u16,
    pub bottom_left: u16,
    pub bottom_right: u16,
}

impl Corners {
    /// All four corners set to the same color.
    pub fn uniform(word: u16) -> Self {
        Self {
            top_left: word,
            top_right: word,
            bottom_left: word,
            bottom_right: word,
        }
    }
}

/// Validated inputs for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientParams {
    width: u16,
    height: u16,
    corners: Corners,
}

impl GradientParams {
    /// Both dimensions must be at least 1.
    pub fn new(width: u16, height: u16, corners: Corners) -> Result<Self, ParamsError> {
        if width == 0 {
            return Err(ParamsError::ZeroWidth);
        }
        if height == 0 {
            return Err(ParamsError::ZeroHeight);
        }
        Ok(Self {
            width,
            height,
            corners,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn corners(&self) -> &Corners {
        &self.corners
    }
}

/// A cell coordinate. Row 0 is the bottom edge of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A fixed-size grid of RGB565 pixels.
///
/// Stored row-major with row 0 at the bottom of the image and row
/// `height - 1` at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Rgb565>,
}

impl Grid {
    /// Create a grid with every cell at the default (black) color.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgb565::default(); width * height],
        }
    }

    /// Build a grid from bottom-to-top rows of cells.
    ///
    /// `cells.len()` must equal `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Rgb565>) -> Self {
        assert_eq!(cells.len(), width * height, "cell count does not match grid size");
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Rgb565 {
        self.cells[row * self.width + col]
    }

    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Rgb565 {
        &mut self.cells[row * self.width + col]
    }

    /// Row `row`, left to right.
    pub fn row(&self, row: usize) -> &[Rgb565] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Rows in image order: top row (`height - 1`) first, bottom row last.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Rgb565]> + '_ {
        (0..self.height).rev().map(move |r| self.row(r))
    }
}

/// Available interpolation methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Four-corner bilinear blend, per channel.
    #[default]
    Bilinear,
}

impl Interpolation {
    /// Generate a grid, logging channel range violations as warnings.
    pub fn generate(&self, params: &GradientParams) -> Grid {
        self.generate_with_diagnostics(params, |pos, err| {
            log::warn!("pixel (row {}, col {}): {}", pos.row, pos.col, err);
        })
    }

    /// Generate a grid, passing each channel range violation to `report`.
    ///
    /// Violations are never fatal: the offending channel keeps its previous
    /// value and generation continues with the next channel.
    pub fn generate_with_diagnostics<F>(&self, params: &GradientParams, report: F) -> Grid
    where
        F: FnMut(Position, ChannelRangeError),
    {
        let grid = match self {
            Interpolation::Bilinear => bilinear(params, report),
        };
        log::debug!(
            "generated {}x{} gradient ({:?})",
            grid.width,
            grid.height,
            self
        );
        grid
    }
}

/// Bilinear blend of the four corners over a `height x width` grid.
///
/// The vertical fraction is `row / height` and the horizontal fraction is
/// `col / height`: both axes share the height as divisor. For non-square
/// images this stretches (or clips) the horizontal ramp, and for images
/// wider than tall the weights leave `[0, 1]`. Results are truncated toward
/// zero; anything outside the channel's range, negative blends included, is
/// reported with the truncated value and leaves the channel untouched.
fn bilinear<F>(params: &GradientParams, mut report: F) -> Grid
where
    F: FnMut(Position, ChannelRangeError),
{
    let width = params.width as usize;
    let height = params.height as usize;
    let corners = params.corners;
    let mut grid = Grid::new(width, height);

    // Per-channel corner values, hoisted out of the pixel loop.
    let corner_values = Channel::ALL.map(|c| {
        [
            unpack_channel(corners.bottom_left, c),
            unpack_channel(corners.bottom_right, c),
            unpack_channel(corners.top_left, c),
            unpack_channel(corners.top_right, c),
        ]
        .map(f32::from)
    });

    for row in 0..height {
        let bottom_to_top = row as f32 / height as f32;
        let top_to_bottom = 1.0 - bottom_to_top;
        for col in 0..width {
            let left_to_right = col as f32 / height as f32;
            let right_to_left = 1.0 - left_to_right;

            let pixel = grid.get_mut(row, col);
            for (channel, [bl, br, tl, tr]) in Channel::ALL.into_iter().zip(corner_values) {
                let blended = top_to_bottom * right_to_left * bl
                    + top_to_bottom * left_to_right * br
                    + bottom_to_top * right_to_left * tl
                    + bottom_to_top * left_to_right * tr;

                let truncated = blended as i32;
                let stored = match u8::try_from(truncated) {
                    Ok(value) => pixel.set_channel(value, channel),
                    Err(_) => Err(ChannelRangeError {
                        channel,
                        value: truncated,
                    }),
                };
                if let Err(err) = stored {
                    report(Position { row, col }, err);
                }
            }
        }
    }

    grid
}
