//! Text serialization of a [`Grid`] as rows of `0x`-prefixed hex tokens.
//!
//! One line per row, top row first; each token is the packed RGB565 word
//! as four lowercase hex digits, separated by single spaces:
//!
//! ```text
//! 0xffff 0x7bef
//! 0x0000 0x0000
//! ```

use std::io::{self, Write};

use crate::color::Rgb565;
use crate::error::HexGridError;
use crate::gradient::Grid;

/// Write `grid` to `sink`, top row (`height - 1`) first.
///
/// Any write error aborts immediately; whatever was already written stays
/// in the sink.
pub fn write_grid<W: Write>(grid: &Grid, sink: &mut W) -> io::Result<()> {
    for row in grid.rows_top_down() {
        for (col, pixel) in row.iter().enumerate() {
            if col > 0 {
                sink.write_all(b" ")?;
            }
            write!(sink, "0x{:04x}", pixel.pack())?;
        }
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Render `grid` into a string in the same format as [`write_grid`].
pub fn to_hex_string(grid: &Grid) -> String {
    let mut buf = Vec::with_capacity(grid.width() * grid.height() * 7);
    write_grid(grid, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("hex grid output is ASCII")
}

/// Parse text produced by [`write_grid`] back into a grid.
///
/// Tokens may be separated by any whitespace and blank lines are skipped.
/// The `0x` prefix is optional and hex digits may be in either case.
pub fn parse_grid(text: &str) -> Result<Grid, HexGridError> {
    let mut rows: Vec<Vec<Rgb565>> = Vec::new();
    let mut width = None;

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                parse_token(token)
                    .map(Rgb565::from_word)
                    .ok_or_else(|| HexGridError::InvalidToken {
                        token: token.to_string(),
                        line: line_idx + 1,
                        column: col + 1,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(HexGridError::RaggedRow {
                line: line_idx + 1,
                found: row.len(),
                expected,
            });
        }
        rows.push(row);
    }

    let width = width.ok_or(HexGridError::Empty)?;
    let height = rows.len();
    if height > u16::MAX as usize {
        return Err(HexGridError::TooManyRows(height));
    }
    if width > u16::MAX as usize {
        return Err(HexGridError::TooManyColumns(width));
    }

    // Text lists the top row first; the grid stores the bottom row first.
    let cells = rows.into_iter().rev().flatten().collect();
    Ok(Grid::from_cells(width, height, cells))
}

fn parse_token(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
