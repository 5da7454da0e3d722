use thiserror::Error;

use crate::color::Channel;

/// A computed channel value that does not fit the channel's bit width.
///
/// Non-fatal: the channel keeps its previous value and generation continues.
/// `value` is the value actually computed, which may be negative or wider
/// than a byte when it comes from an interpolated blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid value for {channel} channel (must be 0-{max}), got {value}", max = .channel.max())]
pub struct ChannelRangeError {
    pub channel: Channel,
    pub value: i32,
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("image width must be at least 1")]
    ZeroWidth,

    #[error("image height must be at least 1")]
    ZeroHeight,
}

#[derive(Debug, Error)]
pub enum HexGridError {
    #[error("hex grid is empty")]
    Empty,

    #[error("invalid token '{token}' at line {line}, column {column}")]
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
    },

    #[error("line {line} has {found} tokens, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("hex grid has {0} rows, more than a 16-bit height allows")]
    TooManyRows(usize),

    #[error("hex grid has {0} columns, more than a 16-bit width allows")]
    TooManyColumns(usize),
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Params(#[from] ParamsError),
}
