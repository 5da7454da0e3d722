pub mod color;
pub mod error;
pub mod gradient;
pub mod hexgrid;
pub mod render;
#[cfg(feature = "serde")]
pub mod config;
