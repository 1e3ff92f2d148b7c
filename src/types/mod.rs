//! Core value types for segdisp.
//!
//! - `PixelPosition` - integer pixel coordinates and offsets
//! - `Colour` - RGBA colour values

mod colour;
mod position;

pub use colour::Colour;
pub use position::PixelPosition;
