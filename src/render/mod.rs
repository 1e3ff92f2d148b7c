//! Image synthesis for segdisp.
//!
//! Glyphs are produced by recolouring detected areas of the template, then
//! encoded as PNG.

mod dye;
mod png;

pub use dye::dye;
pub use png::{encode_png, write_png};
