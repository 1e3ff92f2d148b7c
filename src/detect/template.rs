//! Template loading and marked-pixel extraction.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SegError};
use crate::types::{Colour, PixelPosition};

/// Load a template image from disk as RGBA8.
pub fn load_template(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SegError::Io {
            path: path.to_path_buf(),
            message: "Template file not found".to_string(),
        });
    }

    let img = image::open(path)
        .map_err(|e| SegError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to load template: {}", e),
        })?
        .to_rgba8();

    Ok(img)
}

/// Returns true if a template pixel marks part of a segment.
///
/// Only opaque pure white counts; anything else is background.
pub fn is_marked(colour: Colour) -> bool {
    colour == Colour::WHITE
}

/// Iterate over the positions of every marked pixel, column by column.
pub fn marked_pixels(img: &RgbaImage) -> impl Iterator<Item = PixelPosition> + '_ {
    (0..img.width()).flat_map(move |x| {
        (0..img.height()).filter_map(move |y| {
            is_marked(Colour::from(*img.get_pixel(x, y)))
                .then(|| PixelPosition::new(x as i32, y as i32))
        })
    })
}
