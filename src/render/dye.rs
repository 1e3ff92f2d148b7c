//! Area recolouring.

use image::{Rgba, RgbaImage};

use crate::detect::Area;
use crate::types::Colour;

/// Copy `base` and paint every pixel of `areas` with `colour`.
///
/// The base image is left untouched so it can be reused for every subset.
/// Positions outside the image are ignored. When areas overlap, the later
/// write wins, which is harmless since every write uses the same colour.
pub fn dye<'a, I>(base: &RgbaImage, areas: I, colour: Colour) -> RgbaImage
where
    I: IntoIterator<Item = &'a Area>,
{
    let mut output = base.clone();
    let pixel = Rgba::from(colour);

    for position in areas.into_iter().flat_map(Area::iter) {
        if let Some((x, y)) = position.to_index() {
            if x < output.width() && y < output.height() {
                output.put_pixel(x, y, pixel);
            }
        }
    }

    output
}
