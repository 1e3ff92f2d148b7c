//! Generation pipeline.
//!
//! template → marked pixels → areas → unlit base → one lit image per subset
//! → export sink. Everything runs on one thread, one image at a time, in
//! subset order.

use image::RgbaImage;

use crate::detect::{find_areas, marked_pixels, Area};
use crate::error::{Result, SegError};
use crate::export::ExportSink;
use crate::render::dye;
use crate::subsets::{create_subsets, subset_count};
use crate::types::Colour;

/// Entry name used when there are no areas and the only tag is empty.
pub const BLANK_NAME: &str = "blank";

/// Default cap on detected areas; 2^16 images is already a lot of emoji.
pub const DEFAULT_MAX_AREAS: usize = 16;

/// Lit and unlit colours for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub lit: Colour,
    pub unlit: Colour,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Colour::RED, Colour::DIM_GRAY)
    }
}

impl Generator {
    pub fn new(lit: Colour, unlit: Colour) -> Self {
        Self { lit, unlit }
    }

    /// Detect the template's areas and paint all of them unlit.
    pub fn detect(&self, template: &RgbaImage) -> Detection {
        let areas: Vec<Area> = find_areas(marked_pixels(template)).collect();
        let base = dye(template, &areas, self.unlit);
        Detection {
            areas,
            base,
            lit: self.lit,
        }
    }
}

/// Areas found in a template plus the unlit base shared by every output.
#[derive(Debug, Clone)]
pub struct Detection {
    areas: Vec<Area>,
    base: RgbaImage,
    lit: Colour,
}

impl Detection {
    /// Areas in discovery order; tag digit `i` refers to `areas()[i]`.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// The template with every area in the unlit colour.
    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    /// Number of images [`Detection::export`] will produce.
    pub fn image_count(&self) -> Option<u128> {
        subset_count(self.areas.len())
    }

    /// Fail if there are more areas than `limit`. A limit of 0 disables the check.
    pub fn check_limit(&self, limit: usize) -> Result<()> {
        if limit != 0 && self.areas.len() > limit {
            return Err(SegError::TooManyAreas {
                found: self.areas.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Lazily render every combination as (entry name, image).
    pub fn render(&self) -> impl Iterator<Item = (String, RgbaImage)> + '_ {
        create_subsets(&self.areas).map(move |s| {
            let image = dye(&self.base, s.subset.iter().copied(), self.lit);
            (entry_name(&s.tag).to_string(), image)
        })
    }

    /// Render every combination into `sink`, calling `on_image` before each
    /// add with the 1-based image number and entry name.
    ///
    /// Stops at the first failing add. Returns the number of images written;
    /// the caller still owns the sink and must finish it.
    pub fn export<S, F>(&self, sink: &mut S, mut on_image: F) -> Result<usize>
    where
        S: ExportSink,
        F: FnMut(usize, &str),
    {
        let mut written = 0;
        for (name, image) in self.render() {
            on_image(written + 1, &name);
            sink.add(&image, &name)?;
            written += 1;
        }
        Ok(written)
    }
}

/// File-safe name for a subset tag.
pub fn entry_name(tag: &str) -> &str {
    if tag.is_empty() {
        BLANK_NAME
    } else {
        tag
    }
}
