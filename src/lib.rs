//! segdisp - Segmented display glyph generator
//!
//! A library for turning one template image, with opaque white pixels
//! marking the segments of a segmented display, into an image for every
//! on/off combination of those segments, packaged for emoji importers.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod subsets;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use detect::{find_areas, load_template, marked_pixels, Area, Areas};
pub use error::{Result, SegError};
pub use export::{ExportSink, FolderSink, PackageKind, Sink, TarSink, ZipSink};
pub use pipeline::{Detection, Generator};
pub use render::{dye, encode_png, write_png};
pub use subsets::{create_subsets, subset_count, Subsets, TaggedSubset};
pub use types::{Colour, PixelPosition};
