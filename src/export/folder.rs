//! Plain folder export: one PNG file per glyph.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Result, SegError};
use crate::render::write_png;

use super::ExportSink;

/// Writes `<output>/<package>/<name>.png` for each added image.
#[derive(Debug)]
pub struct FolderSink {
    folder: PathBuf,
}

impl FolderSink {
    /// Create the package folder (and any missing parents).
    pub fn create(output: &Path, package_name: &str) -> Result<Self> {
        let folder = output.join(package_name);
        fs::create_dir_all(&folder).map_err(|e| SegError::Io {
            path: folder.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
        Ok(Self { folder })
    }
}

impl ExportSink for FolderSink {
    fn add(&mut self, img: &RgbaImage, name: &str) -> Result<()> {
        write_png(img, &self.folder.join(format!("{}.png", name)))
    }

    fn finish(self) -> Result<PathBuf> {
        Ok(self.folder)
    }
}
