//! Misskey emoji pack export: a zip of PNGs plus `meta.json`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, SegError};
use crate::render::encode_png;

use super::meta::EmojiMeta;
use super::ExportSink;

/// Name of the manifest entry, always written last.
pub const META_FILENAME: &str = "meta.json";

/// Streams PNG entries into `<output>/<package>.zip`.
///
/// Every added image also gets a manifest record; the manifest is written by
/// [`ExportSink::finish`]. If the sink is dropped without finishing, the
/// archive is closed without a manifest.
pub struct ZipSink {
    writer: ZipWriter<BufWriter<File>>,
    path: PathBuf,
    package_name: String,
    meta: EmojiMeta,
}

impl ZipSink {
    pub fn create(output: &Path, package_name: &str) -> Result<Self> {
        let path = output.join(format!("{}.zip", package_name));
        let file = File::create(&path).map_err(|e| SegError::Io {
            path: path.clone(),
            message: format!("Failed to create archive: {}", e),
        })?;

        Ok(Self {
            writer: ZipWriter::new(BufWriter::new(file)),
            path,
            package_name: package_name.to_string(),
            meta: EmojiMeta::new(),
        })
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644)
    }

    fn write_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.writer
            .start_file(name, Self::options())
            .map_err(|e| archive_error(&self.path, e))?;
        self.writer.write_all(bytes).map_err(|e| SegError::Io {
            path: self.path.clone(),
            message: format!("Failed to write {}: {}", name, e),
        })
    }
}

impl ExportSink for ZipSink {
    fn add(&mut self, img: &RgbaImage, name: &str) -> Result<()> {
        let bytes = encode_png(img)?;
        self.write_entry(&format!("{}.png", name), &bytes)?;
        self.meta.push_png(name, &self.package_name);
        Ok(())
    }

    fn finish(mut self) -> Result<PathBuf> {
        let json = serde_json::to_vec_pretty(&self.meta).map_err(|e| SegError::Archive {
            message: format!("Failed to serialize {}: {}", META_FILENAME, e),
        })?;
        self.write_entry(META_FILENAME, &json)?;

        let mut out = self
            .writer
            .finish()
            .map_err(|e| archive_error(&self.path, e))?;
        out.flush().map_err(|e| SegError::Io {
            path: self.path.clone(),
            message: format!("Failed to flush archive: {}", e),
        })?;

        Ok(self.path)
    }
}

fn archive_error(path: &Path, e: zip::result::ZipError) -> SegError {
    SegError::Archive {
        message: format!("{}: {}", path.display(), e),
    }
}
