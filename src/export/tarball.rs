//! Tar export, optionally gzip-compressed (Mastodon emoji packs).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use image::RgbaImage;
use tar::{Builder, EntryType, Header};

use crate::error::{Result, SegError};
use crate::render::encode_png;

use super::ExportSink;

/// Output stream under the tar builder.
enum TarStream {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl TarStream {
    /// Flush everything, writing the gzip trailer if there is one.
    fn finish(self) -> io::Result<()> {
        match self {
            TarStream::Plain(mut w) => w.flush(),
            TarStream::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for TarStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TarStream::Plain(w) => w.write(buf),
            TarStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TarStream::Plain(w) => w.flush(),
            TarStream::Gzip(w) => w.flush(),
        }
    }
}

/// Streams PNG entries into `<output>/<package>.tar` or `.tar.gz`.
///
/// No manifest is written. Dropping the sink without finishing still closes
/// the archive through the builder's and encoder's own `Drop`.
pub struct TarSink {
    builder: Builder<TarStream>,
    path: PathBuf,
}

impl TarSink {
    pub fn create(output: &Path, package_name: &str, gzip: bool) -> Result<Self> {
        let extension = if gzip { "tar.gz" } else { "tar" };
        let path = output.join(format!("{}.{}", package_name, extension));
        let file = File::create(&path).map_err(|e| SegError::Io {
            path: path.clone(),
            message: format!("Failed to create archive: {}", e),
        })?;

        let file = BufWriter::new(file);
        let stream = if gzip {
            TarStream::Gzip(GzEncoder::new(file, Compression::default()))
        } else {
            TarStream::Plain(file)
        };

        Ok(Self {
            builder: Builder::new(stream),
            path,
        })
    }

    fn io_error(&self, action: &str, e: io::Error) -> SegError {
        SegError::Io {
            path: self.path.clone(),
            message: format!("Failed to {}: {}", action, e),
        }
    }
}

impl ExportSink for TarSink {
    fn add(&mut self, img: &RgbaImage, name: &str) -> Result<()> {
        let bytes = encode_png(img)?;

        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Regular);
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);

        let entry_name = format!("{}.png", name);
        self.builder
            .append_data(&mut header, &entry_name, bytes.as_slice())
            .map_err(|e| self.io_error(&format!("write {}", entry_name), e))
    }

    fn finish(self) -> Result<PathBuf> {
        let path = self.path;
        let stream = self.builder.into_inner().map_err(|e| SegError::Io {
            path: path.clone(),
            message: format!("Failed to finish archive: {}", e),
        })?;
        stream.finish().map_err(|e| SegError::Io {
            path: path.clone(),
            message: format!("Failed to flush archive: {}", e),
        })?;
        Ok(path)
    }
}
