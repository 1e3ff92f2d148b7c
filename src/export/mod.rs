//! Packaging back-ends.
//!
//! Generated glyphs are streamed into an [`ExportSink`] one at a time, in
//! enumeration order. A sink owns its output file or stream for its whole
//! life; [`ExportSink::finish`] consumes it, so the closing work (manifest,
//! archive trailer, flush) happens exactly once. A sink dropped early still
//! releases its handles.

mod folder;
pub mod meta;
mod misskey;
mod tarball;

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use folder::FolderSink;
pub use misskey::{ZipSink, META_FILENAME};
pub use tarball::TarSink;

/// Destination for generated images.
pub trait ExportSink {
    /// Store one image under `name` (without extension).
    fn add(&mut self, img: &RgbaImage, name: &str) -> Result<()>;

    /// Complete the package and return its path.
    fn finish(self) -> Result<PathBuf>
    where
        Self: Sized;
}

/// Package layout, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// A folder of PNG files
    #[default]
    Folder,
    /// A zip archive with a Misskey `meta.json` manifest
    #[value(alias = "zip")]
    #[serde(alias = "zip")]
    Misskey,
    /// A gzip-compressed tar archive of PNG files
    #[value(aliases = ["tar.gz", "tgz"])]
    #[serde(alias = "tar.gz", alias = "tgz")]
    Mastodon,
    /// An uncompressed tar archive of PNG files
    Tar,
}

impl PackageKind {
    /// Where a package named `package_name` lands inside `output`.
    pub fn package_path(self, output: &Path, package_name: &str) -> PathBuf {
        match self {
            PackageKind::Folder => output.join(package_name),
            PackageKind::Misskey => output.join(format!("{}.zip", package_name)),
            PackageKind::Mastodon => output.join(format!("{}.tar.gz", package_name)),
            PackageKind::Tar => output.join(format!("{}.tar", package_name)),
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageKind::Folder => "folder",
            PackageKind::Misskey => "misskey",
            PackageKind::Mastodon => "mastodon",
            PackageKind::Tar => "tar",
        };
        f.write_str(name)
    }
}

/// Any of the concrete sinks, chosen at run time from a [`PackageKind`].
pub enum Sink {
    Folder(FolderSink),
    Zip(ZipSink),
    Tar(TarSink),
}

impl Sink {
    /// Open the sink for `kind`. `output` must already exist.
    pub fn create(kind: PackageKind, output: &Path, package_name: &str) -> Result<Self> {
        Ok(match kind {
            PackageKind::Folder => Sink::Folder(FolderSink::create(output, package_name)?),
            PackageKind::Misskey => Sink::Zip(ZipSink::create(output, package_name)?),
            PackageKind::Mastodon => Sink::Tar(TarSink::create(output, package_name, true)?),
            PackageKind::Tar => Sink::Tar(TarSink::create(output, package_name, false)?),
        })
    }
}

impl ExportSink for Sink {
    fn add(&mut self, img: &RgbaImage, name: &str) -> Result<()> {
        match self {
            Sink::Folder(sink) => sink.add(img, name),
            Sink::Zip(sink) => sink.add(img, name),
            Sink::Tar(sink) => sink.add(img, name),
        }
    }

    fn finish(self) -> Result<PathBuf> {
        match self {
            Sink::Folder(sink) => sink.finish(),
            Sink::Zip(sink) => sink.finish(),
            Sink::Tar(sink) => sink.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sink_paths_match_package_path() {
        let dir = tempdir().unwrap();
        for kind in PackageKind::value_variants() {
            let sink = Sink::create(*kind, dir.path(), "glyphs").unwrap();
            let path = sink.finish().unwrap();
            assert_eq!(path, kind.package_path(dir.path(), "glyphs"), "{}", kind);
            assert!(path.exists());
        }
    }

    #[test]
    fn test_package_kind_aliases() {
        assert_eq!(PackageKind::from_str("zip", true).unwrap(), PackageKind::Misskey);
        assert_eq!(PackageKind::from_str("tar.gz", true).unwrap(), PackageKind::Mastodon);
        assert_eq!(PackageKind::from_str("folder", true).unwrap(), PackageKind::Folder);

        let kind: PackageKind = serde_yaml::from_str("tgz").unwrap();
        assert_eq!(kind, PackageKind::Mastodon);
    }

    #[test]
    fn test_package_kind_display_round_trips() {
        for kind in PackageKind::value_variants() {
            assert_eq!(PackageKind::from_str(&kind.to_string(), false).unwrap(), *kind);
        }
    }
}
