//! Generate command implementation.
//!
//! Loads a template, detects its segments and writes one PNG per on/off
//! combination into the selected package.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::detect::load_template;
use crate::error::{Result, SegError};
use crate::export::{ExportSink, PackageKind, Sink};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::Generator;

/// Generate every display state from a template image
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Template image; fully opaque white pixels mark segments (semi-transparent white is ignored)
    #[arg(long, short)]
    pub template: Option<PathBuf>,

    /// Directory to write the package into [default: dist]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Package name [default: template file name]
    #[arg(long, short)]
    pub name: Option<String>,

    /// Package layout [default: folder]
    #[arg(long, short, value_enum)]
    pub package: Option<PackageKind>,

    /// Colour of lit segments, as hex or a CSS name [default: red]
    #[arg(long = "lit-segment-color", short, visible_alias = "lit")]
    pub lit: Option<String>,

    /// Colour of unlit segments, as hex or a CSS name [default: dimgray]
    #[arg(long = "unlit-segment-color", short, visible_alias = "unlit")]
    pub unlit: Option<String>,

    /// Refuse templates with more segments than this (0 = no limit) [default: 16]
    #[arg(long)]
    pub max_areas: Option<usize>,

    /// Configuration file [default: ./segdisp.yaml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Layer the command-line flags over a loaded configuration.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(template) = self.template {
            config.template = Some(template);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.name.is_some() {
            config.name = self.name;
        }
        if let Some(package) = self.package {
            config.package = package;
        }
        if self.lit.is_some() {
            config.lit = self.lit;
        }
        if self.unlit.is_some() {
            config.unlit = self.unlit;
        }
        if let Some(max_areas) = self.max_areas {
            config.max_areas = max_areas;
        }
        config
    }
}

/// Run the command. Returns the path of the finished package.
pub fn run(args: GenerateArgs, printer: &Printer) -> Result<PathBuf> {
    let config = Config::discover(args.config.as_deref(), Path::new("."))?;
    let config = args.apply(config);
    generate(&config, printer)
}

/// Generate a package from a resolved configuration.
pub fn generate(config: &Config, printer: &Printer) -> Result<PathBuf> {
    // Validate all input before anything is written.
    let template_path = config.template.as_ref().ok_or_else(|| SegError::Config {
        message: "No template image given".to_string(),
        help: Some("Pass --template <FILE> or set 'template' in segdisp.yaml".to_string()),
    })?;
    let lit = config.lit_colour()?;
    let unlit = config.unlit_colour()?;
    let package_name = config.package_name()?;

    printer.status("Loading", &display_path(template_path));
    let template = load_template(template_path)?;
    printer.verbose(
        "Template",
        &format!("{}x{}", template.width(), template.height()),
    );

    let detection = Generator::new(lit, unlit).detect(&template);
    let areas = detection.areas();
    printer.info("Detected", &plural(areas.len(), "segment", "segments"));
    for (index, area) in areas.iter().enumerate() {
        printer.verbose(
            "Segment",
            &format!("{} ({})", index, plural(area.len(), "pixel", "pixels")),
        );
    }
    if areas.is_empty() {
        printer.warning(
            "Warning",
            "no opaque white pixels found; only the unchanged template will be exported",
        );
    }

    detection.check_limit(config.max_areas)?;

    if !config.output.exists() {
        fs::create_dir_all(&config.output).map_err(|e| SegError::Io {
            path: config.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let total = detection
        .image_count()
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    printer.status(
        "Packaging",
        &format!("{} as {} ({} combinations)", package_name, config.package, total),
    );
    printer.verbose("Colours", &format!("lit {}, unlit {}", lit, unlit));

    let mut sink = Sink::create(config.package, &config.output, &package_name)?;
    let written = detection.export(&mut sink, |n, name| {
        printer.verbose("Rendering", &format!("{} ({}/{})", name, n, total));
    })?;
    let path = sink.finish()?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written, "image", "images"),
            printer.cyan(&display_path(&path))
        ),
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_template(dir: &Path, marked: &[(u32, u32)]) -> PathBuf {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 0]));
        for &(x, y) in marked {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
        let path = dir.join("digit.png");
        img.save(&path).unwrap();
        path
    }

    fn config_for(dir: &Path, template: PathBuf, package: PackageKind) -> Config {
        Config {
            template: Some(template),
            output: dir.join("out"),
            package,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_folder() {
        let dir = tempdir().unwrap();
        let template = write_template(dir.path(), &[(0, 0), (1, 0), (2, 0), (1, 2)]);
        let config = config_for(dir.path(), template, PackageKind::Folder);

        let path = generate(&config, &Printer::new()).unwrap();

        assert_eq!(path, dir.path().join("out").join("digit"));
        for tag in ["00", "01", "10", "11"] {
            assert!(path.join(format!("{}.png", tag)).exists(), "{}", tag);
        }
        assert_eq!(fs::read_dir(&path).unwrap().count(), 4);
    }

    #[test]
    fn test_generate_uses_configured_name() {
        let dir = tempdir().unwrap();
        let template = write_template(dir.path(), &[(1, 1)]);
        let config = Config {
            name: Some("clock".to_string()),
            ..config_for(dir.path(), template, PackageKind::Misskey)
        };

        let path = generate(&config, &Printer::new()).unwrap();
        assert_eq!(path, dir.path().join("out").join("clock.zip"));
    }

    #[test]
    fn test_missing_template_is_config_error() {
        let dir = tempdir().unwrap();
        let config = Config {
            output: dir.path().join("out"),
            ..Default::default()
        };

        let err = generate(&config, &Printer::new()).unwrap_err();
        assert!(matches!(err, SegError::Config { .. }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_bad_colour_fails_before_output() {
        let dir = tempdir().unwrap();
        let template = write_template(dir.path(), &[(0, 0)]);
        let config = Config {
            unlit: Some("not-a-colour".to_string()),
            ..config_for(dir.path(), template, PackageKind::Folder)
        };

        assert!(matches!(
            generate(&config, &Printer::new()),
            Err(SegError::Parse { .. })
        ));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_too_many_areas_fails_before_output() {
        let dir = tempdir().unwrap();
        let template = write_template(dir.path(), &[(0, 0), (2, 0), (0, 2), (2, 2)]);
        let config = Config {
            max_areas: 3,
            ..config_for(dir.path(), template, PackageKind::Folder)
        };

        let err = generate(&config, &Printer::new()).unwrap_err();
        assert!(matches!(err, SegError::TooManyAreas { found: 4, limit: 3 }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_args_override_config() {
        let config = Config {
            name: Some("from-file".to_string()),
            lit: Some("blue".to_string()),
            max_areas: 4,
            ..Default::default()
        };
        let args = GenerateArgs {
            name: Some("from-flag".to_string()),
            package: Some(PackageKind::Tar),
            ..Default::default()
        };

        let merged = args.apply(config);
        assert_eq!(merged.name.as_deref(), Some("from-flag"));
        assert_eq!(merged.package, PackageKind::Tar);
        assert_eq!(merged.lit.as_deref(), Some("blue"));
        assert_eq!(merged.max_areas, 4);
    }
}
