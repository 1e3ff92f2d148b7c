//! Init command implementation.
//!
//! Writes a starter `segdisp.yaml` with every option at its default.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, SegError};
use crate::output::{display_path, Printer};
use crate::types::Colour;

/// Initialize a segdisp project (generates segdisp.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Template image to record in the config
    #[arg(long, short)]
    pub template: Option<PathBuf>,

    /// Overwrite existing segdisp.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(SegError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = Config {
        template: args.template,
        lit: Some(Colour::RED.to_string()),
        unlit: Some(Colour::DIM_GRAY.to_string()),
        ..Default::default()
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| SegError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PackageKind;
    use tempfile::tempdir;

    fn init(dir: &std::path::Path, force: bool) -> Result<()> {
        let args = InitArgs {
            path: dir.to_path_buf(),
            template: Some(PathBuf::from("digit.png")),
            force,
        };
        run(args, &Printer::new())
    }

    #[test]
    fn test_init_creates_loadable_config() {
        let dir = tempdir().unwrap();
        init(dir.path(), false).unwrap();

        let config = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.template, Some(dir.path().join("digit.png")));
        assert_eq!(config.output, dir.path().join("dist"));
        assert_eq!(config.package, PackageKind::Folder);
        assert_eq!(config.lit_colour().unwrap(), Colour::RED);
        assert_eq!(config.unlit_colour().unwrap(), Colour::DIM_GRAY);
    }

    #[test]
    fn test_init_errors_if_config_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: build").unwrap();

        assert!(init(dir.path(), false).is_err());
        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(content, "output: build");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: build").unwrap();

        init(dir.path(), true).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("output: dist"));
    }
}
