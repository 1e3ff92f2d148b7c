//! Project configuration (segdisp.yaml).
//!
//! Every field is optional. Command-line flags override values from the
//! file, and the file overrides built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegError};
use crate::export::PackageKind;
use crate::pipeline::DEFAULT_MAX_AREAS;
use crate::types::Colour;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "segdisp.yaml";

/// Configuration loaded from segdisp.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template image path.
    pub template: Option<PathBuf>,

    /// Output directory for generated packages.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Package name; defaults to the template's file stem.
    pub name: Option<String>,

    /// Package layout.
    pub package: PackageKind,

    /// Colour of lit segments (hex or CSS name).
    pub lit: Option<String>,

    /// Colour of unlit segments (hex or CSS name).
    pub unlit: Option<String>,

    /// Refuse templates with more segments than this; 0 disables the check.
    #[serde(default = "default_max_areas")]
    pub max_areas: usize,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_max_areas() -> usize {
    DEFAULT_MAX_AREAS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            output: default_output(),
            name: None,
            package: PackageKind::default(),
            lit: None,
            unlit: None,
            max_areas: default_max_areas(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SegError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;

        // Relative paths in the file are relative to the file, not the cwd.
        if let Some(dir) = path.parent() {
            config.template = config.template.map(|t| resolve(dir, t));
            config.output = resolve(dir, config.output);
        }

        Ok(config)
    }

    /// Load `path` if given, else `segdisp.yaml` in `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SegError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Effective lit colour.
    pub fn lit_colour(&self) -> Result<Colour> {
        parse_or(self.lit.as_deref(), Colour::RED)
    }

    /// Effective unlit colour.
    pub fn unlit_colour(&self) -> Result<Colour> {
        parse_or(self.unlit.as_deref(), Colour::DIM_GRAY)
    }

    /// Effective package name: the configured name or the template's stem.
    pub fn package_name(&self) -> Result<String> {
        let name = match (&self.name, &self.template) {
            (Some(name), _) => name.trim().to_string(),
            (None, Some(template)) => template
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string(),
            (None, None) => String::new(),
        };

        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(SegError::Config {
                message: format!("Invalid package name '{}'", name),
                help: Some("Pass --name with a plain file name such as 'clock'".to_string()),
            });
        }

        Ok(name)
    }

    /// Render as YAML, for `segdisp init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SegError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

fn resolve(dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        dir.join(path)
    } else {
        path
    }
}

fn parse_or(value: Option<&str>, default: Colour) -> Result<Colour> {
    value.map_or(Ok(default), str::parse)
}
