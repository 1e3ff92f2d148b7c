use miette::Diagnostic;
use thiserror::Error;

/// Main error type for segdisp operations
#[derive(Error, Diagnostic, Debug)]
pub enum SegError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(segdisp::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(segdisp::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(segdisp::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(segdisp::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Template has {found} segments, more than the limit of {limit}")]
    #[diagnostic(
        code(segdisp::too_many_areas),
        help("Every segment doubles the number of images. Raise --max-areas (or set it to 0) if this is intended")
    )]
    TooManyAreas { found: usize, limit: usize },

    #[error("Archive error: {message}")]
    #[diagnostic(code(segdisp::archive))]
    Archive { message: String },
}

pub type Result<T> = std::result::Result<T, SegError>;
