//! Errors that abort a labelcheck run.
//!
//! Invalid labels are not errors; they are reported through
//! [`InvalidLabelReport`](crate::validator::InvalidLabelReport). Everything
//! here is fatal: the run stops at the first one.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal labelcheck errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No file matched any of the configured glob patterns.
    #[error("no files matching pattern found (patterns: {})", patterns.join(", "))]
    NoFilesFound { patterns: Vec<String> },

    /// A glob pattern could not be parsed.
    #[error("invalid glob pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A path could not be inspected while expanding a glob.
    #[error("glob expansion failed")]
    Glob(#[from] glob::GlobError),

    /// The label regex does not compile.
    #[error("invalid label pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A discovered file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered file is not valid YAML.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The YAML is valid but `services`/`labels` have an unexpected shape.
    #[error("{}: {message}", path.display())]
    Shape { path: PathBuf, message: String },

    /// Writing a listing to the output sink failed.
    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

/// Result alias for kernel operations.
pub type Result<T> = std::result::Result<T, Error>;
