//! Error types for kiln-build.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kiln-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while loading configs or generating build files.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to read the preamble document.
    #[error("failed to read preamble {path}: {source}")]
    ReadPreamble {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preamble document is not valid TOML for the preamble schema.
    #[error("failed to parse preamble {path}: {source}")]
    ParsePreamble {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to read the project config document.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project config document is not valid TOML for the config schema.
    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `replace` directive carries a pattern the regex engine rejects.
    #[error("invalid replace pattern `{pattern}`: {source}")]
    BadReplacePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A library names a dependency with no matching package declaration.
    #[error("library `{library}` depends on unknown package `{package}`")]
    UnknownDependency { library: String, package: String },

    /// A source path does not match `dir/stem.ext` with a recognized
    /// C/C++ extension, so no object path can be derived for it.
    #[error("library `{library}` has unrecognized source path `{path}`")]
    UnrecognizedSource { library: String, path: String },
}
