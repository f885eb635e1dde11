//! Configuration document types (kiln TOML format).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BuildError, Result};

/// One atomic rewrite of a flag string.
///
/// Directives apply in declaration order; each one transforms the string
/// accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagDirective {
    /// Discard the accumulated string and start over from this value.
    Reset(String),
    /// Add to the end of the accumulated string.
    Append(String),
    /// Add to the front of the accumulated string.
    Prepend(String),
    /// Substitute every match of `pattern` with `with`.
    Replace { pattern: String, with: String },
}

/// Toolchain-level configuration shared by every library.
///
/// Loaded from `<kiln-binary>.preamble` next to the executable, or from
/// the path given with `--preamble`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preamble {
    /// Executable used for both compiling and linking.
    pub compile_command: String,

    /// Directives building the global compile flag string from scratch.
    #[serde(default)]
    pub compile_flags: Vec<FlagDirective>,

    /// Directives building the global link flag string from scratch.
    #[serde(default)]
    pub link_flags: Vec<FlagDirective>,
}

/// An external dependency contributing include/library search paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Package name, referenced by library `dependency` lists.
    pub name: String,

    /// Installation prefix joined onto relative include/lib dirs.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Header directory, relative to `prefix` unless absolute.
    #[serde(default)]
    pub include_dir: Option<String>,

    /// Library directory, relative to `prefix` unless absolute.
    #[serde(default)]
    pub lib_dir: Option<String>,
}

/// A named unit of sources compiled into a static archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library name. Doubles as the object-directory prefix and the
    /// archive stem, so it must be unique across the config.
    pub name: String,

    /// Source files, in compile order.
    #[serde(default)]
    pub src: Vec<String>,

    /// Per-library rewrites of the global compile flag string.
    #[serde(default)]
    pub compile_flags: Vec<FlagDirective>,

    /// Per-library rewrites of the global link flag string.
    #[serde(default)]
    pub link_flags: Vec<FlagDirective>,

    /// Names of packages whose search paths this library needs.
    #[serde(default)]
    pub dependency: Vec<String>,
}

/// Root config document: the packages and libraries of one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Declared external packages.
    #[serde(rename = "package", default)]
    pub packages: Vec<PackageConfig>,

    /// Libraries to generate build edges for, in declaration order.
    #[serde(rename = "library", default)]
    pub libraries: Vec<LibraryConfig>,
}

impl Preamble {
    /// Load the preamble document from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BuildError::ReadPreamble {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| BuildError::ParsePreamble {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Load a project config document from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BuildError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| BuildError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a library by name.
    pub fn find_library(&self, name: &str) -> Option<&LibraryConfig> {
        self.libraries.iter().find(|lib| lib.name == name)
    }
}
