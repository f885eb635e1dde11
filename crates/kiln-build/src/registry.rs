//! Package registry: name-indexed package declarations and the search-path
//! flags derived from them.

use std::collections::HashMap;

use crate::config::PackageConfig;

/// Index of package declarations keyed by name.
///
/// Duplicate names silently overwrite earlier entries; the last
/// declaration wins.
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: HashMap<String, PackageConfig>,
}

impl PackageRegistry {
    pub fn new(packages: &[PackageConfig]) -> Self {
        let mut map = HashMap::new();
        for package in packages {
            map.insert(package.name.clone(), package.clone());
        }
        Self { packages: map }
    }

    /// Look up a package declaration by name.
    pub fn lookup(&self, name: &str) -> Option<&PackageConfig> {
        self.packages.get(name)
    }

    /// `-I` flag for a package's include directory, or empty when the
    /// package declares none.
    pub fn compile_flags(package: &PackageConfig) -> String {
        Self::dir_flag("-I", package.prefix.as_deref(), package.include_dir.as_deref())
    }

    /// `-L` flag for a package's library directory, or empty when the
    /// package declares none.
    pub fn link_flags(package: &PackageConfig) -> String {
        Self::dir_flag("-L", package.prefix.as_deref(), package.lib_dir.as_deref())
    }

    /// Relative dirs are joined under the prefix; absolute dirs ignore it.
    fn dir_flag(flag: &str, prefix: Option<&str>, dir: Option<&str>) -> String {
        match (prefix, dir) {
            (Some(prefix), Some(dir)) if !dir.starts_with('/') => {
                if prefix.ends_with('/') {
                    format!("{flag}{prefix}{dir}")
                } else {
                    format!("{flag}{prefix}/{dir}")
                }
            }
            (_, Some(dir)) => format!("{flag}{dir}"),
            (_, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(prefix: Option<&str>, include_dir: Option<&str>, lib_dir: Option<&str>) -> PackageConfig {
        PackageConfig {
            name: "pkg".to_string(),
            prefix: prefix.map(str::to_string),
            include_dir: include_dir.map(str::to_string),
            lib_dir: lib_dir.map(str::to_string),
        }
    }

    #[test]
    fn test_prefix_joined() {
        let pkg = package(Some("/usr/local"), Some("include"), Some("lib"));
        assert_eq!(PackageRegistry::compile_flags(&pkg), "-I/usr/local/include");
        assert_eq!(PackageRegistry::link_flags(&pkg), "-L/usr/local/lib");
    }

    #[test]
    fn test_prefix_with_trailing_separator() {
        let pkg = package(Some("/usr/local/"), Some("include"), None);
        assert_eq!(PackageRegistry::compile_flags(&pkg), "-I/usr/local/include");
    }

    #[test]
    fn test_absolute_dir_ignores_prefix() {
        let pkg = package(Some("/usr/local"), Some("/abs/include"), None);
        assert_eq!(PackageRegistry::compile_flags(&pkg), "-I/abs/include");
    }

    #[test]
    fn test_dir_without_prefix() {
        let pkg = package(None, Some("include"), None);
        assert_eq!(PackageRegistry::compile_flags(&pkg), "-Iinclude");
    }

    #[test]
    fn test_no_dirs() {
        let pkg = package(Some("/usr/local"), None, None);
        assert_eq!(PackageRegistry::compile_flags(&pkg), "");
        assert_eq!(PackageRegistry::link_flags(&pkg), "");
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let first = PackageConfig {
            name: "boost".to_string(),
            prefix: Some("/opt/old".to_string()),
            include_dir: Some("include".to_string()),
            lib_dir: None,
        };
        let second = PackageConfig {
            prefix: Some("/opt/new".to_string()),
            ..first.clone()
        };

        let registry = PackageRegistry::new(&[first, second]);
        let found = registry.lookup("boost").unwrap();
        assert_eq!(found.prefix.as_deref(), Some("/opt/new"));
    }

    #[test]
    fn test_lookup_missing() {
        let registry = PackageRegistry::new(&[]);
        assert!(registry.lookup("boost").is_none());
    }
}
