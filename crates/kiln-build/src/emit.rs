//! Ninja build-file emission.
//!
//! A [`Generator`] renders one preamble + config pair into the textual
//! build graph: variable assignments, the `cxx` and `link_exe` rules,
//! one compile edge per source file, and one archive edge per library.
//! Rendering is all-or-nothing; nothing reaches the output stream when
//! generation fails partway.

use regex::Regex;

use crate::config::{Config, FlagDirective, LibraryConfig, Preamble};
use crate::error::{BuildError, Result};
use crate::flags::FlagComposer;
use crate::registry::PackageRegistry;

/// Splits a source path into directory, stem, and a recognized C/C++
/// extension.
const SOURCE_PATTERN: &str = r"^(.*)/(.*)\.(c|cc|cpp|cxx|h|hpp|hxx|inc|ipp)$";

/// Renders a config document into Ninja build-file text.
pub struct Generator {
    composer: FlagComposer,
    source_file: Regex,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            composer: FlagComposer::new(),
            source_file: Regex::new(SOURCE_PATTERN).expect("source pattern is valid"),
        }
    }

    /// Render the full build file for `config` under `preamble`.
    pub fn generate(&self, preamble: &Preamble, config: &Config) -> Result<String> {
        let compile_flags = self.composer.compose("", &preamble.compile_flags)?;
        let link_flags = self.composer.compose("", &preamble.link_flags)?;

        let mut out = String::new();
        out.push_str(&format!("cxxflags = {compile_flags}\n\n"));
        out.push_str(&format!("ldflags = {link_flags}\n\n"));
        out.push_str(&format!(
            "rule cxx\n  command = {} $cxxflags -c $in -o $out\n\n",
            preamble.compile_command
        ));
        out.push_str(&format!(
            "rule link_exe\n  command = {} $ldflags $in -o $out\n\n",
            preamble.compile_command
        ));

        let registry = PackageRegistry::new(&config.packages);
        for library in &config.libraries {
            self.generate_library(&registry, &compile_flags, &link_flags, library, &mut out)?;
        }

        Ok(out)
    }

    /// Emit the compile edges and the archive edge for one library.
    fn generate_library(
        &self,
        registry: &PackageRegistry,
        compile_flags: &str,
        link_flags: &str,
        library: &LibraryConfig,
        out: &mut String,
    ) -> Result<()> {
        let mut lib_compile_flags = self.composer.compose(compile_flags, &library.compile_flags)?;
        let mut lib_link_flags = self.composer.compose(link_flags, &library.link_flags)?;

        for name in &library.dependency {
            let package = registry.lookup(name).ok_or_else(|| BuildError::UnknownDependency {
                library: library.name.clone(),
                package: name.clone(),
            })?;

            let include = PackageRegistry::compile_flags(package);
            if !include.is_empty() {
                lib_compile_flags = self
                    .composer
                    .compose(&lib_compile_flags, &[FlagDirective::Append(include)])?;
            }
            let lib_path = PackageRegistry::link_flags(package);
            if !lib_path.is_empty() {
                lib_link_flags = self
                    .composer
                    .compose(&lib_link_flags, &[FlagDirective::Append(lib_path)])?;
            }
        }

        let override_compile_flags = lib_compile_flags != compile_flags;
        let override_link_flags = lib_link_flags != link_flags;

        let mut objects = Vec::with_capacity(library.src.len());
        for src in &library.src {
            let object = self.object_path(library, src)?;

            out.push_str(&format!("build {object}: cxx {src}\n"));
            if override_compile_flags {
                out.push_str(&format!("  cxxflags = {lib_compile_flags}\n"));
            }
            out.push('\n');

            objects.push(object);
        }

        out.push_str(&format!(
            "build build/lib{}.a: link_exe {}\n",
            library.name,
            objects.join(" ")
        ));
        if override_link_flags {
            out.push_str(&format!("  ldflags = {lib_link_flags}\n"));
        }
        out.push('\n');

        Ok(())
    }

    /// `src/a.cc` under library `foo` becomes `foo/src/a.o`.
    fn object_path(&self, library: &LibraryConfig, src: &str) -> Result<String> {
        let caps = self
            .source_file
            .captures(src)
            .ok_or_else(|| BuildError::UnrecognizedSource {
                library: library.name.clone(),
                path: src.to_string(),
            })?;
        Ok(format!("{}/{}/{}.o", library.name, &caps[1], &caps[2]))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
