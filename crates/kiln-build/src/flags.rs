//! Flag-string composition.
//!
//! Flag strings are built by folding ordered directives over a base
//! string. Every directive application is followed by a whitespace
//! normalization pass, so composed strings never contain runs of
//! whitespace or leading/trailing padding.

use regex::Regex;

use crate::config::FlagDirective;
use crate::error::{BuildError, Result};

/// Applies ordered flag directives to a base string.
///
/// Holds the compiled whitespace pattern so every composition in a run
/// shares one instance instead of recompiling it per call.
#[derive(Debug, Clone)]
pub struct FlagComposer {
    whitespace: Regex,
}

impl FlagComposer {
    pub fn new() -> Self {
        // \x0B is vertical tab; the regex crate has no \v escape.
        Self {
            whitespace: Regex::new(r"[ \t\n\r\x0B]+").expect("whitespace pattern is valid"),
        }
    }

    /// Fold `directives` left-to-right over `base`.
    ///
    /// Pure string transformation; the only failure is a `replace`
    /// directive carrying an invalid pattern.
    pub fn compose(&self, base: &str, directives: &[FlagDirective]) -> Result<String> {
        let mut flags = base.to_string();
        for directive in directives {
            flags = self.apply(flags, directive)?;
        }
        Ok(flags)
    }

    /// Apply one directive, then collapse whitespace runs to single
    /// spaces and trim the ends.
    fn apply(&self, base: String, directive: &FlagDirective) -> Result<String> {
        let next = match directive {
            FlagDirective::Reset(value) => value.clone(),
            FlagDirective::Append(value) => format!("{base} {value}"),
            FlagDirective::Prepend(value) => format!("{value} {base}"),
            FlagDirective::Replace { pattern, with } => {
                let pattern = Regex::new(pattern).map_err(|source| {
                    BuildError::BadReplacePattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })?;
                pattern.replace_all(&base, with.as_str()).into_owned()
            }
        };
        Ok(self.whitespace.replace_all(&next, " ").trim().to_string())
    }
}

impl Default for FlagComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append(value: &str) -> FlagDirective {
        FlagDirective::Append(value.to_string())
    }

    #[test]
    fn test_append() {
        let composer = FlagComposer::new();
        let flags = composer.compose("-O2", &[append("-Wall")]).unwrap();
        assert_eq!(flags, "-O2 -Wall");
    }

    #[test]
    fn test_append_to_empty() {
        let composer = FlagComposer::new();
        let flags = composer.compose("", &[append("-std=c++20")]).unwrap();
        assert_eq!(flags, "-std=c++20");
    }

    #[test]
    fn test_reset() {
        let composer = FlagComposer::new();
        let flags = composer
            .compose("-O2", &[FlagDirective::Reset("-O3".to_string())])
            .unwrap();
        assert_eq!(flags, "-O3");
    }

    #[test]
    fn test_prepend() {
        let composer = FlagComposer::new();
        let flags = composer
            .compose("-Wall", &[FlagDirective::Prepend("-O2".to_string())])
            .unwrap();
        assert_eq!(flags, "-O2 -Wall");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let composer = FlagComposer::new();
        let flags = composer
            .compose(
                "-O2 -g -O2",
                &[FlagDirective::Replace {
                    pattern: "-O2".to_string(),
                    with: "-O0".to_string(),
                }],
            )
            .unwrap();
        assert_eq!(flags, "-O0 -g -O0");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let composer = FlagComposer::new();
        let flags = composer.compose("a   b", &[append("c")]).unwrap();
        assert_eq!(flags, "a b c");
        assert!(!flags.contains("  "));

        let flags = composer.compose("a\t\nb\r\x0Bc", &[append("d")]).unwrap();
        assert_eq!(flags, "a b c d");
    }

    #[test]
    fn test_no_directives_is_identity() {
        let composer = FlagComposer::new();
        let flags = composer.compose("-O2  -g", &[]).unwrap();
        // Normalization only runs per directive; an empty sequence
        // leaves the base untouched.
        assert_eq!(flags, "-O2  -g");
    }

    #[test]
    fn test_directive_order() {
        let composer = FlagComposer::new();
        let flags = composer
            .compose(
                "-O2",
                &[
                    append("-Wall"),
                    FlagDirective::Reset("-g".to_string()),
                    append("-Werror"),
                ],
            )
            .unwrap();
        assert_eq!(flags, "-g -Werror");
    }

    #[test]
    fn test_bad_replace_pattern() {
        let composer = FlagComposer::new();
        let err = composer
            .compose(
                "-O2",
                &[FlagDirective::Replace {
                    pattern: "(".to_string(),
                    with: "".to_string(),
                }],
            )
            .unwrap_err();
        assert!(matches!(err, BuildError::BadReplacePattern { .. }));
    }
}
