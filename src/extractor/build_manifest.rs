//! pyproject.toml extractor
//!
//! Looks for the `[project]` version line:
//!
//! ```text
//! version = "1.2.3"
//! ```
//!
//! The file is not parsed as TOML; a line-anchored pattern is enough to
//! recover the token, which keeps the check independent of the rest of the
//! manifest's syntax.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config;
use crate::extractor::traits::{ExtractError, Extractor, read_artifact};
use crate::extractor::types::ArtifactKind;

/// Extractor for pyproject.toml
pub struct BuildManifestExtractor {
    /// Matches `version = "1.2.3"` at the start of a line
    version_re: Regex,
}

impl BuildManifestExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r#"(?m)^version\s*=\s*["']([^"']+)["']"#).unwrap(),
        }
    }

    fn match_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for BuildManifestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for BuildManifestExtractor {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::BuildManifest
    }

    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError> {
        let Some(content) = read_artifact(root, config::BUILD_MANIFEST)? else {
            return Err(ExtractError::FileAbsent {
                path: config::BUILD_MANIFEST,
            });
        };

        match self.match_version(&content) {
            Some(version) => {
                debug!(version = %version, path = config::BUILD_MANIFEST, "version extracted");
                Ok(Some(version))
            }
            None => Err(ExtractError::PatternNotMatched {
                path: config::BUILD_MANIFEST,
                token: "version",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[project]\nname = \"pkg\"\nversion = \"1.2.3\"\n", Some("1.2.3"))]
    #[case("version = '0.5.0'", Some("0.5.0"))]
    #[case("version=\"3.0.0\"", Some("3.0.0"))]
    #[case("  version = \"1.2.3\"", None)] // indented, e.g. inside a dependency table
    #[case("# version = \"1.2.3\"", None)]
    #[case("[project]\nname = \"pkg\"\n", None)]
    fn match_version_cases(#[case] content: &str, #[case] expected: Option<&str>) {
        let extractor = BuildManifestExtractor::new();
        assert_eq!(
            extractor.match_version(content),
            expected.map(str::to_string)
        );
    }
}
