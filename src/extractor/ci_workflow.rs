//! GitHub workflow extractor
//!
//! Looks for a version environment entry in the CI workflow:
//!
//! ```text
//! env:
//!   VERSION: 1.2.3
//!   VERSION: "1.2.3"
//! ```
//!
//! The value may be bare or quoted. The workflow is optional and one
//! without a `VERSION:` entry is silently skipped.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config;
use crate::extractor::traits::{ExtractError, Extractor, read_artifact};
use crate::extractor::types::ArtifactKind;

/// Extractor for .github/workflows/ci.yml
pub struct CiWorkflowExtractor {
    /// Matches `VERSION: <value>` with an optionally quoted value
    version_re: Regex,
}

impl CiWorkflowExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r#"VERSION:\s*["']?([^"'\s]+)"#).unwrap(),
        }
    }

    fn match_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for CiWorkflowExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for CiWorkflowExtractor {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::CiWorkflow
    }

    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError> {
        let Some(content) = read_artifact(root, config::CI_WORKFLOW)? else {
            return Ok(None);
        };

        let version = self.match_version(&content);
        if let Some(version) = &version {
            debug!(version = %version, path = config::CI_WORKFLOW, "version extracted");
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("env:\n  VERSION: 1.2.3\n", Some("1.2.3"))]
    #[case("env:\n  VERSION: \"2.0.0\"\n", Some("2.0.0"))]
    #[case("env:\n  VERSION: '2.0.0-rc.1'\n", Some("2.0.0-rc.1"))]
    #[case("jobs:\n  test:\n    env:\n      VERSION: 0.1.0\n", Some("0.1.0"))]
    #[case("env:\n  PYTHON_VERSION: 3.12\n", Some("3.12"))] // any *VERSION: key matches
    #[case("jobs:\n  test:\n    runs-on: ubuntu-latest\n", None)]
    fn match_version_cases(#[case] content: &str, #[case] expected: Option<&str>) {
        let extractor = CiWorkflowExtractor::new();
        assert_eq!(
            extractor.match_version(content),
            expected.map(str::to_string)
        );
    }
}
