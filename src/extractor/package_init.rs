//! Package `__init__.py` extractor
//!
//! The package init module declares its version as a module-level
//! assignment:
//!
//! ```text
//! __version__ = "1.2.3"
//! ```
//!
//! Single or double quotes are accepted. Only assignments starting at the
//! beginning of a line count; the first match wins.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config;
use crate::extractor::traits::{ExtractError, Extractor, read_artifact};
use crate::extractor::types::ArtifactKind;

/// Extractor for the package `__init__.py`
pub struct PackageInitExtractor {
    /// Matches `__version__ = "1.2.3"` at the start of a line
    version_re: Regex,
}

impl PackageInitExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r#"(?m)^__version__\s*=\s*["']([^"']+)["']"#).unwrap(),
        }
    }

    fn match_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for PackageInitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PackageInitExtractor {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::PackageInit
    }

    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError> {
        let Some(content) = read_artifact(root, config::PACKAGE_INIT)? else {
            return Err(ExtractError::FileAbsent {
                path: config::PACKAGE_INIT,
            });
        };

        match self.match_version(&content) {
            Some(version) => {
                debug!(version = %version, path = config::PACKAGE_INIT, "version extracted");
                Ok(Some(version))
            }
            None => Err(ExtractError::PatternNotMatched {
                path: config::PACKAGE_INIT,
                token: "__version__",
            }),
        }
    }
}
