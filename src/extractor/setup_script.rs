//! setup.py extractor
//!
//! A setup.py may declare the version in two ways:
//!
//! ```text
//! setup(
//!     name="pkg",
//!     version="1.2.3",
//! )
//! ```
//!
//! or defer to the package init module via a `find_version()` helper, in
//! which case the value is whatever `__init__.py` declares. The file is
//! optional; absence or a missing declaration is never reported.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config;
use crate::extractor::package_init::PackageInitExtractor;
use crate::extractor::traits::{ExtractError, Extractor, read_artifact};
use crate::extractor::types::ArtifactKind;

/// Extractor for setup.py
pub struct SetupScriptExtractor {
    /// Matches a `version="1.2.3"` keyword argument anywhere in the file
    version_re: Regex,
    /// Fallback when the script uses `find_version()` instead of a literal
    package_init: PackageInitExtractor,
}

impl SetupScriptExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r#"version\s*=\s*["']([^"']+)["']"#).unwrap(),
            package_init: PackageInitExtractor::new(),
        }
    }

    fn match_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for SetupScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for SetupScriptExtractor {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SetupScript
    }

    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError> {
        let Some(content) = read_artifact(root, config::SETUP_SCRIPT)? else {
            return Ok(None);
        };

        if let Some(version) = self.match_version(&content) {
            debug!(version = %version, path = config::SETUP_SCRIPT, "version extracted");
            return Ok(Some(version));
        }

        if content.contains("find_version()") {
            // The script resolves its version from __init__.py at build
            // time. Failures of the delegated extractor stay silent here;
            // the package-init extractor reports them in its own run.
            debug!(path = config::SETUP_SCRIPT, "find_version() call, deferring to __init__.py");
            return Ok(self.package_init.extract(root).unwrap_or(None));
        }

        Ok(None)
    }
}
