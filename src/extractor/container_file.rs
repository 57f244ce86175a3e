//! Dockerfile extractor
//!
//! Looks for the version build argument:
//!
//! ```text
//! ARG VERSION=1.2.3
//! ARG VERSION="1.2.3"
//! ```
//!
//! The value may be bare or quoted; it ends at the first whitespace or
//! quote. The file is optional and a Dockerfile without the build argument
//! is silently skipped.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config;
use crate::extractor::traits::{ExtractError, Extractor, read_artifact};
use crate::extractor::types::ArtifactKind;

/// Extractor for docker/Dockerfile
pub struct ContainerFileExtractor {
    /// Matches `ARG VERSION=<value>` with an optionally quoted value
    version_re: Regex,
}

impl ContainerFileExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r#"ARG\s+VERSION\s*=\s*["']?([^"'\s]+)"#).unwrap(),
        }
    }

    fn match_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for ContainerFileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ContainerFileExtractor {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ContainerFile
    }

    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError> {
        let Some(content) = read_artifact(root, config::CONTAINER_FILE)? else {
            return Ok(None);
        };

        let version = self.match_version(&content);
        if let Some(version) = &version {
            debug!(version = %version, path = config::CONTAINER_FILE, "version extracted");
        }
        Ok(version)
    }
}
