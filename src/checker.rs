//! Reconciliation of extractor results into a pass/fail verdict
//!
//! The checker runs every extractor once, gathers the artifacts that
//! contributed a version, and applies the gates in a fixed order:
//! some version must exist anywhere, all found values must agree, the
//! common value must be well-formed semver, and both mandatory artifacts
//! must have contributed. Agreement is checked before mandatory presence
//! so a disagreement is reported ahead of a missing file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::extractor::types::join_labels;
use crate::extractor::{
    ArtifactKind, BuildManifestExtractor, CiWorkflowExtractor, ContainerFileExtractor,
    ExtractError, Extractor, PackageInitExtractor, SetupScriptExtractor,
};
use crate::version::SemverValidator;

/// A successful reconciliation: one version shared by these artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consistent {
    pub version: String,
    /// Artifacts that contributed the version, in extraction order
    pub sources: Vec<ArtifactKind>,
}

/// Why reconciliation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    /// No artifact contributed any version at all
    #[error("No version information found in any file")]
    NoVersionFound,

    /// More than one distinct version value was found
    #[error("Version mismatch detected:")]
    Mismatch(Vec<(ArtifactKind, String)>),

    /// The common value does not conform to semantic versioning
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// A mandatory artifact did not contribute a version
    #[error("Version missing from required files: {}", join_labels(.0))]
    MissingMandatory(Vec<ArtifactKind>),

    /// At least one artifact file exists but could not be read
    #[error("Could not read all artifact files")]
    Unreadable,
}

/// Outcome of one invocation: extractor diagnostics plus the final result
#[derive(Debug)]
pub struct Verdict {
    /// Extractor-level diagnostics, in extraction order
    pub diagnostics: Vec<String>,
    pub outcome: Result<Consistent, Inconsistency>,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs the extractors against one project root and reconciles the results
pub struct Checker {
    root: PathBuf,
    extractors: Vec<Box<dyn Extractor>>,
    validator: SemverValidator,
}

impl Checker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extractors: vec![
                Box::new(PackageInitExtractor::new()),
                Box::new(BuildManifestExtractor::new()),
                Box::new(SetupScriptExtractor::new()),
                Box::new(ContainerFileExtractor::new()),
                Box::new(CiWorkflowExtractor::new()),
            ],
            validator: SemverValidator::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run all extractors and reconcile their results. Infallible: every
    /// anticipated failure becomes part of the verdict.
    pub fn run(&self) -> Verdict {
        let mut diagnostics = Vec::new();
        let mut found: Vec<(ArtifactKind, String)> = Vec::new();
        let mut unreadable = false;

        for extractor in &self.extractors {
            match extractor.extract(&self.root) {
                Ok(Some(version)) => found.push((extractor.kind(), version)),
                Ok(None) => {
                    debug!(artifact = extractor.kind().label(), "no version contributed");
                }
                Err(err) => {
                    if matches!(err, ExtractError::Unreadable { .. }) {
                        unreadable = true;
                    }
                    diagnostics.push(err.to_string());
                }
            }
        }

        Verdict {
            diagnostics,
            outcome: self.reconcile(found, unreadable),
        }
    }

    fn reconcile(
        &self,
        found: Vec<(ArtifactKind, String)>,
        unreadable: bool,
    ) -> Result<Consistent, Inconsistency> {
        if found.is_empty() {
            return Err(Inconsistency::NoVersionFound);
        }

        let distinct = found
            .iter()
            .map(|(_, version)| version.as_str())
            .collect::<HashSet<_>>()
            .len();
        if distinct > 1 {
            return Err(Inconsistency::Mismatch(found));
        }

        let version = found[0].1.clone();
        if !self.validator.is_valid(&version) {
            return Err(Inconsistency::InvalidFormat(version));
        }

        let missing: Vec<ArtifactKind> = ArtifactKind::MANDATORY
            .into_iter()
            .filter(|mandatory| !found.iter().any(|(kind, _)| kind == mandatory))
            .collect();
        if !missing.is_empty() {
            return Err(Inconsistency::MissingMandatory(missing));
        }

        // Unreadable files already produced diagnostics; they still fail
        // the run even when the readable artifacts agree.
        if unreadable {
            return Err(Inconsistency::Unreadable);
        }

        Ok(Consistent {
            version,
            sources: found.into_iter().map(|(kind, _)| kind).collect(),
        })
    }
}
