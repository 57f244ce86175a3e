//! Common types for extractors

use crate::config;

/// Kind of project artifact that can declare a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Package `__init__.py` (`__version__ = "..."`)
    PackageInit,
    /// pyproject.toml (`version = "..."`)
    BuildManifest,
    /// setup.py (`version="..."` keyword argument)
    SetupScript,
    /// docker/Dockerfile (`ARG VERSION=...`)
    ContainerFile,
    /// .github/workflows/ci.yml (`VERSION: ...`)
    CiWorkflow,
}

impl ArtifactKind {
    /// Artifacts that must contribute a version for the check to pass
    pub const MANDATORY: [ArtifactKind; 2] =
        [ArtifactKind::PackageInit, ArtifactKind::BuildManifest];

    /// Fixed path of the artifact, relative to the project root
    pub fn path(&self) -> &'static str {
        match self {
            ArtifactKind::PackageInit => config::PACKAGE_INIT,
            ArtifactKind::BuildManifest => config::BUILD_MANIFEST,
            ArtifactKind::SetupScript => config::SETUP_SCRIPT,
            ArtifactKind::ContainerFile => config::CONTAINER_FILE,
            ArtifactKind::CiWorkflow => config::CI_WORKFLOW,
        }
    }

    /// Short name used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::PackageInit => "__init__.py",
            ArtifactKind::BuildManifest => "pyproject.toml",
            ArtifactKind::SetupScript => "setup.py",
            ArtifactKind::ContainerFile => "Dockerfile",
            ArtifactKind::CiWorkflow => "GitHub workflow",
        }
    }

    /// Whether absence of this artifact alone fails the check
    pub fn is_mandatory(&self) -> bool {
        Self::MANDATORY.contains(self)
    }
}

/// Comma-join the report labels of a set of artifact kinds
pub fn join_labels(kinds: &[ArtifactKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}
