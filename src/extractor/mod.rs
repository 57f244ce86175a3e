//! Extraction layer
//! - traits.rs: Extractor trait definition
//! - types.rs: Common types (ArtifactKind)
//! - package_init.rs: package `__init__.py` extractor
//! - build_manifest.rs: pyproject.toml extractor
//! - setup_script.rs: setup.py extractor
//! - container_file.rs: Dockerfile extractor
//! - ci_workflow.rs: GitHub workflow extractor

pub mod build_manifest;
pub mod ci_workflow;
pub mod container_file;
pub mod package_init;
pub mod setup_script;
pub mod traits;
pub mod types;

pub use build_manifest::BuildManifestExtractor;
pub use ci_workflow::CiWorkflowExtractor;
pub use container_file::ContainerFileExtractor;
pub use package_init::PackageInitExtractor;
pub use setup_script::SetupScriptExtractor;
pub use traits::{ExtractError, Extractor};
pub use types::ArtifactKind;
