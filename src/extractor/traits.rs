//! Extractor trait definition

use std::fs;
use std::io;
use std::path::Path;

use crate::extractor::types::ArtifactKind;

/// Trait for extracting a version declaration from one project artifact
pub trait Extractor {
    /// The artifact this extractor inspects
    fn kind(&self) -> ArtifactKind;

    /// Look for a version declaration under the given project root.
    ///
    /// `Ok(Some(version))` is a successful extraction. `Ok(None)` means the
    /// artifact is absent or carries no version and that is acceptable
    /// (optional artifacts). `Err` carries a condition the reconciler must
    /// surface as a diagnostic.
    fn extract(&self, root: &Path) -> Result<Option<String>, ExtractError>;
}

/// Error type for extraction operations
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A mandatory artifact file does not exist
    #[error("{path} not found")]
    FileAbsent { path: &'static str },

    /// A mandatory artifact exists but its version pattern did not match
    #[error("No {token} found in {path}")]
    PatternNotMatched {
        path: &'static str,
        token: &'static str,
    },

    /// The file exists but could not be read (permissions, encoding)
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: &'static str,
        source: io::Error,
    },
}

/// Read an artifact relative to the project root.
///
/// A missing file is not an error at this level; callers decide whether
/// absence is reportable. Any other read failure (permission denial,
/// invalid UTF-8) becomes [`ExtractError::Unreadable`].
pub(crate) fn read_artifact(
    root: &Path,
    rel_path: &'static str,
) -> Result<Option<String>, ExtractError> {
    match fs::read_to_string(root.join(rel_path)) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ExtractError::Unreadable {
            path: rel_path,
            source: err,
        }),
    }
}
