//! Version format validation
//!
//! - [`semver`]: semantic-versioning grammar gate

pub mod semver;

pub use semver::SemverValidator;
