//! Semantic version values: parsing, formatting, equality and precedence
//! per the Semantic Versioning specification (https://semver.org).

pub mod error;
pub mod metadata;
pub mod prerelease;
mod suffix;
pub mod version;

pub use error::{Result, SemverError};
pub use metadata::VersionMetadata;
pub use prerelease::PreReleaseIdentifier;
pub use version::SemanticVersion;
