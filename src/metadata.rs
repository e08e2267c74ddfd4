//! Build metadata handling for semantic versioning
//!
//! Build metadata shares the dotted-segment grammar with pre-release
//! identifiers but is ignored when determining version precedence.
//! According to semver.org: https://semver.org/#spec-item-10

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SemverError};
use crate::suffix;

/// Validated build metadata of a semantic version
///
/// Carried for identity and display only. The type deliberately implements
/// no ordering, so metadata can never leak into version precedence.
/// Always holds at least one segment; "no metadata" is `Option::None` on
/// [`SemanticVersion`](crate::SemanticVersion).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionMetadata {
    canonical: String,
    segments: Vec<String>,
}

impl VersionMetadata {
    /// Parse build metadata from a dotted string (e.g. "build.234")
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Build metadata from pre-split segment parts
    ///
    /// `from_parts(["build", "234"])` equals `parse("build.234")`.
    ///
    /// # Returns
    /// * `Ok(VersionMetadata)` - Validated metadata
    /// * `Err` - `InvalidArgument` if no parts are given, `InvalidFormat`
    ///   if any part violates the segment grammar
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = parts
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        if segments.is_empty() {
            return Err(SemverError::argument("metadata cannot be empty"));
        }
        if let Some(bad) = segments.iter().find(|p| !suffix::is_valid_segment(p)) {
            return Err(SemverError::format(format!(
                "invalid metadata segment '{}'",
                bad
            )));
        }
        let canonical = segments.join(".");
        Ok(VersionMetadata {
            canonical,
            segments,
        })
    }

    /// The ordered segments of this metadata (always non-empty)
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The canonical dotted form
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for VersionMetadata {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        let segments = suffix::parse_suffix(s).map_err(|_| {
            SemverError::format(format!(
                "invalid metadata '{}' - does not match requirements",
                s
            ))
        })?;
        Ok(VersionMetadata {
            canonical: s.to_string(),
            segments,
        })
    }
}

impl fmt::Display for VersionMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionMetadata {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionMetadata {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
