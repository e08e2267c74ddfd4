//! Pre-release identifier handling for semantic versioning
//!
//! A pre-release identifier is a dot-separated list of alphanumeric segments
//! (e.g. "alpha", "beta.1", "rc.2.x") with its own precedence rules.
//! According to semver.org: https://semver.org/#spec-item-9

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SemverError};
use crate::suffix;

/// Validated pre-release identifier of a semantic version
///
/// Always holds at least one segment; an empty identifier is not
/// constructible. "No pre-release" is expressed as `Option::None` on
/// [`SemanticVersion`](crate::SemanticVersion), never as an empty value.
///
/// # Examples
/// - "alpha" -> segments ["alpha"]
/// - "beta.1" -> segments ["beta", "1"]
/// - "rc.2.x7z" -> segments ["rc", "2", "x7z"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreReleaseIdentifier {
    canonical: String,
    segments: Vec<String>,
}

impl PreReleaseIdentifier {
    /// Parse a pre-release identifier from a dotted string
    ///
    /// # Arguments
    /// * `s` - String to parse (e.g. "beta.1")
    ///
    /// # Returns
    /// * `Ok(PreReleaseIdentifier)` - Parsed identifier
    /// * `Err` - `InvalidFormat` if the string is empty, contains empty or
    ///   non-alphanumeric segments, or has leading/trailing dots
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Build an identifier from pre-split segment parts
    ///
    /// Each part is validated against the single-segment grammar; the
    /// canonical string is the parts joined with dots, so
    /// `from_parts(["beta", "1"])` equals `parse("beta.1")`.
    ///
    /// # Returns
    /// * `Ok(PreReleaseIdentifier)` - Validated identifier
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
            return Err(SemverError::argument(
                "pre-release identifier cannot be empty",
            ));
        }
        if let Some(bad) = segments.iter().find(|p| !suffix::is_valid_segment(p)) {
            return Err(SemverError::format(format!(
                "invalid pre-release segment '{}'",
                bad
            )));
        }
        let canonical = segments.join(".");
        Ok(PreReleaseIdentifier {
            canonical,
            segments,
        })
    }

    /// The ordered segments of this identifier (always non-empty)
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The canonical dotted form
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for PreReleaseIdentifier {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        let segments = suffix::parse_suffix(s).map_err(|_| {
            SemverError::format(format!(
                "invalid pre-release identifier '{}' - does not match requirements",
                s
            ))
        })?;
        Ok(PreReleaseIdentifier {
            canonical: s.to_string(),
            segments,
        })
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl Ord for PreReleaseIdentifier {
    /// Semver precedence for pre-release identifiers:
    /// segment-pairwise up to the shorter length, first difference wins;
    /// if all shared segments are equal, the shorter identifier is lesser.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match compare_segments(a, b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.segments.len().cmp(&other.segments.len())
    }
}

impl PartialOrd for PreReleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two segments: both numeric compare as integers, a numeric
/// segment is always lesser than an alphanumeric one, two alphanumeric
/// segments compare lexically.
fn compare_segments(a: &str, b: &str) -> Ordering {
    // Overflowing digit runs fall back to the alphanumeric path.
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PreReleaseIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PreReleaseIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
