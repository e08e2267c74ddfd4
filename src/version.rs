//! Semantic version value type
//!
//! Aggregates the numeric core triplet with optional pre-release identifier
//! and build metadata, and implements semver precedence.
//! According to semver.org: https://semver.org/#spec-item-11

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SemverError};
use crate::metadata::VersionMetadata;
use crate::prerelease::PreReleaseIdentifier;

// The suffix captures are deliberately loose ([0-9A-Za-z.]+); the strict
// segment grammar (no empty segments) is enforced by the suffix parsers.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-(?P<pre>[0-9A-Za-z.]+))?(?:\+(?P<meta>[0-9A-Za-z.]+))?$",
    )
    .expect("static regex")
});

/// Immutable semantic version value
///
/// Precedence and equality cover major, minor, patch and the pre-release
/// identifier; build metadata is annotation only and never participates
/// in either.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pre_release: Option<PreReleaseIdentifier>,
    metadata: Option<VersionMetadata>,
}

impl SemanticVersion {
    /// Create a release version with no pre-release or metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_release: None,
            metadata: None,
        }
    }

    /// Attach a pre-release identifier
    ///
    /// Infallible: an empty identifier is not constructible, so
    /// "empty-but-present" cannot occur.
    pub fn with_pre_release(mut self, pre_release: PreReleaseIdentifier) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    /// Attach build metadata
    pub fn with_metadata(mut self, metadata: VersionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Parse a version from a string (e.g. "1.2.3-beta.1+build.234")
    ///
    /// All three numeric components are mandatory; "1.2" is rejected.
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - Parsed version
    /// * `Err` - `InvalidFormat` if the string does not match
    ///   `MAJOR.MINOR.PATCH["-" prerelease]["+" metadata]`
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// The pre-release identifier, if any
    pub fn pre_release(&self) -> Option<&PreReleaseIdentifier> {
        self.pre_release.as_ref()
    }

    /// The build metadata, if any
    pub fn metadata(&self) -> Option<&VersionMetadata> {
        self.metadata.as_ref()
    }

    /// Whether this version has a pre-release identifier
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl FromStr for SemanticVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        let captures = VERSION_RE.captures(s).ok_or_else(|| {
            SemverError::format(format!(
                "invalid version '{}' - expected MAJOR.MINOR.PATCH with optional -prerelease and +metadata",
                s
            ))
        })?;

        let number = |name: &str| -> Result<u64> {
            let digits = &captures[name];
            digits.parse::<u64>().map_err(|_| {
                SemverError::format(format!("invalid {} version: {}", name, digits))
            })
        };
        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let pre_release = captures
            .name("pre")
            .map(|m| PreReleaseIdentifier::parse(m.as_str()))
            .transpose()?;
        let metadata = captures
            .name("meta")
            .map(|m| VersionMetadata::parse(m.as_str()))
            .transpose()?;

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre_release,
            metadata,
        })
    }
}

impl fmt::Display for SemanticVersion {
    /// Canonical form `MAJOR.MINOR.PATCH[-prerelease]`.
    ///
    /// Build metadata is deliberately omitted; callers that need the full
    /// form append `+` and [`SemanticVersion::metadata`] themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl PartialEq for SemanticVersion {
    /// Metadata is excluded: two versions differing only in build metadata
    /// are equal, consistent with [`Ord`].
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for SemanticVersion {
    /// Semver precedence: major, minor, patch, then pre-release where a
    /// release (no pre-release) is greater than any pre-release of the same
    /// core triplet. Metadata is never consulted.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticVersion {
    /// Serializes the full form including metadata, unlike `Display`, so
    /// that a serialize/deserialize round trip is lossless.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.metadata {
            Some(meta) => serializer.collect_str(&format_args!("{}+{}", self, meta)),
            None => serializer.collect_str(self),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let v = SemanticVersion::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert!(v.pre_release().is_none());
        assert!(v.metadata().is_none());
    }

    #[test]
    fn test_parse_full() {
        let v = SemanticVersion::parse("1.2.3-beta.1+build.234").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.pre_release().unwrap().segments(), ["beta", "1"]);
        assert_eq!(v.metadata().unwrap().segments(), ["build", "234"]);
    }

    #[test]
    fn test_parse_pre_release_only() {
        let v = SemanticVersion::parse("1.2.3-beta.1").unwrap();
        assert_eq!(v.pre_release().unwrap().as_str(), "beta.1");
        assert!(v.metadata().is_none());
    }

    #[test]
    fn test_parse_metadata_only() {
        let v = SemanticVersion::parse("1.2.3+build.234").unwrap();
        assert!(v.pre_release().is_none());
        assert_eq!(v.metadata().unwrap().as_str(), "build.234");
    }

    #[test]
    fn test_parse_missing_patch() {
        assert!(matches!(
            SemanticVersion::parse("1.2"),
            Err(SemverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(SemanticVersion::parse("").is_err());
        assert!(SemanticVersion::parse("1.2.3.4").is_err());
        assert!(SemanticVersion::parse("a.b.c").is_err());
        assert!(SemanticVersion::parse("1.2.x").is_err());
        assert!(SemanticVersion::parse("1.2.3-").is_err());
        assert!(SemanticVersion::parse("1.2.3+").is_err());
        assert!(SemanticVersion::parse("1.2.3-beta..1").is_err());
        assert!(SemanticVersion::parse(" 1.2.3").is_err());
        assert!(SemanticVersion::parse("1.2.3 ").is_err());
        assert!(SemanticVersion::parse("v1.2.3").is_err());
    }

    #[test]
    fn test_parse_core_overflow() {
        // 25 digits do not fit u64
        assert!(matches!(
            SemanticVersion::parse("1111111111111111111111111.0.0"),
            Err(SemverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_matches_component_construction() {
        let parsed = SemanticVersion::parse("1.2.3-beta.1+build.234").unwrap();
        let built = SemanticVersion::new(1, 2, 3)
            .with_pre_release(PreReleaseIdentifier::from_parts(["beta", "1"]).unwrap())
            .with_metadata(VersionMetadata::from_parts(["build", "234"]).unwrap());
        assert_eq!(parsed, built);
        assert_eq!(parsed.metadata(), built.metadata());
    }

    #[test]
    fn test_display_omits_metadata() {
        let v = SemanticVersion::parse("1.2.3-beta.1+build.234").unwrap();
        assert_eq!(v.to_string(), "1.2.3-beta.1");

        let v = SemanticVersion::parse("1.2.3+build.234").unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(SemanticVersion::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_equality_core_and_pre_release() {
        assert_eq!(SemanticVersion::new(1, 2, 3), SemanticVersion::new(1, 2, 3));
        assert_ne!(SemanticVersion::new(1, 2, 3), SemanticVersion::new(2, 2, 3));
        assert_ne!(SemanticVersion::new(1, 2, 3), SemanticVersion::new(1, 1, 3));
        assert_ne!(SemanticVersion::new(1, 2, 3), SemanticVersion::new(1, 2, 4));

        let released = SemanticVersion::new(1, 2, 3);
        let pre = SemanticVersion::parse("1.2.3-some").unwrap();
        assert_ne!(released, pre);
        assert_ne!(pre, SemanticVersion::parse("1.2.3-other").unwrap());
        assert_eq!(pre, SemanticVersion::parse("1.2.3-some").unwrap());
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let bare = SemanticVersion::parse("1.2.3").unwrap();
        let annotated = SemanticVersion::parse("1.2.3+build.234").unwrap();
        assert_eq!(bare, annotated);
    }

    #[test]
    fn test_compare_core_triplet() {
        let cases = [
            ("1.10.10", "2.0.1", Ordering::Less),
            ("2.2.3", "1.10.10", Ordering::Greater),
            ("1.1.10", "1.2.1", Ordering::Less),
            ("1.2.3", "1.1.10", Ordering::Greater),
            ("1.2.3", "1.2.3", Ordering::Equal),
        ];
        for (a, b, expected) in cases {
            let a = SemanticVersion::parse(a).unwrap();
            let b = SemanticVersion::parse(b).unwrap();
            assert_eq!(a.cmp(&b), expected, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_compare_release_beats_pre_release() {
        let release = SemanticVersion::parse("1.1.1").unwrap();
        let pre = SemanticVersion::parse("1.1.1-alpha").unwrap();
        assert!(release > pre);
        assert!(pre < release);
    }

    #[test]
    fn test_compare_pre_release_pairs() {
        let cases = [
            ("1.2.3-beta", "1.2.3-beta", Ordering::Equal),
            ("1.1.1-beta", "1.1.2-alpha", Ordering::Less),
            ("1.1.1-beta", "1.1.1-alpha", Ordering::Greater),
            ("1.1.1-beta", "1.1.1-1", Ordering::Greater),
            ("1.1.1-beta", "1.1.1-beta.1", Ordering::Less),
            ("1.1.1-beta.2", "1.1.1-beta.1", Ordering::Greater),
            ("1.1.1-beta.2", "1.1.1-beta.10", Ordering::Less),
            ("1.1.1-beta.2", "1.1.1-beta.2.z", Ordering::Less),
            ("1.1.1-beta.2", "1.1.1-beta.2.1", Ordering::Less),
            ("1.1.1-beta", "1.1.1-alpha.2.1", Ordering::Greater),
            ("1.1.1-beta.2.1", "1.1.1-beta.2.2", Ordering::Less),
            ("1.1.1-beta.2.a", "1.1.1-beta.2.2", Ordering::Greater),
        ];
        for (a, b, expected) in cases {
            let a = SemanticVersion::parse(a).unwrap();
            let b = SemanticVersion::parse(b).unwrap();
            assert_eq!(a.cmp(&b), expected, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_compare_ignores_metadata() {
        let a = SemanticVersion::parse("1.0.0+build.1").unwrap();
        let b = SemanticVersion::parse("1.0.0+build.2").unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(SemanticVersion::parse("1.2.3+build.1").unwrap());
        // differs only in metadata, so it is the same value
        assert!(set.contains(&SemanticVersion::parse("1.2.3+build.2").unwrap()));
        assert!(!set.contains(&SemanticVersion::parse("1.2.3-rc.1").unwrap()));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serialize_full_form() {
            let v = SemanticVersion::parse("1.2.3-beta.1+build.234").unwrap();
            assert_eq!(
                serde_json::to_string(&v).unwrap(),
                "\"1.2.3-beta.1+build.234\""
            );
        }

        #[test]
        fn test_round_trip() {
            let v = SemanticVersion::parse("1.2.3-beta.1+build.234").unwrap();
            let json = serde_json::to_string(&v).unwrap();
            let back: SemanticVersion = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
            assert_eq!(v.metadata(), back.metadata());
        }

        #[test]
        fn test_deserialize_invalid() {
            assert!(serde_json::from_str::<SemanticVersion>("\"1.2\"").is_err());
        }
    }
}
