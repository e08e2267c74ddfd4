//! Shared parsing primitive for dotted version suffixes.
//!
//! Both the pre-release identifier and the build metadata of a semantic
//! version use the same grammar: one or more alphanumeric segments joined
//! by dots (`segment ("." segment)*`, `segment = [0-9A-Za-z]+`).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SemverError};

// ASCII classes spelled out on purpose: `\d`/`\w` are Unicode-aware in the
// regex crate and would admit non-ASCII digits.
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*$").expect("static regex"));

static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z]+$").expect("static regex"));

/// Parse a dotted suffix string into its ordered segments.
///
/// Rejects empty input, whitespace, empty segments (leading, trailing or
/// consecutive dots) and any character outside `[0-9A-Za-z]`. A bare single
/// segment is valid and yields a one-element list.
pub(crate) fn parse_suffix(input: &str) -> Result<Vec<String>> {
    if !SUFFIX_RE.is_match(input) {
        return Err(SemverError::format(format!(
            "suffix '{}' does not match requirements - expected dot-separated alphanumeric segments",
            input
        )));
    }
    Ok(input.split('.').map(str::to_string).collect())
}

/// Check a single segment against the grammar (no dots allowed).
pub(crate) fn is_valid_segment(part: &str) -> bool {
    SEGMENT_RE.is_match(part)
}
