//! Semantic versions (`major.minor.patch`)

use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release identifier ordered by major, then minor, then patch
///
/// The string form is `"{major}.{minor}.{patch}"` with plain decimal
/// segments. Pre-release and build metadata suffixes are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Semantic {
    // Field order drives the derived `Ord`.
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Semantic {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `"major.minor.patch"`
    ///
    /// # Example
    /// ```
    /// use version::Semantic;
    ///
    /// let v = Semantic::parse("1.22.75").unwrap();
    /// assert_eq!(v, Semantic::new(1, 22, 75));
    /// assert!(Semantic::parse("1.22").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = text.split('.');
        let (Some(major), Some(minor), Some(patch), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(malformed(text, "expected exactly 3 segments"));
        };

        Ok(Self {
            major: parse_segment(text, major)?,
            minor: parse_segment(text, minor)?,
            patch: parse_segment(text, patch)?,
        })
    }
}

/// Segments are bare ASCII digits; `u32::from_str` alone would accept a `+`.
fn parse_segment(text: &str, segment: &str) -> Result<u32> {
    if segment.is_empty() {
        return Err(malformed(text, "empty segment"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(text, "segment is not a non-negative integer"));
    }
    segment
        .parse()
        .map_err(|_| malformed(text, "segment out of range"))
}

fn malformed(text: &str, reason: &'static str) -> VersionError {
    VersionError::MalformedVersion {
        input: text.to_string(),
        reason,
    }
}

impl fmt::Display for Semantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Semantic {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Semantic {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Semantic> for String {
    fn from(value: Semantic) -> Self {
        value.to_string()
    }
}
