//! Parsed version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Comparator, VersionParser, VersionParserError};

/// An immutable, validated SemVer 2.0.0 version
///
/// Equality, ordering and hashing follow SemVer precedence: build metadata
/// and the raw text are ignored, so `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    major: String,
    minor: String,
    patch: String,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl Version {
    pub(crate) fn from_parts(
        raw: String,
        major: String,
        minor: String,
        patch: String,
        pre_release: Vec<String>,
        build_metadata: Vec<String>,
    ) -> Self {
        Self {
            raw,
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionParserError> {
        VersionParser::parse(input)
    }

    /// The original input, preserved verbatim
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Major version as an integer, `None` if it does not fit in a u64
    pub fn major(&self) -> Option<u64> {
        self.major.parse().ok()
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor.parse().ok()
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch.parse().ok()
    }

    /// Major version digits as written, without width limit
    pub fn major_digits(&self) -> &str {
        &self.major
    }

    pub fn minor_digits(&self) -> &str {
        &self.minor
    }

    pub fn patch_digits(&self) -> &str {
        &self.patch
    }

    /// Pre-release identifiers in order, empty if there is no pre-release
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers in order, empty if there is no build metadata
    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq: build metadata and raw text are left out.
        // Core digits carry no leading zeros, so equal values hash equally.
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}
