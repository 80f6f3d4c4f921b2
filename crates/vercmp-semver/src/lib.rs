//! Semantic Versioning 2.0.0 library
//!
//! This crate provides strict SemVer 2.0.0 parsing and precedence comparison.
//! Versions are parsed once into an immutable [`Version`] and then compared
//! with [`Comparator`] or the standard ordering traits.

mod comparator;
mod operator;
mod semver;
mod update;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use semver::Semver;
pub use update::{check_update, UpdateStatus};
pub use version::Version;
pub use version_parser::{is_numeric_identifier, VersionParser, VersionParserError};

/// Parse a SemVer string into a [`Version`]
pub fn parse(input: &str) -> Result<Version, VersionParserError> {
    VersionParser::parse(input)
}

/// Check whether a string is a valid SemVer string
pub fn is_valid(input: &str) -> bool {
    VersionParser::is_valid(input)
}
