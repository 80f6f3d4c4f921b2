//! Version parsing and validation module

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{input}\"")]
    InvalidVersionFormat { input: String },
}

impl VersionParserError {
    fn invalid(input: &str) -> Self {
        VersionParserError::InvalidVersionFormat {
            input: input.to_string(),
        }
    }
}

lazy_static! {
    /// A numeric identifier: "0" or a digit string without leading zero
    static ref NUMERIC_ID: &'static str = r"0|[1-9][0-9]*";

    /// A pre-release identifier: numeric without leading zero, or any
    /// alphanumeric/hyphen string containing at least one non-digit
    static ref PRE_RELEASE_ID: String = format!(r"(?:{}|[0-9]*[A-Za-z-][0-9A-Za-z-]*)", *NUMERIC_ID);

    /// A build identifier: alphanumeric/hyphen, leading zeros allowed
    static ref BUILD_ID: &'static str = r"[0-9A-Za-z-]+";

    // Classes are ASCII-only on purpose: `\d` would accept Unicode digits.
    // `\A` and `\z` anchor the whole input, so a trailing newline is rejected.
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"\A({num})\.({num})\.({num})(?:-({pre}(?:\.{pre})*))?(?:\+({build}(?:\.{build})*))?\z",
        num = *NUMERIC_ID,
        pre = *PRE_RELEASE_ID,
        build = *BUILD_ID,
    )).unwrap();
}

/// Check whether an identifier consists solely of ASCII digits
pub fn is_numeric_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Strict SemVer 2.0.0 parser
///
/// The parser accepts exactly the SemVer grammar: no `v` prefix, no
/// surrounding whitespace, no partial versions and no zero padding.
pub struct VersionParser;

impl VersionParser {
    /// Parse a version string into its decomposed form
    pub fn parse(input: &str) -> Result<Version, VersionParserError> {
        let caps = Self::match_grammar(input)?;

        let major = Self::core_digits(&caps, 1);
        let minor = Self::core_digits(&caps, 2);
        let patch = Self::core_digits(&caps, 3);

        let pre_release = Self::split_identifiers(&caps, 4);
        let build_metadata = Self::split_identifiers(&caps, 5);

        Ok(Version::from_parts(
            input.to_string(),
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        ))
    }

    /// Check whether a version string is valid without building a [`Version`]
    pub fn is_valid(input: &str) -> bool {
        Self::match_grammar(input).is_ok()
    }

    fn match_grammar(input: &str) -> Result<Captures<'_>, VersionParserError> {
        VERSION_RE.captures(input).ok_or_else(|| {
            log::trace!("Rejected version string {:?}: grammar mismatch", input);
            VersionParserError::invalid(input)
        })
    }

    /// Core fields keep their digit string so they have no width limit
    fn core_digits(caps: &Captures<'_>, group: usize) -> String {
        caps.get(group).map_or("", |m| m.as_str()).to_string()
    }

    fn split_identifiers(caps: &Captures<'_>, group: usize) -> Vec<String> {
        caps.get(group)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default()
    }
}
