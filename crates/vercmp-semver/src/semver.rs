//! Semver facade providing high-level version operations

use crate::{Comparator, Version, VersionParser};

/// Main facade for semantic versioning operations on raw strings
pub struct Semver;

impl Semver {
    /// Check if a string is a valid SemVer version
    pub fn valid(version: &str) -> bool {
        VersionParser::is_valid(version)
    }

    /// Sort versions in ascending precedence order
    ///
    /// Invalid versions are dropped. Versions of equal precedence keep
    /// their input order.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Return the version with the highest precedence
    ///
    /// The first of several equal-precedence candidates wins.
    pub fn max(versions: &[&str]) -> Option<String> {
        let mut best: Option<Version> = None;
        for version in Self::parse_all(versions) {
            if best.as_ref().map_or(true, |b| Comparator::greater_than(&version, b)) {
                best = Some(version);
            }
        }
        best.map(|v| v.raw().to_string())
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parse_all(versions);

        parsed.sort_by(|a, b| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|v| v.raw().to_string()).collect()
    }

    fn parse_all(versions: &[&str]) -> Vec<Version> {
        versions
            .iter()
            .filter_map(|v| VersionParser::parse(v).ok())
            .collect()
    }
}
