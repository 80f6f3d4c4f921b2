//! Version precedence comparison

use std::cmp::Ordering;

use crate::{is_numeric_identifier, Operator, Version, VersionParser, VersionParserError};

/// Comparator implementing SemVer 2.0.0 precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 and version2 have equal precedence
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Equal
    }

    /// Evaluate `version1 <operator> version2`
    pub fn satisfies_operator(version1: &Version, operator: Operator, version2: &Version) -> bool {
        match operator {
            Operator::Equal => Self::equal_to(version1, version2),
            Operator::NotEqual => Self::not_equal_to(version1, version2),
            Operator::LessThan => Self::less_than(version1, version2),
            Operator::LessThanOrEqual => Self::less_than_or_equal_to(version1, version2),
            Operator::GreaterThan => Self::greater_than(version1, version2),
            Operator::GreaterThanOrEqual => Self::greater_than_or_equal_to(version1, version2),
        }
    }

    /// Parse two version strings and compare them
    pub fn compare_str(version1: &str, version2: &str) -> Result<Ordering, VersionParserError> {
        let v1 = VersionParser::parse(version1)?;
        let v2 = VersionParser::parse(version2)?;
        Ok(Self::compare(&v1, &v2))
    }

    /// Compare two versions by precedence
    ///
    /// Build metadata never takes part in the comparison.
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        Self::compare_numeric(version1.major_digits(), version2.major_digits())
            .then_with(|| Self::compare_numeric(version1.minor_digits(), version2.minor_digits()))
            .then_with(|| Self::compare_numeric(version1.patch_digits(), version2.patch_digits()))
            .then_with(|| Self::compare_pre_release(version1.pre_release(), version2.pre_release()))
    }

    /// Compare digit strings without leading zeros as unbounded integers
    fn compare_numeric(digits1: &str, digits2: &str) -> Ordering {
        // No leading zeros, so a longer digit string is always the larger number
        digits1.len().cmp(&digits2.len()).then_with(|| digits1.cmp(digits2))
    }

    fn compare_pre_release(pre1: &[String], pre2: &[String]) -> Ordering {
        match (pre1.is_empty(), pre2.is_empty()) {
            (true, true) => Ordering::Equal,
            // A release outranks any pre-release of the same core
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for (id1, id2) in pre1.iter().zip(pre2) {
                    let ord = Self::compare_identifier(id1, id2);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                pre1.len().cmp(&pre2.len())
            }
        }
    }

    fn compare_identifier(id1: &str, id2: &str) -> Ordering {
        match (is_numeric_identifier(id1), is_numeric_identifier(id2)) {
            (true, true) => Self::compare_numeric(id1, id2),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => id1.cmp(id2),
        }
    }
}
