//! Update availability check between a running version and a remote one

use crate::{Comparator, Version, VersionParser, VersionParserError};

/// Outcome of comparing the running version against a remote version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The remote version has strictly higher precedence
    Available(Version),
    /// The remote version is equal to or older than the running one
    UpToDate,
}

impl UpdateStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, UpdateStatus::Available(_))
    }
}

/// Decide whether `remote` is an update over `current`
///
/// A malformed string on either side is surfaced as an error rather than
/// being treated as older or newer; the caller decides what to do with it.
pub fn check_update(current: &str, remote: &str) -> Result<UpdateStatus, VersionParserError> {
    let current = VersionParser::parse(current)?;
    let remote = VersionParser::parse(remote)?;

    if Comparator::greater_than(&remote, &current) {
        log::debug!("Update available: {} -> {}", current, remote);
        Ok(UpdateStatus::Available(remote))
    } else {
        log::debug!("No update: running {}, remote {}", current, remote);
        Ok(UpdateStatus::UpToDate)
    }
}
