//! Comparable package versions
//!
//! Versions follow PEP 440 precedence:
//! - Release segments compare numerically (`1.10` > `1.9`)
//! - `dev` < pre-release (`a`, `b`, `rc`) < final release < `post`
//! - Local segments (`+suse1`) sort after the public version
//!
//! A missing or unparsable version is represented by the zero version,
//! which sorts below every real release.

use pep508_rs::pep440_rs::Version as Pep440Version;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A totally ordered package version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(Pep440Version);

impl Version {
    /// The sentinel for "no version available"
    pub fn zero() -> Self {
        Self(Pep440Version::new([0u64]))
    }

    /// Parse a version string, falling back to zero on failure
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_else(|| {
            debug!(raw, "unparsable version, using 0");
            Self::zero()
        })
    }

    /// Parse a version string, returning None if it is empty or invalid
    pub fn try_parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Pep440Version::from_str(trimmed).ok().map(Self)
    }

    /// Returns true if this is the zero version
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
