//! Per-project joined version facts

use super::{PackagingStatus, Version};
use std::fmt;

/// Upper constraint entry for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpperConstraint {
    /// Pinned version, kept as written in upper-constraints.txt
    Pinned(String),
    /// Project has no entry in upper-constraints.txt
    Unconstrained,
}

impl UpperConstraint {
    /// Parsed version of the pin, None when unconstrained
    pub fn version(&self) -> Option<Version> {
        match self {
            UpperConstraint::Pinned(raw) => Some(Version::parse(raw)),
            UpperConstraint::Unconstrained => None,
        }
    }

    /// Returns true if `version` is above the pinned version
    pub fn is_exceeded_by(&self, version: &Version) -> bool {
        self.version().is_some_and(|pin| *version > pin)
    }
}

impl fmt::Display for UpperConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperConstraint::Pinned(raw) => write!(f, "{}", raw),
            UpperConstraint::Unconstrained => write!(f, "-"),
        }
    }
}

/// Version facts for one project, keyed by its release registry name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersionRecord {
    /// Project name as found in the release registry
    pub name: String,
    /// Highest version listed in the release registry
    pub release_version: Version,
    /// Entry from upper-constraints.txt
    pub upper_constraint: UpperConstraint,
    /// Version declared by the packaging spec, zero if not packaged
    pub packaging_version: Version,
    /// Version published by the build service, zero if unknown
    pub obs_published_version: Version,
}

impl ProjectVersionRecord {
    /// Creates a record with only the release version known
    pub fn new(name: impl Into<String>, release_version: Version) -> Self {
        Self {
            name: name.into(),
            release_version,
            upper_constraint: UpperConstraint::Unconstrained,
            packaging_version: Version::zero(),
            obs_published_version: Version::zero(),
        }
    }

    /// Sets the upper constraint
    pub fn with_upper_constraint(mut self, upper_constraint: UpperConstraint) -> Self {
        self.upper_constraint = upper_constraint;
        self
    }

    /// Sets the packaging version
    pub fn with_packaging_version(mut self, version: Version) -> Self {
        self.packaging_version = version;
        self
    }

    /// Sets the build service version
    pub fn with_obs_published_version(mut self, version: Version) -> Self {
        self.obs_published_version = version;
        self
    }

    /// Packaging status of this project
    pub fn status(&self) -> PackagingStatus {
        PackagingStatus::classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults_to_zero() {
        let record = ProjectVersionRecord::new("nova", Version::parse("13.0.0"));
        assert!(record.packaging_version.is_zero());
        assert!(record.obs_published_version.is_zero());
        assert_eq!(record.upper_constraint, UpperConstraint::Unconstrained);
    }

    #[test]
    fn test_upper_constraint_display() {
        assert_eq!(UpperConstraint::Unconstrained.to_string(), "-");
        assert_eq!(UpperConstraint::Pinned("1.2.0".into()).to_string(), "1.2.0");
    }

    #[test]
    fn test_upper_constraint_exceeded() {
        let pin = UpperConstraint::Pinned("1.2.0".into());
        assert!(pin.is_exceeded_by(&Version::parse("1.3.0")));
        assert!(!pin.is_exceeded_by(&Version::parse("1.2.0")));
        assert!(!UpperConstraint::Unconstrained.is_exceeded_by(&Version::parse("99")));
    }
}
