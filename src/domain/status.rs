//! Packaging status classification

use super::ProjectVersionRecord;
use std::fmt;
use tracing::debug;

/// Packaging status of a project relative to its upstream release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackagingStatus {
    /// No spec file, or no version in it
    NeedsPackaging,
    /// Packaged version is older than the release
    NeedsUpgrade,
    /// Packaged version matches the release
    Perfect,
    /// Packaged version is newer than the release
    NeedsDowngrade,
    /// Release is above its upper constraint. Never returned by
    /// [`PackagingStatus::classify`], see the note there.
    NeedsDowngradeUpperConstraint,
    /// No ordering could be established
    Unknown,
}

impl PackagingStatus {
    /// Classify a record.
    ///
    /// When packaging and release versions are equal, the release is also
    /// checked against the upper constraint, but the result is always
    /// `Perfect`: the upper-constraint outcome is only logged. This keeps
    /// the report identical to the historical one until it is decided
    /// whether that case should be surfaced.
    pub fn classify(record: &ProjectVersionRecord) -> Self {
        let packaging = &record.packaging_version;
        let release = &record.release_version;

        if packaging.is_zero() {
            PackagingStatus::NeedsPackaging
        } else if packaging < release {
            PackagingStatus::NeedsUpgrade
        } else if packaging == release {
            if record.upper_constraint.is_exceeded_by(release) {
                debug!(
                    project = %record.name,
                    release = %release,
                    upper_constraint = %record.upper_constraint,
                    "release above upper constraint, reporting as perfect"
                );
            }
            PackagingStatus::Perfect
        } else if packaging > release {
            PackagingStatus::NeedsDowngrade
        } else {
            PackagingStatus::Unknown
        }
    }

    /// The comment shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            PackagingStatus::NeedsPackaging => "needs packaging",
            PackagingStatus::NeedsUpgrade => "needs upgrade",
            PackagingStatus::Perfect => "perfect",
            PackagingStatus::NeedsDowngrade => "needs downgrade",
            PackagingStatus::NeedsDowngradeUpperConstraint => "needs downgrade (u-c)",
            PackagingStatus::Unknown => "",
        }
    }

    /// HTML background color for the comment cell
    pub fn html_color(&self) -> Option<&'static str> {
        match self {
            PackagingStatus::NeedsPackaging => Some("yellow"),
            PackagingStatus::NeedsUpgrade => Some("LightYellow"),
            PackagingStatus::NeedsDowngrade | PackagingStatus::NeedsDowngradeUpperConstraint => {
                Some("red")
            }
            PackagingStatus::Perfect => Some("green"),
            PackagingStatus::Unknown => None,
        }
    }
}

impl fmt::Display for PackagingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UpperConstraint, Version};
    use rstest::rstest;

    fn record(packaging: &str, release: &str) -> ProjectVersionRecord {
        ProjectVersionRecord::new("foo", Version::parse(release))
            .with_packaging_version(Version::parse(packaging))
    }

    #[rstest]
    #[case("0", "2.0", PackagingStatus::NeedsPackaging)]
    #[case("0", "0.1", PackagingStatus::NeedsPackaging)]
    #[case("1.0", "2.0", PackagingStatus::NeedsUpgrade)]
    #[case("2.0.0rc1", "2.0.0", PackagingStatus::NeedsUpgrade)]
    #[case("2.0", "2.0", PackagingStatus::Perfect)]
    #[case("2.0", "2.0.0", PackagingStatus::Perfect)]
    #[case("3.0", "2.0", PackagingStatus::NeedsDowngrade)]
    #[case("1.10.0", "1.9.0", PackagingStatus::NeedsDowngrade)]
    fn test_classify(
        #[case] packaging: &str,
        #[case] release: &str,
        #[case] expected: PackagingStatus,
    ) {
        assert_eq!(record(packaging, release).status(), expected);
    }

    #[test]
    fn test_release_above_upper_constraint_still_perfect() {
        let r = record("2.0", "2.0").with_upper_constraint(UpperConstraint::Pinned("1.0".into()));
        assert_eq!(r.status(), PackagingStatus::Perfect);
    }

    #[test]
    fn test_obs_version_does_not_affect_status() {
        let r = record("1.0", "2.0").with_obs_published_version(Version::parse("5.0"));
        assert_eq!(r.status(), PackagingStatus::NeedsUpgrade);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PackagingStatus::NeedsPackaging.label(), "needs packaging");
        assert_eq!(PackagingStatus::NeedsUpgrade.to_string(), "needs upgrade");
        assert_eq!(PackagingStatus::Unknown.label(), "");
    }

    #[test]
    fn test_html_color() {
        assert_eq!(PackagingStatus::Perfect.html_color(), Some("green"));
        assert_eq!(PackagingStatus::NeedsUpgrade.html_color(), Some("LightYellow"));
        assert_eq!(PackagingStatus::NeedsDowngrade.html_color(), Some("red"));
        assert_eq!(PackagingStatus::Unknown.html_color(), None);
    }
}
