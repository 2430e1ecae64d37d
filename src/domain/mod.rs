//! Core domain models for rpm-packaging-status
//!
//! This module contains the fundamental types used throughout the application:
//! - PEP 440 versions with a zero sentinel for "not available"
//! - RPM filename decomposition
//! - Joined per-project version records
//! - Packaging status classification

mod record;
mod rpm;
mod status;
mod version;

pub use record::{ProjectVersionRecord, UpperConstraint};
pub use rpm::RpmFilename;
pub use status::PackagingStatus;
pub use version::Version;
