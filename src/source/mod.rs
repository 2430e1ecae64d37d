//! Readers for the version-bearing inputs
//!
//! This module provides readers for:
//! - openstack/releases deliverables (YAML)
//! - rpm-packaging spec templates (`.spec.j2`)
//! - openstack/requirements upper-constraints.txt
//! - build service published manifests (XML, optional)

mod constraints;
mod distro;
mod obs;
mod releases;
mod spec_file;

pub use constraints::{parse_requirement, UpperConstraints, UPPER_CONSTRAINTS_FILE};
pub use distro::Distro;
pub use obs::ObsManifest;
pub use releases::{
    find_highest_release_version, parse_highest_version, DeliverableFile, ReleaseEntry,
    ReleaseReader,
};
pub use spec_file::{find_version_line, SpecFileReader, SpecVersion};
