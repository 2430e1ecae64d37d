//! rpm-packaging-status - Compare rpm-packaging with OpenStack releases
//!
//! This library cross-references, per project:
//! - the highest release from openstack/releases deliverables
//! - the pin from openstack/requirements upper-constraints.txt
//! - the version declared by the rpm-packaging spec template
//! - optionally, the version published by the build service
//!
//! and classifies each project's packaging status.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod reconciler;
pub mod source;
