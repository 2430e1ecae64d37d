//! Packaging spec reader (`<rpm-packaging>/openstack/<pkg>/<pkg>.spec.j2`)

use crate::domain::Version;
use crate::error::SpecFileError;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static VERSION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Version:\s*(?P<version>.*)\s*$").unwrap());

/// Outcome of looking up the version in a spec template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecVersion {
    /// First `Version:` line of the template
    Found(Version),
    /// The template exists but has no `Version:` line
    NoVersionLine(PathBuf),
    /// No template for this package
    NotPackaged,
}

impl SpecVersion {
    /// Version to compare with, zero unless found
    pub fn version(&self) -> Version {
        match self {
            SpecVersion::Found(v) => v.clone(),
            SpecVersion::NoVersionLine(_) | SpecVersion::NotPackaged => Version::zero(),
        }
    }

    /// Diagnostic line to report, if any
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            SpecVersion::NoVersionLine(path) => {
                Some(format!("ERROR: no version in {} found", path.display()))
            }
            _ => None,
        }
    }
}

/// Reads spec templates from an rpm-packaging checkout
pub struct SpecFileReader {
    root: PathBuf,
}

impl SpecFileReader {
    pub fn new(packaging_dir: &Path) -> Self {
        Self {
            root: packaging_dir.to_path_buf(),
        }
    }

    /// Path of the template for `package`
    pub fn spec_path(&self, package: &str) -> PathBuf {
        self.root
            .join("openstack")
            .join(package)
            .join(format!("{}.spec.j2", package))
    }

    /// Look up the packaged version of `package`
    pub fn read_version(&self, package: &str) -> Result<SpecVersion, SpecFileError> {
        let path = self.spec_path(package);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SpecVersion::NotPackaged),
            Err(e) => return Err(SpecFileError::ReadError { path, source: e }),
        };

        Ok(match find_version_line(&content) {
            Some(version) => SpecVersion::Found(Version::parse(version)),
            None => SpecVersion::NoVersionLine(path),
        })
    }
}

/// Value of the first `Version:` line
pub fn find_version_line(content: &str) -> Option<&str> {
    content
        .lines()
        .find_map(|line| VERSION_LINE_RE.captures(line))
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str().trim_end())
}
