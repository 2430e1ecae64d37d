//! Release registry reader (`<releases>/deliverables/<cycle>/*.yaml`)
//!
//! Each deliverable file is named after its project and lists the
//! releases made during the cycle:
//!
//! ```yaml
//! releases:
//!   - version: 1.0.0
//!     projects: [...]
//!   - version: 1.1.0
//! ```

use crate::domain::Version;
use crate::error::ReleaseError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deliverable file schema; unknown keys are ignored
#[derive(Debug, Deserialize)]
pub struct Deliverable {
    #[serde(default)]
    pub releases: Option<Vec<ReleaseEntry>>,
}

/// One entry of the `releases` list
#[derive(Debug, Deserialize)]
pub struct ReleaseEntry {
    pub version: RawVersion,
}

/// Release version as written in YAML. Unquoted versions such as `1.0`
/// are read by YAML as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawVersion {
    Text(String),
    Number(serde_yaml::Number),
}

impl RawVersion {
    pub fn as_version(&self) -> Version {
        match self {
            RawVersion::Text(s) => Version::parse(s),
            RawVersion::Number(n) => Version::parse(&n.to_string()),
        }
    }
}

/// A deliverable file found for the release cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverableFile {
    /// Project name (file stem)
    pub project: String,
    /// Path to the YAML file
    pub path: PathBuf,
}

/// Reads deliverables of one release cycle
pub struct ReleaseReader {
    dir: PathBuf,
}

impl ReleaseReader {
    /// Create a reader for `<releases_dir>/deliverables/<cycle>`
    pub fn new(releases_dir: &Path, cycle: &str) -> Self {
        Self {
            dir: releases_dir.join("deliverables").join(cycle),
        }
    }

    /// Directory holding the deliverable files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List deliverable files, sorted by project name
    pub fn discover(&self) -> Result<Vec<DeliverableFile>, ReleaseError> {
        if !self.dir.is_dir() {
            return Err(ReleaseError::directory_not_found(&self.dir));
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| ReleaseError::ReadDir {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReleaseError::ReadDir {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if let Some(project) = project_name(&path) {
                files.push(DeliverableFile { project, path });
            } else {
                debug!(path = %path.display(), "skipping non-yaml file");
            }
        }

        files.sort_by(|a, b| a.project.cmp(&b.project));
        Ok(files)
    }

    /// Read a deliverable and return its highest release version
    pub fn highest_version(&self, file: &DeliverableFile) -> Result<Version, ReleaseError> {
        let content =
            fs::read_to_string(&file.path).map_err(|e| ReleaseError::read_error(&file.path, e))?;
        parse_highest_version(&content, &file.path)
    }
}

/// Project name for a deliverable path, None if it is not a YAML file
fn project_name(path: &Path) -> Option<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => path.file_stem()?.to_str().map(str::to_string),
        _ => None,
    }
}

/// Parse deliverable YAML and return the highest release version
pub fn parse_highest_version(content: &str, path: &Path) -> Result<Version, ReleaseError> {
    let deliverable: Deliverable = serde_yaml::from_str(content)
        .map_err(|e| ReleaseError::yaml_parse_error(path, e.to_string()))?;

    let releases = deliverable
        .releases
        .ok_or_else(|| ReleaseError::MissingReleases {
            path: path.to_path_buf(),
        })?;

    find_highest_release_version(&releases).ok_or_else(|| ReleaseError::NoReleases {
        path: path.to_path_buf(),
    })
}

/// Highest version among release entries, by PEP 440 ordering
pub fn find_highest_release_version(releases: &[ReleaseEntry]) -> Option<Version> {
    releases.iter().map(|r| r.version.as_version()).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<Version, ReleaseError> {
        parse_highest_version(content, Path::new("nova.yaml"))
    }

    #[test]
    fn test_highest_version_not_list_order() {
        let yaml = r#"
releases:
  - version: 1.0.0
  - version: 1.2.0
  - version: 1.1.0
"#;
        assert_eq!(parse(yaml).unwrap(), Version::parse("1.2.0"));
    }

    #[test]
    fn test_highest_version_not_lexical() {
        let yaml = r#"
releases:
  - version: 1.9.0
  - version: 1.10.0
  - version: 1.10.0.0rc1
"#;
        assert_eq!(parse(yaml).unwrap(), Version::parse("1.10.0"));
    }

    #[test]
    fn test_numeric_yaml_version() {
        let yaml = "releases:\n  - version: 2.1\n  - version: '2.0'\n";
        assert_eq!(parse(yaml).unwrap(), Version::parse("2.1"));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let yaml = r#"
launchpad: nova
team: nova
releases:
  - version: 13.0.0
    projects:
      - repo: openstack/nova
        hash: 0123456789abcdef
"#;
        assert_eq!(parse(yaml).unwrap(), Version::parse("13.0.0"));
    }

    #[test]
    fn test_missing_releases_key() {
        let err = parse("team: nova\n").unwrap_err();
        assert!(matches!(err, ReleaseError::MissingReleases { .. }));
    }

    #[test]
    fn test_empty_releases() {
        let err = parse("releases: []\n").unwrap_err();
        assert!(matches!(err, ReleaseError::NoReleases { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse("releases: [\n").unwrap_err();
        assert!(matches!(err, ReleaseError::YamlParseError { .. }));
    }

    #[test]
    fn test_entry_without_version() {
        let err = parse("releases:\n  - hash: abc\n").unwrap_err();
        assert!(matches!(err, ReleaseError::YamlParseError { .. }));
    }

    #[test]
    fn test_discover_sorted_yaml_only() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("deliverables").join("mitaka");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("nova.yaml"), "releases: []").unwrap();
        fs::write(dir.join("cinder.yml"), "releases: []").unwrap();
        fs::write(dir.join("README.rst"), "docs").unwrap();

        let reader = ReleaseReader::new(temp_dir.path(), "mitaka");
        let files = reader.discover().unwrap();
        let names: Vec<_> = files.iter().map(|f| f.project.as_str()).collect();
        assert_eq!(names, vec!["cinder", "nova"]);
    }

    #[test]
    fn test_discover_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let reader = ReleaseReader::new(temp_dir.path(), "nonexistent");
        let err = reader.discover().unwrap_err();
        assert!(matches!(err, ReleaseError::DirectoryNotFound { .. }));
    }
}
