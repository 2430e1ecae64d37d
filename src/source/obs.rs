//! Build service published manifest reader
//!
//! The manifest is the directory listing of a published OBS repository:
//!
//! ```xml
//! <directory name="noarch">
//!   <entry name="python-oslo.config-3.9.0-1.1.noarch.rpm"/>
//!   <entry name="_buildenv"/>
//! </directory>
//! ```

use crate::domain::{RpmFilename, Version};
use crate::error::ObsError;
use crate::source::Distro;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Published binary packages of a build service repository
#[derive(Debug, Clone)]
pub struct ObsManifest {
    /// `name` attribute of each child of the root element
    entries: Vec<String>,
    /// Naming rules used to find a project's package
    distro: Distro,
}

impl ObsManifest {
    /// Load a manifest. Returns None when the file does not exist.
    pub fn load(path: &Path, distro: Distro) -> Result<Option<Self>, ObsError> {
        if !path.exists() {
            debug!(path = %path.display(), "published xml not found, skipping");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| ObsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path, distro).map(Some)
    }

    /// Parse manifest XML; `path` is used for error messages
    pub fn parse(xml: &str, path: &Path, distro: Distro) -> Result<Self, ObsError> {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut entries = Vec::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| ObsError::xml_parse_error(path, e.to_string()))?;
            match event {
                Event::Start(e) => {
                    if depth == 1 {
                        entries.push(entry_name(&e, path)?);
                    }
                    seen_root = true;
                    depth += 1;
                }
                Event::Empty(e) => {
                    if depth == 1 {
                        entries.push(entry_name(&e, path)?);
                    }
                    seen_root = true;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(ObsError::xml_parse_error(path, "no root element"));
        }

        debug!(entries = entries.len(), "parsed published xml");
        Ok(Self { entries, distro })
    }

    /// Binary RPM file names (no build artifacts, no source RPMs)
    pub fn binary_rpms(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|n| !n.starts_with('_') && n.ends_with(".rpm") && !n.ends_with(".src.rpm"))
    }

    /// Published version of a project's package, zero if not published
    pub fn published_version(&self, project: &str) -> Version {
        let package = self.distro.module_to_package(project);
        self.binary_rpms()
            .map(RpmFilename::split)
            .find(|rpm| rpm.name == package)
            .map(|rpm| Version::parse(&rpm.version))
            .unwrap_or_else(Version::zero)
    }
}

fn entry_name(element: &BytesStart<'_>, path: &Path) -> Result<String, ObsError> {
    let missing = || ObsError::MissingName {
        path: PathBuf::from(path),
        element: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
    };

    let attr = element
        .try_get_attribute("name")
        .map_err(|e| ObsError::xml_parse_error(path, e.to_string()))?
        .ok_or_else(missing)?;
    let value = attr
        .unescape_value()
        .map_err(|e| ObsError::xml_parse_error(path, e.to_string()))?;
    Ok(value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PUBLISHED: &str = r#"<directory name="noarch">
  <entry name="_buildenv"/>
  <entry name="_statistics"/>
  <entry name="python-oslo.config-3.9.0-1.1.noarch.rpm"/>
  <entry name="python-oslo.config-3.9.0-1.1.src.rpm"/>
  <entry name="openstack-nova-13.0.0-2.1.noarch.rpm"/>
  <entry name="python-oslo.log-3.3.0-1.1.noarch.rpm"/>
  <entry name="rpmlint.log"/>
</directory>"#;

    fn manifest() -> ObsManifest {
        ObsManifest::parse(PUBLISHED, Path::new("published.xml"), Distro::Suse).unwrap()
    }

    #[test]
    fn test_binary_rpms_filter() {
        let m = manifest();
        let rpms: Vec<_> = m.binary_rpms().collect();
        assert_eq!(
            rpms,
            vec![
                "python-oslo.config-3.9.0-1.1.noarch.rpm",
                "openstack-nova-13.0.0-2.1.noarch.rpm",
                "python-oslo.log-3.3.0-1.1.noarch.rpm",
            ]
        );
    }

    #[test]
    fn test_published_version_library() {
        assert_eq!(
            manifest().published_version("oslo.config"),
            Version::parse("3.9.0")
        );
    }

    #[test]
    fn test_published_version_service() {
        assert_eq!(manifest().published_version("nova"), Version::parse("13.0.0"));
    }

    #[test]
    fn test_published_version_not_found() {
        assert!(manifest().published_version("cinder").is_zero());
    }

    #[test]
    fn test_nested_elements_ignored() {
        let xml = r#"<directory><entry name="python-foo-1.0-1.noarch.rpm"><size name="x"/></entry></directory>"#;
        let m = ObsManifest::parse(xml, Path::new("p.xml"), Distro::Suse).unwrap();
        assert_eq!(m.binary_rpms().count(), 1);
        assert_eq!(m.published_version("foo"), Version::parse("1.0"));
    }

    #[test]
    fn test_entry_without_name() {
        let xml = r#"<directory><entry size="3"/></directory>"#;
        let err = ObsManifest::parse(xml, Path::new("p.xml"), Distro::Suse).unwrap_err();
        assert!(matches!(err, ObsError::MissingName { ref element, .. } if element == "entry"));
    }

    #[test]
    fn test_malformed_xml() {
        let xml = r#"<directory><entry name="a"></directory>"#;
        assert!(ObsManifest::parse(xml, Path::new("p.xml"), Distro::Suse).is_err());
    }

    #[test]
    fn test_empty_document() {
        let err = ObsManifest::parse("", Path::new("p.xml"), Distro::Suse).unwrap_err();
        assert!(matches!(err, ObsError::XmlParseError { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.xml");
        assert!(ObsManifest::load(&path, Distro::Suse).unwrap().is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("published.xml");
        fs::write(&path, PUBLISHED).unwrap();
        let m = ObsManifest::load(&path, Distro::Suse).unwrap().unwrap();
        assert_eq!(m.binary_rpms().count(), 3);
    }
}
