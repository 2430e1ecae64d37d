//! Optional TOML configuration file
//!
//! ```toml
//! distro = "suse"
//!
//! [name_overrides]
//! keystoneauth = "keystoneauth1"
//! ```

use crate::error::ConfigError;
use crate::reconciler::NameMapping;
use crate::source::Distro;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings read from `--config`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Distribution naming rules for the build service lookup
    pub distro: Option<Distro>,
    /// Extra project → package name overrides
    pub name_overrides: BTreeMap<String, String>,
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse config content; `path` is used for error messages
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Built-in overrides with this file's overrides layered on top
    pub fn name_mapping(&self) -> NameMapping {
        let mut mapping = NameMapping::default();
        for (project, package) in &self.name_overrides {
            mapping.insert(project, package);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(content, Path::new("status.toml"))
    }

    #[test]
    fn test_empty_config() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.name_mapping(), NameMapping::default());
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
distro = "fedora"

[name_overrides]
keystoneauth = "python-keystoneauth1"
ceilometermiddleware = "python-ceilometermiddleware"
"#,
        )
        .unwrap();
        assert_eq!(config.distro, Some(Distro::Fedora));

        let mapping = config.name_mapping();
        assert_eq!(mapping.package_name("keystoneauth"), "python-keystoneauth1");
        assert_eq!(
            mapping.package_name("ceilometermiddleware"),
            "python-ceilometermiddleware"
        );
    }

    #[test]
    fn test_unknown_distro() {
        let err = parse("distro = \"gentoo\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
    }

    #[test]
    fn test_unknown_key() {
        assert!(parse("format = \"html\"").is_err());
    }
}
