//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReleaseError: Issues with the release registry deliverables
//! - ConstraintsError: Issues with upper-constraints.txt
//! - SpecFileError: Issues reading packaging spec templates
//! - ObsError: Issues with the build service published manifest
//! - ConfigError: Issues with CLI configuration and the config file

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Release registry related errors
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// Upper constraints related errors
    #[error(transparent)]
    Constraints(#[from] ConstraintsError),

    /// Packaging spec related errors
    #[error(transparent)]
    SpecFile(#[from] SpecFileError),

    /// Build service manifest related errors
    #[error(transparent)]
    Obs(#[from] ObsError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the release registry (`deliverables/<release>/*.yaml`)
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Deliverables directory for the release does not exist
    #[error("deliverables directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to list the deliverables directory
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a deliverable file
    #[error("failed to read deliverable {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },

    /// The deliverable has no `releases` key
    #[error("no 'releases' key in {path}")]
    MissingReleases { path: PathBuf },

    /// The `releases` list is empty
    #[error("empty 'releases' list in {path}")]
    NoReleases { path: PathBuf },
}

/// Errors related to the upper constraints file
#[derive(Error, Debug)]
pub enum ConstraintsError {
    /// Failed to read the constraints file
    #[error("failed to read constraints file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A requirement line could not be parsed
    #[error("invalid requirement '{content}' at {path}:{line}: {message}")]
    InvalidRequirement {
        path: PathBuf,
        line: usize,
        content: String,
        message: String,
    },
}

/// Errors related to packaging spec templates
#[derive(Error, Debug)]
pub enum SpecFileError {
    /// The spec file exists but could not be read
    #[error("failed to read spec file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the build service published manifest
#[derive(Error, Debug)]
pub enum ObsError {
    /// Failed to read the manifest
    #[error("failed to read published xml {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed XML
    #[error("failed to parse XML in {path}: {message}")]
    XmlParseError { path: PathBuf, message: String },

    /// A child of the root element has no `name` attribute
    #[error("<{element}> entry without 'name' attribute in {path}")]
    MissingName { path: PathBuf, element: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Invalid `from=to` name mapping
    #[error("invalid name mapping '{value}': expected format like 'keystoneauth=keystoneauth1'")]
    InvalidMapping { value: String },
}

impl ReleaseError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        ReleaseError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReleaseError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReleaseError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ConstraintsError {
    /// Creates a new InvalidRequirement error
    pub fn invalid_requirement(
        path: impl Into<PathBuf>,
        line: usize,
        content: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ConstraintsError::InvalidRequirement {
            path: path.into(),
            line,
            content: content.into(),
            message: message.into(),
        }
    }
}

impl ObsError {
    /// Creates a new XmlParseError
    pub fn xml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ObsError::XmlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
