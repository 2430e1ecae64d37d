//! Upper constraints reader (`<requirements>/upper-constraints.txt`)
//!
//! Each line is a PEP 508 requirement, usually a single pin:
//! - `oslo.config===3.9.0`
//! - `pywin32===220;sys_platform=='win32'`
//!
//! Environment markers are ignored, and only the first specifier clause
//! of each requirement is kept. Clauses are ordered by version, so for a
//! range such as `foo>=1.0,<2.0` that is the lower bound.

use crate::domain::UpperConstraint;
use crate::error::ConstraintsError;
use pep508_rs::{Requirement, VersionOrUrl};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// File name of the constraints file inside the requirements checkout
pub const UPPER_CONSTRAINTS_FILE: &str = "upper-constraints.txt";

/// Pinned versions by package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpperConstraints {
    pins: BTreeMap<String, String>,
}

impl UpperConstraints {
    /// Read and parse a constraints file
    pub fn read(path: &Path) -> Result<Self, ConstraintsError> {
        let content = fs::read_to_string(path).map_err(|e| ConstraintsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Parse constraints file content; `path` is used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConstraintsError> {
        let mut pins = BTreeMap::new();

        for (idx, line) in content.lines().enumerate() {
            let requirement = line.trim();
            if requirement.is_empty() || requirement.starts_with('#') {
                continue;
            }

            if let Some((name, version)) = parse_requirement(requirement)
                .map_err(|message| {
                    ConstraintsError::invalid_requirement(path, idx + 1, line, message)
                })?
            {
                pins.insert(name, version);
            }
        }

        Ok(Self { pins })
    }

    /// Constraint for a package, `Unconstrained` if not listed
    pub fn get(&self, name: &str) -> UpperConstraint {
        self.pins
            .get(name)
            .map(|v| UpperConstraint::Pinned(v.clone()))
            .unwrap_or(UpperConstraint::Unconstrained)
    }

    /// Number of pinned packages
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Parse a requirement into its name and first specifier version.
/// Returns Ok(None) for requirements without a version specifier.
pub fn parse_requirement(requirement: &str) -> Result<Option<(String, String)>, String> {
    let parsed: Requirement =
        Requirement::from_str(requirement).map_err(|e| e.message.to_string())?;

    let Some(VersionOrUrl::VersionSpecifier(specifiers)) = parsed.version_or_url else {
        return Ok(None);
    };
    let Some(first) = specifiers.iter().next() else {
        return Ok(None);
    };

    Ok(Some((
        verbatim_name(requirement).to_string(),
        first.version().to_string(),
    )))
}

/// Package name as written; `Requirement::name` is PEP 503 normalized
fn verbatim_name(requirement: &str) -> &str {
    let requirement = requirement.trim_start();
    let end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        .unwrap_or(requirement.len());
    &requirement[..end]
}
