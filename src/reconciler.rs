//! Reconciler joining the per-source facts into one record per project
//!
//! Workflow: discover deliverables → filter → read release → look up
//! upper constraint → read spec template → look up published package.

use crate::domain::{ProjectVersionRecord, Version};
use crate::error::AppError;
use crate::progress::Progress;
use crate::source::{DeliverableFile, ObsManifest, ReleaseReader, SpecFileReader, UpperConstraints};
use std::collections::BTreeMap;
use tracing::debug;

/// Project name overrides for packages named differently in rpm-packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
    overrides: BTreeMap<String, String>,
}

impl NameMapping {
    /// A mapping with no overrides
    pub fn empty() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Add or replace an override
    pub fn insert(&mut self, project: impl Into<String>, package: impl Into<String>) {
        self.overrides.insert(project.into(), package.into());
    }

    /// Builder form of [`NameMapping::insert`]
    pub fn with_override(mut self, project: impl Into<String>, package: impl Into<String>) -> Self {
        self.insert(project, package);
        self
    }

    /// Package name used to look up the spec template
    pub fn package_name<'a>(&'a self, project: &'a str) -> &'a str {
        self.overrides
            .get(project)
            .map(String::as_str)
            .unwrap_or(project)
    }
}

impl Default for NameMapping {
    fn default() -> Self {
        Self::empty().with_override("keystoneauth", "keystoneauth1")
    }
}

/// Project inclusion filter (`--include-projects`)
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    include: Vec<String>,
}

impl ProjectFilter {
    /// An empty list includes every project
    pub fn new(include: Vec<String>) -> Self {
        Self { include }
    }

    pub fn allows(&self, project: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| p == project)
    }
}

/// Result of a reconciliation run
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// One record per project, sorted by name
    pub records: Vec<ProjectVersionRecord>,
    /// Non-fatal problems found while reading spec templates
    pub diagnostics: Vec<String>,
}

/// Joins release, constraint, packaging and build service versions
pub struct Reconciler {
    releases: ReleaseReader,
    specs: SpecFileReader,
    constraints: UpperConstraints,
    mapping: NameMapping,
    obs: Option<ObsManifest>,
    filter: ProjectFilter,
}

impl Reconciler {
    pub fn new(
        releases: ReleaseReader,
        specs: SpecFileReader,
        constraints: UpperConstraints,
        mapping: NameMapping,
    ) -> Self {
        Self {
            releases,
            specs,
            constraints,
            mapping,
            obs: None,
            filter: ProjectFilter::default(),
        }
    }

    /// Compare against a build service manifest
    pub fn with_obs(mut self, obs: Option<ObsManifest>) -> Self {
        self.obs = obs;
        self
    }

    /// Only reconcile projects accepted by `filter`
    pub fn with_filter(mut self, filter: ProjectFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Run over all deliverables of the release cycle
    pub fn run(&self, progress: &mut Progress) -> Result<Reconciliation, AppError> {
        let files: Vec<DeliverableFile> = self
            .releases
            .discover()?
            .into_iter()
            .filter(|f| self.filter.allows(&f.project))
            .collect();
        debug!(
            dir = %self.releases.dir().display(),
            projects = files.len(),
            "reconciling deliverables"
        );

        let mut records = BTreeMap::new();
        let mut diagnostics = Vec::new();

        progress.begin(files.len());
        for file in &files {
            progress.project(&file.project);
            let (record, diagnostic) = self.reconcile_project(file)?;
            diagnostics.extend(diagnostic);
            records.insert(record.name.clone(), record);
            progress.advance();
        }
        progress.clear();

        Ok(Reconciliation {
            records: records.into_values().collect(),
            diagnostics,
        })
    }

    /// Build the record for one deliverable
    pub fn reconcile_project(
        &self,
        file: &DeliverableFile,
    ) -> Result<(ProjectVersionRecord, Option<String>), AppError> {
        let project = file.project.as_str();
        let release_version = self.releases.highest_version(file)?;

        let package = self.mapping.package_name(project);
        let spec = self.specs.read_version(package)?;

        let obs_version = self
            .obs
            .as_ref()
            .map(|obs| obs.published_version(project))
            .unwrap_or_else(Version::zero);

        let record = ProjectVersionRecord::new(project, release_version)
            .with_upper_constraint(self.constraints.get(project))
            .with_packaging_version(spec.version())
            .with_obs_published_version(obs_version);
        debug!(
            project,
            package,
            release = %record.release_version,
            packaging = %record.packaging_version,
            "reconciled project"
        );

        Ok((record, spec.diagnostic()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let mapping = NameMapping::default();
        assert_eq!(mapping.package_name("keystoneauth"), "keystoneauth1");
        assert_eq!(mapping.package_name("nova"), "nova");
    }

    #[test]
    fn test_mapping_override_replaces() {
        let mapping = NameMapping::default().with_override("keystoneauth", "python-keystoneauth");
        assert_eq!(mapping.package_name("keystoneauth"), "python-keystoneauth");
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(NameMapping::empty().package_name("keystoneauth"), "keystoneauth");
    }

    #[test]
    fn test_filter() {
        let all = ProjectFilter::default();
        assert!(all.allows("nova"));

        let only = ProjectFilter::new(vec!["nova".to_string()]);
        assert!(only.allows("nova"));
        assert!(!only.allows("cinder"));
    }
}
