//! CLI argument parsing module for rpm-packaging-status

use crate::config::Config;
use crate::error::ConfigError;
use crate::output::OutputFormat;
use crate::reconciler::{NameMapping, ProjectFilter};
use crate::source::Distro;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a `project=package` name override
fn parse_mapping(s: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidMapping {
        value: s.to_string(),
    };
    let (project, package) = s.split_once('=').ok_or_else(invalid)?;
    let (project, package) = (project.trim(), package.trim());
    if project.is_empty() || package.is_empty() {
        return Err(invalid());
    }
    Ok((project.to_string(), package.to_string()))
}

/// Compare rpm-packaging with OpenStack releases
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rpm-packaging-status",
    version,
    about = "Compare rpm-packaging with OpenStack releases"
)]
pub struct CliArgs {
    /// Base directory of the openstack/releases git repo
    #[arg(value_name = "releases-git-dir")]
    pub releases_git_dir: PathBuf,

    /// Base directory of the openstack/rpm-packaging git repo
    #[arg(value_name = "rpm-packaging-git-dir")]
    pub rpm_packaging_git_dir: PathBuf,

    /// Base directory of the openstack/requirements git repo
    #[arg(value_name = "requirements-git-dir")]
    pub requirements_git_dir: PathBuf,

    /// Name of the release, i.e. "mitaka"
    #[arg(value_name = "release")]
    pub release: String,

    /// Path to a published xml file from the openbuildservice
    #[arg(long, value_name = "path")]
    pub obs_published_xml: Option<PathBuf>,

    /// If non-empty, only the given projects will be checked
    #[arg(long, num_args = 0.., value_name = "project-name", action = ArgAction::Append)]
    pub include_projects: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Distribution naming rules for the build service lookup [default: suse]
    #[arg(long, value_enum)]
    pub distro: Option<Distro>,

    /// Extra project name override, e.g. keystoneauth=keystoneauth1 (repeatable)
    #[arg(long = "map", value_name = "project=package", value_parser = parse_mapping, action = ArgAction::Append)]
    pub mappings: Vec<(String, String)>,

    /// TOML config file with distro and name overrides
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors and hide progress
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Default log filter for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Distro from the command line, then the config file, then the default
    pub fn distro(&self, config: &Config) -> Distro {
        self.distro.or(config.distro).unwrap_or_default()
    }

    /// Name overrides: built-in, then config file, then `--map`
    pub fn name_mapping(&self, config: &Config) -> NameMapping {
        let mut mapping = config.name_mapping();
        for (project, package) in &self.mappings {
            mapping.insert(project, package);
        }
        mapping
    }

    /// Project filter from `--include-projects`
    pub fn project_filter(&self) -> ProjectFilter {
        ProjectFilter::new(self.include_projects.clone())
    }

    /// Whether the report has an obs column
    pub fn include_obs(&self) -> bool {
        self.obs_published_xml.is_some()
    }
}
