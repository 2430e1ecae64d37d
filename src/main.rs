//! rpm-packaging-status - Compare rpm-packaging with OpenStack releases
//!
//! Reads:
//! - openstack/releases deliverables for a release cycle
//! - openstack/rpm-packaging spec templates
//! - openstack/requirements upper-constraints.txt
//! - optionally a build service published xml

use clap::Parser;
use rpm_packaging_status::cli::CliArgs;
use rpm_packaging_status::config::Config;
use rpm_packaging_status::logging;
use rpm_packaging_status::output::{create_formatter, OutputConfig, Report};
use rpm_packaging_status::progress::Progress;
use rpm_packaging_status::reconciler::Reconciler;
use rpm_packaging_status::source::{
    ObsManifest, ReleaseReader, SpecFileReader, UpperConstraints, UPPER_CONSTRAINTS_FILE,
};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.log_level());

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let distro = args.distro(&config);

    let constraints =
        UpperConstraints::read(&args.requirements_git_dir.join(UPPER_CONSTRAINTS_FILE))?;

    let obs = match &args.obs_published_xml {
        Some(path) => ObsManifest::load(path, distro)?,
        None => None,
    };

    let reconciler = Reconciler::new(
        ReleaseReader::new(&args.releases_git_dir, &args.release),
        SpecFileReader::new(&args.rpm_packaging_git_dir),
        constraints,
        args.name_mapping(&config),
    )
    .with_obs(obs)
    .with_filter(args.project_filter());

    let mut progress = Progress::new(!args.quiet && io::stderr().is_terminal());
    let result = reconciler.run(&mut progress)?;

    let mut stdout = io::stdout().lock();
    for diagnostic in &result.diagnostics {
        writeln!(stdout, "{}", diagnostic)?;
    }

    let report = Report::new(&args.release, &result.records, args.include_obs());
    let color = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal();
    let formatter = create_formatter(OutputConfig::new(args.format, color));
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
