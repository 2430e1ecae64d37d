//! Python module name to distribution package name translation

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// OpenStack services, packaged as `openstack-<name>` rather than as
/// Python libraries
const SERVICES: &[&str] = &[
    "aodh",
    "barbican",
    "ceilometer",
    "cinder",
    "cloudkitty",
    "congress",
    "designate",
    "ec2-api",
    "freezer",
    "glance",
    "gnocchi",
    "heat",
    "horizon",
    "ironic",
    "ironic-inspector",
    "ironic-python-agent",
    "keystone",
    "magnum",
    "manila",
    "mistral",
    "monasca",
    "murano",
    "neutron",
    "nova",
    "octavia",
    "panko",
    "rally",
    "sahara",
    "searchlight",
    "senlin",
    "swift",
    "tacker",
    "tempest",
    "trove",
    "tuskar",
    "vitrage",
    "watcher",
    "zaqar",
    "zun",
];

/// Distribution flavor whose package naming rules are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    /// openSUSE / SLES: `python-<module>` as written
    #[default]
    Suse,
    /// Fedora / RDO: `python3-<module>` with dots replaced
    Fedora,
    /// Ubuntu / Debian: `python3-<module>`, services unprefixed
    Ubuntu,
}

impl Distro {
    /// Translate a Python module / project name to the package name
    pub fn module_to_package(&self, module: &str) -> String {
        if SERVICES.contains(&module) {
            return match self {
                Distro::Suse | Distro::Fedora => format!("openstack-{}", module),
                Distro::Ubuntu => module.to_string(),
            };
        }

        match self {
            // Client deliverables are already named python-*
            Distro::Suse if module.starts_with("python-") => module.to_string(),
            Distro::Suse => format!("python-{}", module),
            Distro::Fedora | Distro::Ubuntu => {
                let pkg = module.to_lowercase().replace(['_', '.'], "-");
                let pkg = pkg.strip_prefix("python-").unwrap_or(&pkg);
                format!("python3-{}", pkg)
            }
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distro::Suse => write!(f, "suse"),
            Distro::Fedora => write!(f, "fedora"),
            Distro::Ubuntu => write!(f, "ubuntu"),
        }
    }
}
