//! RPM filename decomposition
//!
//! Splits `[epoch:]name-version-release.arch[.rpm]` from the right, the
//! same way yum's `rpmUtils.miscutils.splitFilename` does. No validation
//! is performed: a malformed filename yields a meaningless split but
//! never panics.

/// Components of an RPM filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpmFilename {
    pub name: String,
    pub version: String,
    pub release: String,
    pub epoch: String,
    pub arch: String,
}

impl RpmFilename {
    /// Split an RPM filename into its components
    pub fn split(filename: &str) -> Self {
        let base = filename.strip_suffix(".rpm").unwrap_or(filename);

        let arch_idx = base.rfind('.');
        let arch = &base[arch_idx.map_or(0, |i| i + 1)..];
        let release_end = arch_idx.unwrap_or(base.len());

        let release_idx = base[..release_end].rfind('-');
        let release = &base[release_idx.map_or(0, |i| i + 1)..release_end];
        let version_end = release_idx.unwrap_or(0);

        let version_idx = base[..version_end].rfind('-');
        let version = &base[version_idx.map_or(0, |i| i + 1)..version_end];
        let name_end = version_idx.unwrap_or(0);

        let epoch_idx = base.find(':');
        let epoch = epoch_idx.map_or("", |i| &base[..i]);
        let name_start = epoch_idx.map_or(0, |i| i + 1);
        let name = if name_start <= name_end {
            &base[name_start..name_end]
        } else {
            ""
        };

        Self {
            name: name.to_string(),
            version: version.to_string(),
            release: release.to_string(),
            epoch: epoch.to_string(),
            arch: arch.to_string(),
        }
    }

    /// Returns true for source RPMs
    pub fn is_source(&self) -> bool {
        self.arch == "src"
    }
}
