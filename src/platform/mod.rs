pub mod resolver;

pub use resolver::*;

use crate::error::PlatformError;
use std::fmt;
use std::fs;
use std::path::Path;

/// Host platform, fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (Homebrew formulae and casks)
    MacOs,
    /// Fedora/RHEL family (dnf and flatpak)
    Fedora,
    /// Any other Linux distribution (flatpak only)
    LinuxGeneric,
}

/// Key used to look up per-platform overrides in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKey {
    Macos,
    Linux,
}

impl Platform {
    /// Detect the running platform. `force_macos` substitutes macOS on any host.
    pub fn detect(force_macos: bool) -> Result<Self, PlatformError> {
        if force_macos {
            log::debug!("Platform forced to macOS");
            return Ok(Self::MacOs);
        }

        let os_release = fs::read_to_string(Path::new("/etc/os-release")).ok();
        Self::from_os(std::env::consts::OS, os_release.as_deref())
    }

    /// Map an OS name and optional os-release content to a platform
    pub fn from_os(os: &str, os_release: Option<&str>) -> Result<Self, PlatformError> {
        match os {
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(match os_release {
                Some(content) if is_fedora_like(content) => Self::Fedora,
                _ => Self::LinuxGeneric,
            }),
            other => Err(PlatformError::Unsupported(other.to_string())),
        }
    }

    pub fn override_key(&self) -> OverrideKey {
        match self {
            Self::MacOs => OverrideKey::Macos,
            Self::Fedora | Self::LinuxGeneric => OverrideKey::Linux,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MacOs => "macOS",
            Self::Fedora => "Fedora",
            Self::LinuxGeneric => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn is_fedora_like(os_release: &str) -> bool {
    let mut id = "";
    let mut id_like = "";

    for line in os_release.lines() {
        if let Some(val) = line.strip_prefix("ID=") {
            id = val.trim().trim_matches('"');
        } else if let Some(val) = line.strip_prefix("ID_LIKE=") {
            id_like = val.trim().trim_matches('"');
        }
    }

    id == "fedora"
        || id_like
            .split_whitespace()
            .any(|like| like == "fedora" || like == "rhel")
}
