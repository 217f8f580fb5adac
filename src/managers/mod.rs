pub mod brew;
pub mod dnf;
pub mod flatpak;
pub mod registry;

pub use registry::{BackendMetadata, BACKENDS};

use crate::config::Config;
use crate::utils;
use brew::BrewManager;
use dnf::DnfManager;
use flatpak::FlatpakManager;
use std::fmt;

/// Installer family selected for a resolved package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendFamily {
    /// Homebrew formula (macOS CLI)
    Formula,
    /// Homebrew cask (macOS GUI)
    Cask,
    /// dnf package (Fedora CLI)
    SystemPackage,
    /// Flatpak application (Linux GUI)
    Flatpak,
}

impl BackendFamily {
    pub fn metadata(&self) -> &'static BackendMetadata {
        BackendMetadata::get(*self)
    }

    /// Binary that must be on PATH to use this family
    pub fn binary(&self) -> &'static str {
        self.metadata().binary
    }
}

impl fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.metadata().display_name)
    }
}

/// Terminal state of one manifest entry for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationOutcome {
    AlreadyInstalled,
    Installed,
    /// Dry-run projection of `Installed`
    WouldInstall,
    Failed(String),
    SkippedForPlatform,
    SkippedByFilter,
}

/// One installer backend: read-only state check plus install-if-absent
pub trait Backend {
    fn family(&self) -> BackendFamily;

    /// Whether `id` is currently installed. Must not mutate anything and must
    /// treat a missing tool as "not installed".
    fn is_installed(&self, id: &str) -> bool;

    /// Install `id`. Only called after `is_installed` returned false.
    /// Failures are reported as `InstallationOutcome::Failed`, never panics.
    fn install(&self, id: &str) -> InstallationOutcome;
}

/// Source of one backend per family
pub trait BackendProvider {
    fn backend(&self, family: BackendFamily) -> &dyn Backend;
}

/// Backends that shell out to the real package managers
pub struct SystemBackends {
    formula: BrewManager,
    cask: BrewManager,
    dnf: DnfManager,
    flatpak: FlatpakManager,
}

impl SystemBackends {
    pub fn new(config: &Config) -> Self {
        Self {
            formula: BrewManager::formula(),
            cask: BrewManager::cask(),
            dnf: DnfManager::new(config.dnf.sudo),
            flatpak: FlatpakManager::new(&config.flatpak.remote),
        }
    }
}

impl BackendProvider for SystemBackends {
    fn backend(&self, family: BackendFamily) -> &dyn Backend {
        match family {
            BackendFamily::Formula => &self.formula,
            BackendFamily::Cask => &self.cask,
            BackendFamily::SystemPackage => &self.dnf,
            BackendFamily::Flatpak => &self.flatpak,
        }
    }
}

/// Run an install command and map its exit status to an outcome
fn run_install(
    family: BackendFamily,
    id: &str,
    program: &str,
    args: &[&str],
    envs: &[(&str, &str)],
) -> InstallationOutcome {
    log::debug!("Installing {} via {}", id, family);

    match utils::execute_command(program, args, envs) {
        Ok(output) if output.success() => InstallationOutcome::Installed,
        Ok(output) => {
            log::debug!("{} {} exited with {}", program, args.join(" "), output.status);
            InstallationOutcome::Failed(output.failure_reason())
        }
        Err(e) => InstallationOutcome::Failed(format!("{:#}", e)),
    }
}
