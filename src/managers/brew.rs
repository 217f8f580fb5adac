use super::{run_install, Backend, BackendFamily, InstallationOutcome};
use crate::utils;

/// Environment for every brew invocation: no auto-update, no prompts
const BREW_ENV: &[(&str, &str)] = &[
    ("HOMEBREW_NO_AUTO_UPDATE", "1"),
    ("HOMEBREW_NO_ENV_HINTS", "1"),
    ("NONINTERACTIVE", "1"),
];

/// Homebrew backend, either formulae or casks
pub struct BrewManager {
    cask: bool,
}

impl BrewManager {
    pub fn formula() -> Self {
        Self { cask: false }
    }

    pub fn cask() -> Self {
        Self { cask: true }
    }

    fn kind_flag(&self) -> &'static str {
        if self.cask {
            "--cask"
        } else {
            "--formula"
        }
    }

    pub fn check_args<'a>(&self, id: &'a str) -> Vec<&'a str> {
        vec!["list", self.kind_flag(), id]
    }

    pub fn install_args<'a>(&self, id: &'a str) -> Vec<&'a str> {
        if self.cask {
            vec!["install", "--cask", id]
        } else {
            vec!["install", id]
        }
    }
}

impl Backend for BrewManager {
    fn family(&self) -> BackendFamily {
        if self.cask {
            BackendFamily::Cask
        } else {
            BackendFamily::Formula
        }
    }

    fn is_installed(&self, id: &str) -> bool {
        utils::execute_command_success("brew", &self.check_args(id), BREW_ENV)
    }

    fn install(&self, id: &str) -> InstallationOutcome {
        run_install(self.family(), id, "brew", &self.install_args(id), BREW_ENV)
    }
}
