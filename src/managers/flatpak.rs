use super::{run_install, Backend, BackendFamily, InstallationOutcome};
use crate::utils;

/// Flatpak applications from a named remote
pub struct FlatpakManager {
    remote: String,
}

impl FlatpakManager {
    pub fn new(remote: &str) -> Self {
        Self {
            remote: remote.to_string(),
        }
    }

    pub fn check_args<'a>(&self, id: &'a str) -> Vec<&'a str> {
        vec!["info", id]
    }

    pub fn install_args<'a>(&'a self, id: &'a str) -> Vec<&'a str> {
        vec!["install", "-y", "--noninteractive", self.remote.as_str(), id]
    }
}

impl Backend for FlatpakManager {
    fn family(&self) -> BackendFamily {
        BackendFamily::Flatpak
    }

    fn is_installed(&self, id: &str) -> bool {
        utils::execute_command_success("flatpak", &self.check_args(id), &[])
    }

    fn install(&self, id: &str) -> InstallationOutcome {
        run_install(self.family(), id, "flatpak", &self.install_args(id), &[])
    }
}
