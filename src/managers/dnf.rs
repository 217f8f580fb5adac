use super::{run_install, Backend, BackendFamily, InstallationOutcome};
use crate::utils;
use sudo::RunningAs;

/// Fedora system packages via dnf, checked with rpm
pub struct DnfManager {
    sudo: bool,
}

impl DnfManager {
    /// `use_sudo` is honored only when not already root and sudo exists
    pub fn new(use_sudo: bool) -> Self {
        let sudo = needs_sudo(use_sudo, sudo::check(), utils::command_exists("sudo"));
        log::debug!("dnf will run {}", if sudo { "via sudo" } else { "directly" });
        Self { sudo }
    }

    pub fn check_args<'a>(&self, id: &'a str) -> Vec<&'a str> {
        vec!["-q", id]
    }

    /// Program and arguments for `dnf install`
    pub fn install_command<'a>(&self, id: &'a str) -> (&'static str, Vec<&'a str>) {
        if self.sudo {
            ("sudo", vec!["dnf", "install", "-y", id])
        } else {
            ("dnf", vec!["install", "-y", id])
        }
    }
}

impl Backend for DnfManager {
    fn family(&self) -> BackendFamily {
        BackendFamily::SystemPackage
    }

    fn is_installed(&self, id: &str) -> bool {
        utils::execute_command_success("rpm", &self.check_args(id), &[])
    }

    fn install(&self, id: &str) -> InstallationOutcome {
        let (program, args) = self.install_command(id);
        run_install(self.family(), id, program, &args, &[])
    }
}

/// A setuid binary already runs with root's effective uid
fn needs_sudo(use_sudo: bool, running_as: RunningAs, sudo_on_path: bool) -> bool {
    let privileged = matches!(running_as, RunningAs::Root | RunningAs::Suid);
    use_sudo && !privileged && sudo_on_path
}
