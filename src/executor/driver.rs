use super::report;
use crate::managers::{BackendFamily, BackendProvider, InstallationOutcome};
use crate::manifest::{Filter, PackageEntry};
use crate::platform::{backend_family, resolve, Platform, ResolvedPackage};

/// Whether installers actually run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Execute,
    DryRun,
}

/// Outcome counts for one bucket (CLI or GUI)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Installed, or would be installed in dry-run mode
    pub installed: usize,
    pub already_installed: usize,
    pub skipped_platform: usize,
    pub skipped_filter: usize,
    pub failed: usize,
}

impl Tally {
    fn record(&mut self, outcome: &InstallationOutcome) {
        match outcome {
            InstallationOutcome::Installed | InstallationOutcome::WouldInstall => {
                self.installed += 1
            }
            InstallationOutcome::AlreadyInstalled => self.already_installed += 1,
            InstallationOutcome::SkippedForPlatform => self.skipped_platform += 1,
            InstallationOutcome::SkippedByFilter => self.skipped_filter += 1,
            InstallationOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.installed
            + self.already_installed
            + self.skipped_platform
            + self.skipped_filter
            + self.failed
    }

    fn add(&self, other: &Tally) -> Tally {
        Tally {
            installed: self.installed + other.installed,
            already_installed: self.already_installed + other.already_installed,
            skipped_platform: self.skipped_platform + other.skipped_platform,
            skipped_filter: self.skipped_filter + other.skipped_filter,
            failed: self.failed + other.failed,
        }
    }
}

/// What happened to one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub name: String,
    pub gui: bool,
    pub install_id: Option<String>,
    pub family: Option<BackendFamily>,
    pub outcome: InstallationOutcome,
}

/// Counts and per-entry log for one invocation
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub mode: Mode,
    pub cli: Tally,
    pub gui: Tally,
    pub entries: Vec<EntryReport>,
}

impl RunSummary {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            cli: Tally::default(),
            gui: Tally::default(),
            entries: Vec::new(),
        }
    }

    fn record(&mut self, report: EntryReport) {
        if report.gui {
            self.gui.record(&report.outcome);
        } else {
            self.cli.record(&report.outcome);
        }
        self.entries.push(report);
    }

    pub fn total(&self) -> Tally {
        self.cli.add(&self.gui)
    }

    pub fn has_failures(&self) -> bool {
        self.total().failed > 0
    }
}

/// Visit every entry once, in manifest order, and install what is missing.
/// A failing entry never stops the run.
pub fn run(
    entries: &[PackageEntry],
    platform: Platform,
    filter: Filter,
    mode: Mode,
    backends: &dyn BackendProvider,
) -> RunSummary {
    let mut summary = RunSummary::new(mode);

    for entry in entries {
        let report = process_entry(entry, platform, filter, mode, backends);
        report::print_entry(&report);
        summary.record(report);
    }

    summary
}

fn process_entry(
    entry: &PackageEntry,
    platform: Platform,
    filter: Filter,
    mode: Mode,
    backends: &dyn BackendProvider,
) -> EntryReport {
    let mut report = EntryReport {
        name: entry.name.clone(),
        gui: entry.gui,
        install_id: None,
        family: None,
        outcome: InstallationOutcome::SkippedByFilter,
    };

    if !filter.includes(entry) {
        log::debug!("Skipping {} (work package, use --work)", entry.name);
        return report;
    }

    let id = match resolve(entry, platform) {
        ResolvedPackage::Resolved(id) => id,
        ResolvedPackage::SkippedForPlatform => {
            log::debug!("Skipping {} (not available on {})", entry.name, platform);
            report.outcome = InstallationOutcome::SkippedForPlatform;
            return report;
        }
    };
    report.install_id = Some(id.clone());

    let family = match backend_family(platform, entry.gui) {
        Ok(family) => family,
        Err(e) => {
            log::debug!("Cannot install {}: {}", entry.name, e);
            report.outcome = InstallationOutcome::Failed(e.to_string());
            return report;
        }
    };
    report.family = Some(family);

    let backend = backends.backend(family);
    report.outcome = if backend.is_installed(&id) {
        InstallationOutcome::AlreadyInstalled
    } else {
        match mode {
            Mode::DryRun => InstallationOutcome::WouldInstall,
            Mode::Execute => backend.install(&id),
        }
    };

    report
}
