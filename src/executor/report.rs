use super::{EntryReport, Mode, RunSummary, Tally};
use crate::managers::InstallationOutcome;
use colored::Colorize;

/// One status line per processed entry
pub fn print_entry(report: &EntryReport) {
    println!("  {}", entry_line(report));
}

fn entry_line(report: &EntryReport) -> String {
    let target = match (&report.install_id, report.family) {
        (Some(id), Some(family)) if id != &report.name => {
            format!("{} → {} ({})", report.name, id, family)
        }
        (_, Some(family)) => format!("{} ({})", report.name, family),
        _ => report.name.clone(),
    };

    match &report.outcome {
        InstallationOutcome::AlreadyInstalled => {
            format!("✓ {} already installed", target.green())
        }
        InstallationOutcome::Installed => format!("✓ {} installed", target.green()),
        InstallationOutcome::WouldInstall => format!("→ Would install {}", target.cyan()),
        InstallationOutcome::Failed(reason) => {
            format!("✗ {} failed: {}", target.red(), reason)
        }
        InstallationOutcome::SkippedForPlatform => {
            format!("⊘ {} skipped (not available on this platform)", target.yellow())
        }
        InstallationOutcome::SkippedByFilter => {
            format!("⊘ {} skipped (work package)", target.dimmed())
        }
    }
}

/// Print the end-of-run summary
pub fn print_summary(summary: &RunSummary) {
    let total = summary.total();
    let installed_label = match summary.mode {
        Mode::Execute => "Installed",
        Mode::DryRun => "Would install",
    };

    println!();
    println!("{}", "=".repeat(50).bright_blue());
    println!("{}", "Summary".bright_blue().bold());
    println!("{}", "=".repeat(50).bright_blue());
    println!(
        "  {:<22} {} (cli {}, gui {})",
        format!("{}:", installed_label),
        total.installed,
        summary.cli.installed,
        summary.gui.installed
    );
    print_count("Already installed:", total.already_installed, &summary.cli, &summary.gui, |t| {
        t.already_installed
    });
    print_count("Skipped (platform):", total.skipped_platform, &summary.cli, &summary.gui, |t| {
        t.skipped_platform
    });
    print_count("Skipped (filter):", total.skipped_filter, &summary.cli, &summary.gui, |t| {
        t.skipped_filter
    });
    print_count("Failed:", total.failed, &summary.cli, &summary.gui, |t| t.failed);

    let failures: Vec<_> = summary
        .entries
        .iter()
        .filter_map(|r| match &r.outcome {
            InstallationOutcome::Failed(reason) => Some((r, reason)),
            _ => None,
        })
        .collect();

    println!();
    if failures.is_empty() {
        let done = match summary.mode {
            Mode::Execute => "✓ dotup apply completed!",
            Mode::DryRun => "✓ dry run completed, nothing was changed",
        };
        println!("{}", done.bright_green().bold());
        return;
    }

    println!("{}", "Failed packages:".red().bold());
    for (report, reason) in failures {
        let id = report.install_id.as_deref().unwrap_or(&report.name);
        println!("  ❌ {} ({})", report.name.red(), id);
        println!("     Reason: {}", reason);
    }
    println!();
    println!(
        "💡 {}",
        "Run 'dotup apply' again after fixing the issues.".bright_yellow()
    );
    println!("   Already installed packages will be skipped automatically.");
}

fn print_count(label: &str, total: usize, cli: &Tally, gui: &Tally, pick: fn(&Tally) -> usize) {
    println!(
        "  {:<22} {} (cli {}, gui {})",
        label,
        total,
        pick(cli),
        pick(gui)
    );
}
