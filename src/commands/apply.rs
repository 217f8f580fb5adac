use super::RunContext;
use crate::error::PreflightError;
use crate::executor::{self, preflight, report, Mode};
use crate::managers::SystemBackends;
use crate::utils;
use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    manifest_path: Option<&Path>,
    dry_run: bool,
    work: bool,
    force_macos: bool,
) -> Result<()> {
    let ctx = RunContext::load(config_path, manifest_path, work, force_macos)?;
    let mode = if dry_run { Mode::DryRun } else { Mode::Execute };

    print_banner(&ctx, mode);

    if let Err(e) = preflight::check(
        &ctx.entries,
        ctx.platform,
        ctx.filter,
        mode,
        utils::command_exists,
    ) {
        let PreflightError::MissingBinary { family, .. } = &e;
        bail!("{}\n  Fix: {}", e, family.metadata().install_hint);
    }

    let backends = SystemBackends::new(&ctx.config);
    let summary = executor::run(&ctx.entries, ctx.platform, ctx.filter, mode, &backends);
    report::print_summary(&summary);

    let total = summary.total();
    log::debug!("Processed {} manifest entries", total.total());
    if summary.has_failures() {
        log::warn!("{} package(s) failed to install", total.failed);
    }

    Ok(())
}

fn print_banner(ctx: &RunContext, mode: Mode) {
    println!("{}", "=".repeat(50).bright_blue());
    println!("{}", "Starting dotup apply".bright_blue().bold());
    println!("{}", "=".repeat(50).bright_blue());
    println!("  Platform: {}", ctx.platform.to_string().cyan());
    println!("  Manifest: {}", ctx.manifest_path.display());
    println!(
        "  Packages: {}",
        if ctx.filter.include_work {
            "all (including work)"
        } else {
            "personal (use --work for work packages)"
        }
    );
    println!();

    if mode == Mode::DryRun {
        println!("{}", "[DRY RUN MODE]".yellow().bold());
        println!();
    }
}
