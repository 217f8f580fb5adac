use super::RunContext;
use crate::manifest::{self, PackageEntry};
use crate::platform::{backend_family, resolve, Platform, ResolvedPackage};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Show how every manifest entry resolves on this platform. Runs no subprocess.
pub fn run(
    config_path: Option<&Path>,
    manifest_path: Option<&Path>,
    name: Option<&str>,
    work: bool,
    force_macos: bool,
) -> Result<()> {
    let ctx = RunContext::load(config_path, manifest_path, work, force_macos)?;
    let shown = select(&ctx.entries, name)?;

    let selected = manifest::query(&ctx.entries, ctx.filter).len();
    println!(
        "{}",
        format!(
            "📋 {} packages on {} ({} selected)",
            ctx.entries.len(),
            ctx.platform,
            selected
        )
        .bright_cyan()
        .bold()
    );

    for entry in shown {
        let line = describe(entry, ctx.platform);
        if ctx.filter.includes(entry) {
            println!("  {}", line);
        } else {
            println!("  {} {}", line.dimmed(), "[work]".dimmed());
        }
        if !entry.description.is_empty() {
            println!("      {}", entry.description.dimmed());
        }
    }

    Ok(())
}

/// Entries matching `name`, or all of them. Only an unknown name is an error.
fn select<'a>(entries: &'a [PackageEntry], name: Option<&str>) -> Result<Vec<&'a PackageEntry>> {
    match name {
        Some(name) => {
            let found = manifest::find(entries, name);
            if found.is_empty() {
                anyhow::bail!("No manifest entry named '{}'", name);
            }
            Ok(found)
        }
        None => Ok(entries.iter().collect()),
    }
}

fn describe(entry: &PackageEntry, platform: Platform) -> String {
    let id = match resolve(entry, platform) {
        ResolvedPackage::Resolved(id) => id,
        ResolvedPackage::SkippedForPlatform => {
            return format!("{} ⊘ not available on {}", entry.name, platform);
        }
    };

    let target = if id == entry.name {
        entry.name.clone()
    } else {
        format!("{} → {}", entry.name, id)
    };

    match backend_family(platform, entry.gui) {
        Ok(family) => format!("{} [{} {}]", target, family.metadata().icon, family),
        Err(e) => format!("{} ✗ {}", target, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Override;
    use crate::platform::OverrideKey;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_describe_rename() {
        let entry = PackageEntry::new("dust")
            .with_override(OverrideKey::Linux, Override::Rename("du-dust".into()));
        assert_eq!(describe(&entry, Platform::Fedora), "dust → du-dust [📦 dnf]");
        assert_eq!(describe(&entry, Platform::MacOs), "dust [🍺 brew formula]");
    }

    #[test]
    fn test_describe_skip_and_unsupported() {
        let entry = PackageEntry::new("rectangle")
            .gui(true)
            .with_override(OverrideKey::Linux, Override::Skip);
        assert_eq!(
            describe(&entry, Platform::Fedora),
            "rectangle ⊘ not available on Fedora"
        );

        let entry = PackageEntry::new("git");
        assert_eq!(
            describe(&entry, Platform::LinuxGeneric),
            "git ✗ no CLI package backend for Linux"
        );
    }

    #[test]
    fn test_select_by_name() {
        let entries = vec![
            PackageEntry::new("alacritty").gui(true),
            PackageEntry::new("git"),
            PackageEntry::new("alacritty").gui(true),
        ];

        assert_eq!(select(&entries, Some("alacritty")).unwrap().len(), 2);
        assert_eq!(select(&entries, None).unwrap().len(), 3);
        assert!(select(&entries, Some("nope")).is_err());
    }

    #[test]
    fn test_empty_manifest_lists_nothing() {
        assert!(select(&[], None).unwrap().is_empty());

        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("packages.json");
        let config = dir.path().join("dotup.toml");
        fs::write(&manifest, "[]").unwrap();
        fs::write(&config, "").unwrap();

        let (config, manifest) = (Some(config.as_path()), Some(manifest.as_path()));
        assert!(run(config, manifest, None, false, true).is_ok());
        assert!(run(config, manifest, Some("git"), false, true).is_err());
    }
}
