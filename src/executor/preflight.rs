use super::Mode;
use crate::error::PreflightError;
use crate::managers::BackendFamily;
use crate::manifest::{Filter, PackageEntry};
use crate::platform::{backend_family, resolve, Platform, ResolvedPackage};
use colored::Colorize;
use std::collections::BTreeMap;

/// Backend families needed by the entries that will reach an installer,
/// with the number of entries per family
pub fn required_families(
    entries: &[PackageEntry],
    platform: Platform,
    filter: Filter,
) -> BTreeMap<BackendFamily, usize> {
    let mut families = BTreeMap::new();

    for entry in entries.iter().filter(|e| filter.includes(e)) {
        if resolve(entry, platform) == ResolvedPackage::SkippedForPlatform {
            continue;
        }
        if let Ok(family) = backend_family(platform, entry.gui) {
            *families.entry(family).or_insert(0) += 1;
        }
    }

    families
}

/// Verify every needed package manager binary exists before touching any entry.
///
/// In dry-run mode a missing binary is only a warning: the state checks then
/// report everything as not installed.
pub fn check<F>(
    entries: &[PackageEntry],
    platform: Platform,
    filter: Filter,
    mode: Mode,
    binary_exists: F,
) -> Result<(), PreflightError>
where
    F: Fn(&str) -> bool,
{
    for (family, count) in required_families(entries, platform, filter) {
        let meta = family.metadata();
        if binary_exists(meta.binary) {
            log::debug!("{} found for {} package(s)", meta.binary, count);
            continue;
        }

        let err = PreflightError::MissingBinary {
            binary: meta.binary,
            family,
            count,
        };

        match mode {
            Mode::Execute => return Err(err),
            Mode::DryRun => {
                println!("  ⚠️  {} ({})", err.to_string().yellow(), meta.install_hint);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Override;
    use crate::platform::OverrideKey;

    fn entries() -> Vec<PackageEntry> {
        vec![
            PackageEntry::new("git"),
            PackageEntry::new("ripgrep"),
            PackageEntry::new("rectangle")
                .gui(true)
                .with_override(OverrideKey::Linux, Override::Skip),
            PackageEntry::new("slack").gui(true).work(true),
        ]
    }

    #[test]
    fn test_required_families_on_fedora() {
        let families = required_families(&entries(), Platform::Fedora, Filter::default());
        assert_eq!(families.len(), 1);
        assert_eq!(families[&BackendFamily::SystemPackage], 2);

        let families = required_families(&entries(), Platform::Fedora, Filter::new(true));
        assert_eq!(families[&BackendFamily::Flatpak], 1);
    }

    #[test]
    fn test_required_families_on_macos() {
        let families = required_families(&entries(), Platform::MacOs, Filter::default());
        assert_eq!(families[&BackendFamily::Formula], 2);
        assert_eq!(families[&BackendFamily::Cask], 1);
    }

    #[test]
    fn test_missing_binary_is_fatal_when_executing() {
        let err = check(&entries(), Platform::Fedora, Filter::default(), Mode::Execute, |_| false)
            .unwrap_err();
        assert!(matches!(
            err,
            PreflightError::MissingBinary {
                binary: "dnf",
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_binary_is_warning_in_dry_run() {
        assert!(check(&entries(), Platform::MacOs, Filter::default(), Mode::DryRun, |_| false).is_ok());
    }

    #[test]
    fn test_unneeded_binary_is_not_required() {
        // Only gui entry is skipped on Fedora, so flatpak may be absent.
        let result = check(&entries(), Platform::Fedora, Filter::default(), Mode::Execute, |bin| {
            bin == "dnf"
        });
        assert!(result.is_ok());
    }
}
