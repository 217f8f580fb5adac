use super::Platform;
use crate::error::ResolveError;
use crate::managers::BackendFamily;
use crate::manifest::{Override, PackageEntry};

/// Result of applying a platform to a manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPackage {
    Resolved(String),
    SkippedForPlatform,
}

/// Resolve the install id of `entry` on `platform`
pub fn resolve(entry: &PackageEntry, platform: Platform) -> ResolvedPackage {
    match entry.overrides.get(platform.override_key()) {
        Override::Inherit => ResolvedPackage::Resolved(entry.name.clone()),
        Override::Skip => ResolvedPackage::SkippedForPlatform,
        Override::Rename(name) => ResolvedPackage::Resolved(name.clone()),
    }
}

/// Select the installer family for a CLI or GUI package on `platform`
pub fn backend_family(platform: Platform, gui: bool) -> Result<BackendFamily, ResolveError> {
    match (platform, gui) {
        (Platform::MacOs, false) => Ok(BackendFamily::Formula),
        (Platform::MacOs, true) => Ok(BackendFamily::Cask),
        (Platform::Fedora, false) => Ok(BackendFamily::SystemPackage),
        (Platform::Fedora, true) | (Platform::LinuxGeneric, true) => Ok(BackendFamily::Flatpak),
        (Platform::LinuxGeneric, false) => Err(ResolveError::UnsupportedPlatform {
            platform,
            kind: "CLI package",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OverrideKey;

    const PLATFORMS: [Platform; 3] = [Platform::MacOs, Platform::Fedora, Platform::LinuxGeneric];

    #[test]
    fn test_resolve_is_pure() {
        let entries = vec![
            PackageEntry::new("git"),
            PackageEntry::new("dust")
                .with_override(OverrideKey::Linux, Override::Rename("du-dust".into())),
            PackageEntry::new("rectangle")
                .gui(true)
                .with_override(OverrideKey::Linux, Override::Skip),
        ];

        for entry in &entries {
            for platform in PLATFORMS {
                assert_eq!(resolve(entry, platform), resolve(entry, platform));
            }
        }
    }

    #[test]
    fn test_override_precedence() {
        let skipped = PackageEntry::new("pkg").with_override(OverrideKey::Linux, Override::Skip);
        assert_eq!(
            resolve(&skipped, Platform::Fedora),
            ResolvedPackage::SkippedForPlatform
        );

        let plain = PackageEntry::new("pkg");
        assert_eq!(
            resolve(&plain, Platform::Fedora),
            ResolvedPackage::Resolved("pkg".to_string())
        );

        let renamed = PackageEntry::new("pkg")
            .with_override(OverrideKey::Linux, Override::Rename("foo".into()));
        assert_eq!(
            resolve(&renamed, Platform::Fedora),
            ResolvedPackage::Resolved("foo".to_string())
        );
    }

    #[test]
    fn test_other_platform_override_is_ignored() {
        let entry = PackageEntry::new("rectangle")
            .gui(true)
            .with_override(OverrideKey::Linux, Override::Skip);
        assert_eq!(
            resolve(&entry, Platform::MacOs),
            ResolvedPackage::Resolved("rectangle".to_string())
        );

        let entry = PackageEntry::new("fd")
            .with_override(OverrideKey::Macos, Override::Rename("fd-find".into()));
        assert_eq!(
            resolve(&entry, Platform::LinuxGeneric),
            ResolvedPackage::Resolved("fd".to_string())
        );
    }

    #[test]
    fn test_dust_on_fedora() {
        let entry = PackageEntry::new("dust")
            .with_override(OverrideKey::Linux, Override::Rename("du-dust".into()));

        assert_eq!(
            resolve(&entry, Platform::Fedora),
            ResolvedPackage::Resolved("du-dust".to_string())
        );
        assert_eq!(
            backend_family(Platform::Fedora, entry.gui).unwrap(),
            BackendFamily::SystemPackage
        );
    }

    #[test]
    fn test_backend_family_table() {
        assert_eq!(backend_family(Platform::MacOs, false), Ok(BackendFamily::Formula));
        assert_eq!(backend_family(Platform::MacOs, true), Ok(BackendFamily::Cask));
        assert_eq!(
            backend_family(Platform::Fedora, false),
            Ok(BackendFamily::SystemPackage)
        );
        assert_eq!(backend_family(Platform::Fedora, true), Ok(BackendFamily::Flatpak));
        assert_eq!(
            backend_family(Platform::LinuxGeneric, true),
            Ok(BackendFamily::Flatpak)
        );
    }

    #[test]
    fn test_generic_linux_cli_is_unsupported() {
        let err = backend_family(Platform::LinuxGeneric, false).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnsupportedPlatform {
                platform: Platform::LinuxGeneric,
                ..
            }
        ));
        assert_eq!(err.to_string(), "no CLI package backend for Linux");
    }
}
