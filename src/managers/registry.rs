use super::BackendFamily;

/// Metadata for an installer backend
#[derive(Debug, Clone)]
pub struct BackendMetadata {
    pub family: BackendFamily,

    /// Display name for user-facing messages
    pub display_name: &'static str,

    /// Icon emoji for terminal output
    pub icon: &'static str,

    /// Command that must exist in PATH
    pub binary: &'static str,

    /// How to get the binary when it is missing
    pub install_hint: &'static str,
}

/// Registry of all installer backends
pub static BACKENDS: &[BackendMetadata] = &[
    BackendMetadata {
        family: BackendFamily::Formula,
        display_name: "brew formula",
        icon: "🍺",
        binary: "brew",
        install_hint: "Install Homebrew: /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
    },
    BackendMetadata {
        family: BackendFamily::Cask,
        display_name: "brew cask",
        icon: "🍺",
        binary: "brew",
        install_hint: "Install Homebrew: /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
    },
    BackendMetadata {
        family: BackendFamily::SystemPackage,
        display_name: "dnf",
        icon: "📦",
        binary: "dnf",
        install_hint: "dnf ships with Fedora; check your PATH",
    },
    BackendMetadata {
        family: BackendFamily::Flatpak,
        display_name: "flatpak",
        icon: "🧩",
        binary: "flatpak",
        install_hint: "Install flatpak: sudo dnf install -y flatpak",
    },
];

impl BackendMetadata {
    /// Get backend metadata by family
    pub fn get(family: BackendFamily) -> &'static BackendMetadata {
        match family {
            BackendFamily::Formula => &BACKENDS[0],
            BackendFamily::Cask => &BACKENDS[1],
            BackendFamily::SystemPackage => &BACKENDS[2],
            BackendFamily::Flatpak => &BACKENDS[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_lookup() {
        for meta in BACKENDS {
            assert_eq!(BackendMetadata::get(meta.family).family, meta.family);
        }
    }
}
