use serde::Deserialize;

/// Optional `dotup.toml` settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub flatpak: FlatpakConfig,

    #[serde(default)]
    pub dnf: DnfConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Manifest path, `~` and `$VARS` are expanded
    #[serde(default)]
    pub manifest: Option<String>,

    /// Include work-only packages without passing --work
    #[serde(default)]
    pub work: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatpakConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
}

fn default_remote() -> String {
    "flathub".to_string()
}

impl Default for FlatpakConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnfConfig {
    /// Run dnf through sudo when not root
    #[serde(default = "default_true")]
    pub sudo: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DnfConfig {
    fn default() -> Self {
        Self {
            sudo: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.flatpak.remote, "flathub");
        assert!(config.dnf.sudo);
        assert!(!config.settings.work);
        assert!(config.settings.manifest.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            manifest = "~/dotfiles/packages.json"
            work = true

            [flatpak]
            remote = "fedora"

            [dnf]
            sudo = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config.settings.manifest.as_deref(),
            Some("~/dotfiles/packages.json")
        );
        assert!(config.settings.work);
        assert_eq!(config.flatpak.remote, "fedora");
        assert!(!config.dnf.sudo);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("[settings]\nfail_fast = true\n").is_err());
    }
}
