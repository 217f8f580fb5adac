pub mod apply;
pub mod list;

use crate::config::{find_manifest, load_config_auto, Config};
use crate::manifest::{self, Filter, PackageEntry};
use crate::platform::Platform;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything a command needs, loaded once before any entry is touched
pub struct RunContext {
    pub config: Config,
    pub manifest_path: PathBuf,
    pub entries: Vec<PackageEntry>,
    pub platform: Platform,
    pub filter: Filter,
}

impl RunContext {
    pub fn load(
        config_path: Option<&Path>,
        manifest_path: Option<&Path>,
        work: bool,
        force_macos: bool,
    ) -> Result<Self> {
        let (config_file, config) = load_config_auto(config_path)?;
        if let Some(path) = &config_file {
            log::info!("Loaded config from: {}", path.display());
        }

        let manifest_path = find_manifest(manifest_path, &config)?;
        let entries = manifest::load(&manifest_path)
            .with_context(|| format!("Cannot load manifest {}", manifest_path.display()))?;
        log::info!(
            "Loaded {} packages from: {}",
            entries.len(),
            manifest_path.display()
        );

        let platform = Platform::detect(force_macos)?;
        let filter = Filter::new(work || config.settings.work);

        Ok(Self {
            config,
            manifest_path,
            entries,
            platform,
            filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_context() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("dotup.toml");
        let manifest = dir.path().join("packages.json");
        fs::write(&config, "[settings]\nwork = true\n").unwrap();
        fs::write(&manifest, r#"[{"name": "git"}, {"name": "slack", "work": true}]"#).unwrap();

        let ctx = RunContext::load(Some(&config), Some(&manifest), false, true).unwrap();
        assert_eq!(ctx.entries.len(), 2);
        assert_eq!(ctx.platform, Platform::MacOs);
        assert!(ctx.filter.include_work);
        assert_eq!(ctx.manifest_path, manifest);
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("dotup.toml");
        fs::write(&config, "").unwrap();
        let manifest = dir.path().join("missing.json");

        let err = RunContext::load(Some(&config), Some(&manifest), false, true)
            .err()
            .unwrap();
        assert!(format!("{:#}", err).contains("Manifest not found"));
    }
}
