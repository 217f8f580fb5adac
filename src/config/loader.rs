use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "dotup.toml";
const MANIFEST_FILE: &str = "packages.json";

/// Find config file in order of priority:
/// 1. Explicit --config flag path
/// 2. ./dotup.toml (current directory)
/// 3. ~/.config/dotup/dotup.toml
/// 4. ~/.dotup.toml
///
/// Returns `None` when no file exists; the settings file is optional.
pub fn find_config_file(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let mut candidates = vec![PathBuf::from(".").join(CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("dotup").join(CONFIG_FILE));
    }
    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(".dotup.toml"));
    }

    Ok(first_existing(&candidates))
}

/// Load and parse config file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;

    Ok(config)
}

/// Load config with automatic discovery, falling back to defaults
pub fn load_config_auto(explicit_path: Option<&Path>) -> Result<(Option<PathBuf>, Config)> {
    match find_config_file(explicit_path)? {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((Some(path), config))
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok((None, Config::default()))
        }
    }
}

/// Pick the manifest path in order of priority:
/// 1. Explicit --manifest flag path
/// 2. `settings.manifest` from the config file
/// 3. ./packages.json
/// 4. ~/.config/dotup/packages.json
///
/// Explicit and configured paths are returned as-is so a missing file is
/// reported against them. Otherwise the first existing default wins, or the
/// first default when none exists.
pub fn find_manifest(explicit_path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    if let Some(configured) = &config.settings.manifest {
        let expanded = shellexpand::full(configured)
            .with_context(|| format!("Failed to expand manifest path: {}", configured))?;
        return Ok(PathBuf::from(expanded.into_owned()));
    }

    let mut candidates = vec![PathBuf::from(".").join(MANIFEST_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("dotup").join(MANIFEST_FILE));
    }

    Ok(first_existing(&candidates).unwrap_or_else(|| candidates[0].clone()))
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.exists()).cloned()
}
