use super::{Override, Overrides, PackageEntry};
use crate::error::ManifestError;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDocument {
    packages: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    gui: bool,

    #[serde(default)]
    work: bool,

    #[serde(default)]
    overrides: Option<RawOverrides>,
}

/// Outer `Option` is key presence, inner is `null` vs string
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOverrides {
    #[serde(default, deserialize_with = "double_option")]
    macos: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    linux: Option<Option<String>>,
}

fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Load and parse the manifest at `path`
pub fn load(path: &Path) -> Result<Vec<PackageEntry>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse(&content)?;
    log::debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse manifest text: either a bare array or `{"packages": [...]}`
pub fn parse(content: &str) -> Result<Vec<PackageEntry>, ManifestError> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let raw: Vec<RawEntry> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        serde_json::from_value::<RawDocument>(value)?.packages
    };

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| convert_entry(index, entry))
        .collect()
}

fn convert_entry(index: usize, raw: RawEntry) -> Result<PackageEntry, ManifestError> {
    if raw.name.trim().is_empty() {
        return Err(ManifestError::InvalidEntry {
            index,
            reason: "name must not be empty".to_string(),
        });
    }

    let overrides = match raw.overrides {
        Some(o) => Overrides {
            macos: convert_override(index, &raw.name, "macos", o.macos)?,
            linux: convert_override(index, &raw.name, "linux", o.linux)?,
        },
        None => Overrides::default(),
    };

    Ok(PackageEntry {
        name: raw.name,
        description: raw.description,
        gui: raw.gui,
        work: raw.work,
        overrides,
    })
}

fn convert_override(
    index: usize,
    name: &str,
    key: &str,
    value: Option<Option<String>>,
) -> Result<Override, ManifestError> {
    match value {
        None => Ok(Override::Inherit),
        Some(None) => Ok(Override::Skip),
        Some(Some(renamed)) if renamed.trim().is_empty() => Err(ManifestError::InvalidEntry {
            index,
            reason: format!("{}: overrides.{} must be a package name or null", name, key),
        }),
        Some(Some(renamed)) => Ok(Override::Rename(renamed)),
    }
}
