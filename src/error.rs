use crate::managers::BackendFamily;
use crate::platform::Platform;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the package manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid manifest entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Unsupported platform: {0} (expected macos or linux)")]
    Unsupported(String),
}

/// Per-entry resolution failure. Never fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no {kind} backend for {platform}")]
    UnsupportedPlatform {
        platform: Platform,
        kind: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error(
        "{binary} not found in PATH but {count} package(s) need the {family} backend"
    )]
    MissingBinary {
        binary: &'static str,
        family: BackendFamily,
        count: usize,
    },
}
