//! Rule catalog selection.

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use mindscan_core::{CatalogConfig, PatternAnalyzer};

/// File name of the catalog inside the config directory.
const CATALOG_FILE_NAME: &str = "catalog.json";

/// Get the default catalog path in the platform config directory.
pub fn default_catalog_path() -> Option<PathBuf> {
    ProjectDirs::from("", "mindscan", "Mindscan")
        .map(|dirs| dirs.config_dir().join(CATALOG_FILE_NAME))
}

/// Builds the analyzer for this run.
///
/// An explicit catalog path must load. Otherwise the default catalog file
/// is used when it exists, and the built-in catalog when it does not.
pub fn load_analyzer(explicit: Option<&Path>) -> anyhow::Result<PatternAnalyzer> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    match default_catalog_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => {
            tracing::debug!("Using built-in catalog");
            Ok(PatternAnalyzer::builtin())
        }
    }
}

fn load_from(path: &Path) -> anyhow::Result<PatternAnalyzer> {
    let config = CatalogConfig::from_path(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let analyzer = config
        .build()
        .with_context(|| format!("Invalid catalog {}", path.display()))?;

    tracing::info!("Loaded catalog from {:?}", path);
    Ok(analyzer)
}
