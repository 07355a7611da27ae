//! Configuration discovery and loading.
//!
//! Files are discovered in a single directory (non-recursive) and sorted by
//! file name, so an index printed by `list` stays valid for `run --index`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::model::{ConfigFormat, Configuration};
use crate::snapshot::ConfigSnapshot;

/// A parsed configuration together with the snapshot of its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Configuration,
    pub snapshot: ConfigSnapshot,
}

fn is_config_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                ConfigFormat::EXTENSIONS
                    .iter()
                    .any(|known| e.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
}

/// List configuration files in `dir`, sorted by file name.
pub fn discover_configs(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if is_config_file(&path) {
            found.push(path);
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = found.len(), "discovered configuration files");
    Ok(found)
}

/// Pick the `index`-th file reported by [`discover_configs`].
pub fn select_config(dir: &Path, index: usize) -> Result<PathBuf, ConfigError> {
    let mut found = discover_configs(dir)?;
    if found.is_empty() {
        return Err(ConfigError::NoConfigFound {
            dir: dir.to_path_buf(),
        });
    }
    let available = found.len();
    if index >= available {
        return Err(ConfigError::NoSuchConfig { index, available });
    }
    Ok(found.swap_remove(index))
}

/// Read, parse and validate a configuration file.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Configuration::parse(&raw, format)?;
    let snapshot = ConfigSnapshot::capture(path.display().to_string(), raw.as_bytes(), &config);
    info!(
        path = %path.display(),
        hypotheses = config.hypothesis_count(),
        facts = config.fact_count(),
        "configuration loaded"
    );
    Ok(LoadedConfig { config, snapshot })
}
