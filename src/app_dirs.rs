//! Platform directories for configuration and catalog data.
//!
//! `vitrin` reads `config.toml` from the config directory and probes the data
//! directory for a drop-in catalog when none is configured. Both locations
//! honor the `VITRIN_CONFIG_DIR` and `VITRIN_DATA_DIR` overrides.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// File name probed under the data directory when no catalog is configured.
pub const CATALOG_FILE: &str = "catalog.json";

const CONFIG_DIR_ENV: &str = "VITRIN_CONFIG_DIR";
const DATA_DIR_ENV: &str = "VITRIN_DATA_DIR";

/// Directory searched for `config.toml` ahead of the per-project files.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory holding installed catalogs.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

/// Where a drop-in catalog would live: [`CATALOG_FILE`] directly under the
/// data directory.
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(CATALOG_FILE))
}

fn resolve(env_name: &str, pick: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
    if let Some(dir) = override_dir(env::var_os(env_name)) {
        return Ok(dir);
    }
    let dirs = ProjectDirs::from("io", "vitrin", "vitrin")
        .ok_or_else(|| anyhow!("unable to determine project directories for vitrin"))?;
    Ok(pick(&dirs).to_path_buf())
}

/// An empty override counts as unset so shell defaults pass through.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
    let value = value?;
    (!value.is_empty()).then(|| PathBuf::from(value))
}
