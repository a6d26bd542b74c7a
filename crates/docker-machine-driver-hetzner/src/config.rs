//! Options file discovery and loading

use anyhow::{Context, bail};
use machine_driver::{Flag, MapOptions};
use std::path::{Path, PathBuf};

const LOCAL_OPTIONS_FILE: &str = "hetzner-driver.yaml";
const CONFIG_DIR_NAME: &str = "hetzner-driver";
const CONFIG_FILE_NAME: &str = "options.yaml";

/// Find the options file to load
///
/// Search order:
/// 1. the path given by --options-file (or $HETZNER_DRIVER_OPTIONS); it must exist
/// 2. ./hetzner-driver.yaml
/// 3. ~/.config/hetzner-driver/options.yaml (platform config dir)
///
/// Returns `None` when no file is found and none was named explicitly.
pub fn find_options_file(explicit: Option<PathBuf>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Options file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    let local = std::env::current_dir()?.join(LOCAL_OPTIONS_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if global.is_file() {
            return Ok(Some(global));
        }
    }

    Ok(None)
}

/// Read an options file, rejecting names the driver does not know
pub fn load_options(path: &Path, flags: &[Flag]) -> anyhow::Result<MapOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    let options = MapOptions::from_yaml_str(&content)
        .with_context(|| format!("Invalid options file {}", path.display()))?;
    options
        .check_known(flags)
        .with_context(|| format!("Invalid options file {}", path.display()))?;
    Ok(options)
}
