//! Settings loading from config.toml

use std::path::{Path, PathBuf};

use starter_core::prelude::*;

use super::types::Settings;

/// Directory under the platform config dir holding our files
pub const CONFIG_DIR: &str = "starter-select";

/// Settings filename
pub const CONFIG_FILENAME: &str = "config.toml";

/// Default settings path: `<config_dir>/starter-select/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or the default location.
///
/// Never fails: a missing file yields defaults silently, and an unreadable
/// or invalid file yields defaults with a warning.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No platform config directory, using default settings");
                return Settings::default();
            }
        },
    };

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Reading settings from {:?}", path))?;
    let settings: Settings =
        toml::from_str(&content).map_err(|e| Error::config(e.to_string()))?;
    validate(&settings)?;
    Ok(settings)
}

/// Reject values that parse but cannot be used
fn validate(settings: &Settings) -> Result<()> {
    let cell_aspect = settings.layout.cell_aspect;
    if !cell_aspect.is_finite() || cell_aspect <= 0.0 {
        return Err(Error::config(format!(
            "layout.cell_aspect must be a positive number, got {}",
            cell_aspect
        )));
    }
    Ok(())
}
