//! Locating and loading the provider configuration

use anyhow::Context;
use std::path::{Path, PathBuf};
use toastkit_core::ToasterConfig;
use tracing::info;

/// `<config dir>/toastkit/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("toastkit").join("config.json"))
}

/// Load an explicit path, or the default path when it exists, or defaults.
///
/// An explicitly given path must exist.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ToasterConfig> {
    if let Some(path) = explicit {
        info!("Loading config from {:?}", path);
        return ToasterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading config from {:?}", path);
            ToasterConfig::load(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        _ => Ok(ToasterConfig::default()),
    }
}
