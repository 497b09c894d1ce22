//! Shared traits.
//!
//! [`ConfigManager`] is implemented by the application's configuration type
//! and lets the generic `config` command handlers locate, load and write the
//! TOML file without knowing its layout.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A TOML-backed configuration type.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and environment prefix.
    fn project_name() -> &'static str;

    /// Environment variable that points at an explicit config file.
    ///
    /// `"byd"` → `"BYD_CONFIG"`.
    fn config_env_var() -> String {
        format!(
            "{}_CONFIG",
            Self::project_name().to_uppercase().replace(['-', ' '], "_")
        )
    }

    /// `<platform config dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolves the config file path.
    ///
    /// Checks in order:
    /// 1. the explicit path
    /// 2. the `{PROJECT}_CONFIG` environment variable
    /// 3. [`default_config_path`](Self::default_config_path)
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(Self::config_env_var()) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Checks semantic constraints after loading.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Loads the configuration; a missing file yields the defaults.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                toml::from_str::<Self>(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
