//! Application configuration
//!
//! Settings are stored as RON next to the working directory (or wherever
//! `TABLE_CONFIGURATOR_CONFIG` points). Missing files fall back to defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use table_core::TableParameters;
use table_renderer::RendererConfig;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TABLE_CONFIGURATOR_CONFIG";
/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "table-configurator.ron";

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: UiTheme,
    /// Show the axes indicator in the viewport corner
    pub show_axes_indicator: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Dark,
            show_axes_indicator: true,
        }
    }
}

/// Table state at startup
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TableConfig {
    pub initial: TableParameters,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
    #[error("No config file path set")]
    NoPath,
}

/// Owns the active configuration and where it is persisted
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
    path: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new(config: AppConfig, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    /// Load from `path`. A missing file yields defaults bound to that path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::new(AppConfig::default(), Some(path.to_path_buf())));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: AppConfig =
            ron::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(Self::new(config, Some(path.to_path_buf())))
    }

    /// Load from the default location, falling back to defaults on error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let path = default_config_path();
        match Self::load(&path) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::new(AppConfig::default(), Some(path))
            }
        }
    }

    /// Defaults only; there is no filesystem in the browser
    #[cfg(target_arch = "wasm32")]
    pub fn load_default() -> Self {
        Self::default()
    }

    /// Write the configuration back to its file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.path.as_ref().ok_or(ConfigError::NoPath)?;
        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = AppConfig::default();
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Shared configuration handle
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Wrap a manager for sharing between the app and its panels
pub fn create_shared_config(manager: ConfigManager) -> SharedConfig {
    Arc::new(RwLock::new(manager))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_core::TableColor;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");
        let manager = ConfigManager::load(&path).unwrap();
        assert_eq!(manager.config(), &AppConfig::default());
        assert_eq!(manager.path(), Some(path.as_path()));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(ui: (theme: Purple").unwrap();
        let result = ConfigManager::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");

        let mut manager = ConfigManager::load(&path).unwrap();
        manager.config_mut().ui.theme = UiTheme::Light;
        manager.config_mut().ui.show_axes_indicator = false;
        manager.config_mut().table.initial = TableParameters {
            width: 3.5,
            thickness: 0.2,
            color: TableColor::DarkCyan,
        };
        manager.save().unwrap();

        let reloaded = ConfigManager::load(&path).unwrap();
        assert_eq!(reloaded.config(), manager.config());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ron");
        std::fs::write(&path, "(ui: (theme: Light, show_axes_indicator: false))").unwrap();

        let manager = ConfigManager::load(&path).unwrap();
        assert_eq!(manager.config().ui.theme, UiTheme::Light);
        assert_eq!(manager.config().renderer, RendererConfig::default());
        assert_eq!(manager.config().table.initial, TableParameters::default());
    }

    #[test]
    fn test_save_without_path() {
        let manager = ConfigManager::default();
        assert!(matches!(manager.save(), Err(ConfigError::NoPath)));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut manager = ConfigManager::default();
        manager.config_mut().ui.theme = UiTheme::Light;
        manager.reset_to_defaults();
        assert_eq!(manager.config(), &AppConfig::default());
    }
}
