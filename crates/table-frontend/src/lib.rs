//! Table Configurator Frontend
//!
//! egui application: a floating control panel over a wgpu viewport showing
//! the parametric table.

pub mod app;
pub mod config;
pub mod panels;
pub mod state;
pub mod theme;

// Re-exports for convenience
pub use app::ConfiguratorApp;
pub use config::{AppConfig, ConfigError, ConfigManager, SharedConfig};
pub use state::{SharedTableStore, create_shared_store};
