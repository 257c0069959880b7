mod loader;
pub use loader::load_settings;
use crate::cors::DEFAULT_CORS_ORIGINS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
/// Name reported by the root status endpoint when nothing else is configured.
pub const DEFAULT_SERVICE_NAME: &str = "Scaffold Backend";
fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}
fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect()
}
/// Service-scoped settings (`[service]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceSettings {
    #[serde(default = "default_service_name")]
    pub name: String,
}
impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}
/// Cross-origin allow-list (`[cors]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorsSettings {
    #[serde(default = "default_cors_origins")]
    pub origins: Vec<String>,
}
impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}
/// Top-level settings, deserialized from `~/.scaffold/config.toml` or the
/// file passed with `--config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}
/// Resolve the default path for the settings file.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scaffold").join("config.toml"))
}
#[cfg(test)]
#[path = "../settings_tests.rs"]
mod settings_tests;
