use std::path::Path;
use tracing::{debug, warn};
use super::{default_settings_path, Settings, SettingsError};
/// Load settings from `path`, or from `~/.scaffold/config.toml` when no path
/// is given.
///
/// Returns `Ok(Settings::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`SettingsError`] if the file exists but cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path.map(Path::to_path_buf).or_else(default_settings_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine settings directory; using defaults");
            return Ok(Settings::default());
        }
    };
    if !path.exists() {
        debug!("Settings not found at {}; using defaults", path.display());
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
