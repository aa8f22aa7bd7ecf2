use std::path::Path;
use tracing::{debug, warn};

use super::{user_config_path, UserConfig, UserConfigError};

/// Load the user configuration from `~/.flora-admin/config.toml`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    match user_config_path() {
        Some(path) => load_user_config_from(&path),
        None => {
            warn!("Could not determine user config directory; using defaults");
            Ok(UserConfig::default())
        }
    }
}

/// Load the user configuration from an explicit path (absent file → defaults).
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}
