//! Style configuration file loading.

use std::path::Path;

use super::{
    StyleConfig,
    StyleConfigError,
};

/// Loads and validates the style configuration at `path`.
///
/// A missing file yields the default configuration.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_style_config(path: &Path) -> Result<StyleConfig, StyleConfigError> {
    let config = if path.exists() {
        tracing::debug!("Loading style configuration from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str::<StyleConfig>(&content)?
    } else {
        tracing::debug!("Style configuration not found, using defaults: {:?}", path);
        StyleConfig::default()
    };

    config.validate().map_err(StyleConfigError::ValidationErrors)?;
    Ok(config)
}
