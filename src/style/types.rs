use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::app::{
    AppContext,
    AppError,
    Plugin,
};
use crate::config::{
    ValidationError,
    format_validation_errors,
    validate_globs,
};

#[derive(Error, Debug)]
pub enum StyleConfigError {
    #[error("Style configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load style configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse style configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// How dark mode is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follows the `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Toggled manually through a `dark` class on an ancestor element.
    Class,
}

/// Declarative options for the utility CSS generator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub dark_mode: DarkMode,

    /// Globs of files scanned for class usage, relative to the project root.
    pub content: Vec<String>,

    pub theme: ThemeConfig,

    /// Generator extensions, in application order.
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Design-token groups (e.g. `colors`, `fontFamily`) merged into the defaults.
    pub extend: BTreeMap<String, serde_json::Value>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dark_mode: DarkMode::default(),
            content: vec!["./src/**/*.{vue,js,ts,jsx,tsx}".to_string()],
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }
}

/// Strips the leading `./` the generator accepts but globs do not match.
pub(super) fn normalize_content_pattern(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

impl StyleConfig {
    /// Content patterns as matched against relative paths.
    pub fn content_globs(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(|pattern| normalize_content_pattern(pattern))
    }

    /// # Errors
    /// - No content pattern, or an invalid one
    /// - `theme.extend` entry that is not an object
    /// - Empty plugin name
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.content.is_empty() {
            errors.push(ValidationError::new(
                "content",
                "At least one pattern is required. Example: [\"./src/**/*.{vue,js,ts}\"]",
            ));
        }
        let normalized: Vec<String> = self.content_globs().map(str::to_string).collect();
        validate_globs("content", &normalized, &mut errors);

        for (name, value) in &self.theme.extend {
            if !value.is_object() {
                errors.push(ValidationError::new(
                    format!("theme.extend.{name}"),
                    "Theme extensions must be objects of design tokens",
                ));
            }
        }

        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("plugins[{index}]"),
                    "The plugin name cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Plugin for StyleConfig {
    fn name(&self) -> &str {
        "style"
    }

    fn install(self: Box<Self>, ctx: &mut AppContext) -> Result<(), AppError> {
        tracing::debug!(dark_mode = ?self.dark_mode, content = ?self.content, "Installing global styles");
        ctx.provide(Rc::new(*self))
    }
}
