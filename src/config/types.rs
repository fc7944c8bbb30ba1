use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::app::MountTarget;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeFiles.excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub(crate) fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pushes an error for each invalid glob in `patterns`.
pub(crate) fn validate_globs(
    field: &str,
    patterns: &[String],
    errors: &mut Vec<ValidationError>,
) {
    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Locale active at startup.
    pub locale: String,

    /// Locale consulted when a key is missing from the active one.
    pub fallback_locale: String,

    pub key_separator: String,

    pub locale_files: LocaleFilesConfig,

    /// Element the application is mounted into.
    pub mount_selector: String,

    /// Style build configuration file, relative to the project root.
    pub style_config: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    pub file_pattern: String,
    pub exclude_patterns: Vec<String>,
}

impl AppSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Invalid mount selector
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locale.is_empty() {
            errors.push(ValidationError::new(
                "locale",
                "The locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.fallback_locale.is_empty() {
            errors.push(ValidationError::new(
                "fallbackLocale",
                "The fallback locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.locale_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.locale_files.file_pattern) {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.locale_files.file_pattern),
            ));
        }

        validate_globs(
            "localeFiles.excludePatterns",
            &self.locale_files.exclude_patterns,
            &mut errors,
        );

        if let Err(e) = MountTarget::parse(&self.mount_selector) {
            errors.push(ValidationError::new("mountSelector", e.to_string()));
        }

        if self.style_config.is_empty() {
            errors.push(ValidationError::new(
                "styleConfig",
                "The path cannot be empty. Example: \"style.config.json\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self {
            file_pattern: "**/locales/*.json".to_string(),
            exclude_patterns: vec!["**/node_modules/**".to_string()],
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            key_separator: ".".to_string(),
            locale_files: LocaleFilesConfig::default(),
            mount_selector: "#app".to_string(),
            style_config: "style.config.json".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = AppSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"locale": "zh"}"#;

        let settings: AppSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locale, eq("zh"));
        assert_that!(settings.fallback_locale, eq("en"));
        assert_that!(settings.key_separator, eq("."));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: AppSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locale, eq("en"));
        assert_that!(settings.mount_selector, eq("#app"));
        assert_that!(settings.locale_files.file_pattern, eq("**/locales/*.json"));
        assert_that!(settings.locale_files.exclude_patterns, elements_are![eq("**/node_modules/**")]);
        assert_that!(settings.style_config, eq("style.config.json"));
    }

    #[rstest]
    fn deserialize_nested_locale_files() {
        let json = r#"{"localeFiles": {"filePattern": "i18n/*.json"}}"#;

        let settings: AppSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locale_files.file_pattern, eq("i18n/*.json"));
        assert_that!(settings.locale_files.exclude_patterns, elements_are![eq("**/node_modules/**")]);
    }

    #[rstest]
    #[case::locale(AppSettings { locale: String::new(), ..AppSettings::default() }, "locale")]
    #[case::fallback(
        AppSettings { fallback_locale: String::new(), ..AppSettings::default() },
        "fallbackLocale"
    )]
    #[case::separator(
        AppSettings { key_separator: String::new(), ..AppSettings::default() },
        "keySeparator"
    )]
    #[case::style_config(
        AppSettings { style_config: String::new(), ..AppSettings::default() },
        "styleConfig"
    )]
    fn validate_empty_field(#[case] settings: AppSettings, #[case] field_path: &str) {
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq(field_path)),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_file_pattern() {
        let settings = AppSettings {
            locale_files: LocaleFilesConfig {
                file_pattern: "**/{locales/*.json".to_string(),
                ..LocaleFilesConfig::default()
            },
            ..AppSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("localeFiles.filePattern")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern() {
        let settings = AppSettings {
            locale_files: LocaleFilesConfig {
                exclude_patterns: vec!["node_modules/**".to_string(), "invalid[pattern".to_string()],
                ..LocaleFilesConfig::default()
            },
            ..AppSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("localeFiles.excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_mount_selector() {
        let settings = AppSettings { mount_selector: "app".to_string(), ..AppSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("mountSelector")),
                field!(ValidationError.message, contains_substring("#app"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = AppSettings {
            locale: String::new(),
            key_separator: String::new(),
            ..AppSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. locale"));
        assert_that!(error_message, contains_substring("2. keySeparator"));
    }
}
