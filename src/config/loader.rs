//! 設定ファイルの読み込み

use std::path::Path;

use super::{
    AppSettings,
    ConfigError,
};

/// 設定ファイル名（プロジェクトルート直下）
pub const CONFIG_FILE_NAME: &str = ".app-i18n.json";

/// プロジェクトの設定を読み込んで検証する
///
/// 設定ファイルが無い場合はデフォルト値を使う。ファイル内で省略された
/// フィールドもデフォルト値になる。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー（全項目分をまとめて返す）
pub fn load_settings(project_root: &Path) -> Result<AppSettings, ConfigError> {
    let config_path = project_root.join(CONFIG_FILE_NAME);

    let settings = if config_path.exists() {
        tracing::debug!("Loading settings from: {:?}", config_path);
        let content = std::fs::read_to_string(&config_path)?;
        serde_json::from_str::<AppSettings>(&content)?
    } else {
        tracing::debug!("Settings file not found, using defaults: {:?}", config_path);
        AppSettings::default()
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!(?settings, "Settings loaded");
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn project_with_settings(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    /// 設定ファイルの値と省略時のデフォルト値が混ざる
    #[rstest]
    fn load_settings_merges_file_with_defaults() {
        let project = project_with_settings(r#"{"locale": "zh", "keySeparator": "/"}"#);

        let settings = load_settings(project.path()).unwrap();

        assert_that!(settings.locale, eq("zh"));
        assert_that!(settings.key_separator, eq("/"));
        assert_that!(settings.fallback_locale, eq("en"));
        assert_that!(settings.mount_selector, eq("#app"));
    }

    /// 設定ファイルが無ければデフォルト値
    #[rstest]
    fn load_settings_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();

        assert_that!(settings.locale, eq("en"));
        assert_that!(settings.style_config, eq("style.config.json"));
    }

    #[rstest]
    fn load_settings_invalid_json() {
        let project = project_with_settings("invalid json");

        let result = load_settings(project.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// 検証エラーは全項目分まとめて返る
    #[rstest]
    fn load_settings_reports_every_validation_error() {
        let project = project_with_settings(r#"{"mountSelector": ".app", "keySeparator": ""}"#);

        let result = load_settings(project.path());

        let Err(ConfigError::ValidationErrors(errors)) = result else {
            panic!("expected validation errors");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field_path.as_str()).collect();
        assert_eq!(fields, vec!["keySeparator", "mountSelector"]);
    }
}
