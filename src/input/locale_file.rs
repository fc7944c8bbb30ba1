//! Locale file input definitions

use std::path::Path;

use thiserror::Error;

use super::bundle::{
    BundleError,
    LocaleBundle,
};
use crate::types::LocaleCode;

/// Directory names that group locale files without naming a locale.
const COMMON_PARENTS: [&str; 6] = ["locales", "messages", "translations", "i18n", "lang", "langs"];

#[derive(Error, Debug)]
pub enum LocaleFileError {
    #[error("Failed to read locale file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot detect a locale code from path '{0}'")]
    UnknownLocale(String),

    #[error("Invalid locale file '{path}': {source}")]
    Invalid {
        path: String,
        #[source]
        source: BundleError,
    },
}

/// Detect locale from file path heuristically
///
/// The file stem wins when it is a known locale code, otherwise the parent
/// directory name is tried. Stems such as `ui` or `nav` are namespaces.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `messages/zh-Hans.json` → `zh-Hans`
/// - `locales/en_US/common.json` → `en_US`
/// - `locales/zh/nav.json` → `zh`
/// - `locales/common.json` → `None`
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<LocaleCode> {
    let file_stem = file_path.file_stem()?.to_string_lossy();
    if LocaleCode::is_known_locale(&file_stem) {
        return Some(LocaleCode::new(file_stem.as_ref()));
    }

    let parent_name = file_path.parent()?.file_name()?.to_string_lossy();
    if COMMON_PARENTS.contains(&parent_name.to_lowercase().as_str()) {
        return None;
    }
    LocaleCode::is_known_locale(&parent_name).then(|| LocaleCode::new(parent_name.as_ref()))
}

/// Load a locale file into its detected locale code and bundle.
///
/// # Errors
/// Returns error if the file cannot be read, the locale cannot be detected
/// from the path, or the content is not a valid locale document.
pub fn load_locale_file(file_path: &Path) -> Result<(LocaleCode, LocaleBundle), LocaleFileError> {
    let path = file_path.to_string_lossy().to_string();

    let locale = detect_locale_from_path(file_path)
        .ok_or_else(|| LocaleFileError::UnknownLocale(path.clone()))?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| LocaleFileError::Read { path: path.clone(), source })?;

    let bundle = LocaleBundle::from_json_str(&content)
        .map_err(|source| LocaleFileError::Invalid { path, source })?;

    tracing::debug!(%locale, file = %file_path.display(), messages = bundle.leaf_count(), "Loaded locale file");
    Ok((locale, bundle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;
    use std::path::Path;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    // File stem is the locale
    #[case("/path/to/locales/en.json", Some("en"))]
    #[case("/path/to/locales/zh.json", Some("zh"))]
    #[case("/path/to/messages/zh-Hans.json", Some("zh-Hans"))]
    #[case("/path/to/locales/pt_BR.json", Some("pt_BR"))]
    // Directory is the locale, file stem is a namespace
    #[case("/path/to/locales/en/common.json", Some("en"))]
    #[case("/path/to/locales/en_US/common.json", Some("en_US"))]
    #[case("/path/to/locales/en/ui.json", Some("en"))]
    #[case("/path/to/locales/zh/nav.json", Some("zh"))]
    // Neither
    #[case("/path/to/locales/common.json", None)]
    #[case("/path/to/i18n/messages.json", None)]
    #[case("/path/to/locales/hoge/common.json", None)]
    #[case("/path/to/locales/ui.json", None)]
    fn test_detect_locale_from_path(#[case] path: &str, #[case] expected: Option<&str>) {
        let result = detect_locale_from_path(Path::new(path));
        assert_eq!(result.as_ref().map(LocaleCode::as_str), expected);
    }

    #[googletest::test]
    fn test_load_locale_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zh.json");
        fs::write(&path, r#"{"greeting": {"hello": "你好"}}"#).unwrap();

        let (locale, bundle) = load_locale_file(&path).unwrap();

        expect_that!(locale.as_str(), eq("zh"));
        expect_that!(bundle.flatten(".").get("greeting.hello"), some(eq(&"你好".to_string())));
    }

    #[googletest::test]
    fn test_load_locale_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_locale_file(&temp_dir.path().join("en.json"));

        assert!(matches!(result, Err(LocaleFileError::Read { .. })));
    }

    #[googletest::test]
    fn test_load_locale_file_invalid_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, r#"{"count": 3}"#).unwrap();

        let result = load_locale_file(&path);

        assert!(matches!(
            result,
            Err(LocaleFileError::Invalid { source: BundleError::UnsupportedValue { .. }, .. })
        ));
    }

    #[googletest::test]
    fn test_load_locale_file_undetectable_locale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("strings.json");
        fs::write(&path, r#"{"a": "b"}"#).unwrap();

        let result = load_locale_file(&path);

        assert!(matches!(result, Err(LocaleFileError::UnknownLocale(_))));
    }
}
