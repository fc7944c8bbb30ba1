//! アプリケーションの起動処理
//!
//! 設定の読み込み → ロケールファイルの検出と読み込み → レジストリ構築 →
//! Translator 作成 → プラグインのインストール → マウント

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::app::{
    App,
    AppContext,
    AppError,
    MountedApp,
};
use crate::config::{
    AppSettings,
    ConfigError,
    load_settings,
};
use crate::i18n::{
    LocaleRegistry,
    RegistryError,
    TranslateError,
    Translator,
    use_i18n,
};
use crate::input::bundle::LocaleBundle;
use crate::input::discovery::{
    DiscoveryError,
    discover_locale_files,
};
use crate::input::locale_file::{
    LocaleFileError,
    load_locale_file,
};
use crate::style::{
    DarkMode,
    StyleConfig,
    StyleConfigError,
    load_style_config,
};
use crate::types::LocaleCode;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    LocaleFile(#[from] LocaleFileError),

    #[error("No locale files matched '{pattern}' under {root}")]
    NoLocaleFiles { pattern: String, root: PathBuf },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Style(#[from] StyleConfigError),

    #[error(transparent)]
    App(#[from] AppError),
}

/// Discovers and loads every locale file under `root`.
///
/// Files that map to the same locale are merged in path order; a later file
/// overrides conflicting messages of an earlier one.
///
/// # Errors
/// - invalid patterns
/// - no matching file
/// - unreadable or invalid locale file
/// - registry invariants (see [`LocaleRegistry::build`])
pub fn load_registry(root: &Path, settings: &AppSettings) -> Result<LocaleRegistry, BootstrapError> {
    let pattern = &settings.locale_files.file_pattern;
    let files = discover_locale_files(root, pattern, &settings.locale_files.exclude_patterns)?;
    if files.is_empty() {
        return Err(BootstrapError::NoLocaleFiles {
            pattern: pattern.clone(),
            root: root.to_path_buf(),
        });
    }

    let mut bundles: BTreeMap<LocaleCode, LocaleBundle> = BTreeMap::new();
    for file in &files {
        let (locale, bundle) = load_locale_file(file)?;
        tracing::debug!(%locale, file = %file.display(), messages = bundle.leaf_count(), "Loaded locale file");

        if let Some(existing) = bundles.get_mut(&locale) {
            let overridden = existing.merge(bundle);
            if !overridden.is_empty() {
                tracing::warn!(
                    %locale,
                    file = %file.display(),
                    keys = ?overridden,
                    "Locale file overrides messages of an earlier file"
                );
            }
        } else {
            bundles.insert(locale, bundle);
        }
    }

    Ok(LocaleRegistry::build(bundles, settings.fallback_locale.as_str())?)
}

/// Root component: every known message key rendered through the translator.
fn render_messages(ctx: &AppContext) -> Result<String, AppError> {
    let i18n = use_i18n(ctx)?;
    let dark_mode = ctx.get::<StyleConfig>().map_or_else(DarkMode::default, |style| style.dark_mode);

    let separator = i18n.key_separator();
    let keys: BTreeSet<String> = i18n
        .registry()
        .locales()
        .filter_map(|locale| i18n.registry().get(locale.as_str()))
        .flat_map(|bundle| bundle.flatten(separator).into_keys())
        .collect();

    let body: String = keys
        .iter()
        .map(|key| {
            format!("<p data-key=\"{}\">{}</p>", escape_html(key), escape_html(&i18n.resolve(key)))
        })
        .collect();

    let mode = match dark_mode {
        DarkMode::Class => "class",
        DarkMode::Media => "media",
    };
    Ok(format!("<main lang=\"{}\" data-dark-mode=\"{mode}\">{body}</main>", i18n.locale()))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds the application for the project at `root` and mounts it.
///
/// # Errors
/// Any failure of the steps above, see [`BootstrapError`].
pub fn bootstrap(root: &Path) -> Result<MountedApp, BootstrapError> {
    tracing::info!(root = %root.display(), "Bootstrapping application");

    let settings = load_settings(root)?;

    let registry = load_registry(root, &settings)?;
    let translator =
        Translator::new(registry, &settings.locale)?.with_key_separator(settings.key_separator.as_str());
    let style = load_style_config(&root.join(&settings.style_config))?;

    let mut app = App::new(render_messages);
    app.use_plugin(translator)?.use_plugin(style)?;

    Ok(app.mount(&settings.mount_selector)?)
}
