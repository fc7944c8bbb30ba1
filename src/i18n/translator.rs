//! Translator: resolves dotted message keys against the current locale.

use std::cell::RefCell;
use std::rc::Rc;

use super::error::TranslateError;
use super::interpolate::{
    MessageArgs,
    interpolate,
};
use super::plural::select_choice;
use super::registry::LocaleRegistry;
use crate::app::{
    AppContext,
    AppError,
    Plugin,
};
use crate::input::bundle::LookupFailure;
use crate::types::{
    KeyPath,
    LocaleCode,
};

/// Default separator between key path segments.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Name under which the translator is installed as a plugin.
pub const PLUGIN_NAME: &str = "i18n";

/// Resolves message keys for the current locale, falling back to the
/// registry's fallback locale and finally to the raw key.
///
/// The current locale lives in a `RefCell` so one instance can be shared
/// (`Rc<Translator>`) across the UI tree and still be switched. Every
/// resolution reads the locale once at its start.
#[derive(Debug)]
pub struct Translator {
    registry: Rc<LocaleRegistry>,
    current: RefCell<LocaleCode>,
    key_separator: String,
}

impl Translator {
    /// Creates a translator with `locale` active.
    ///
    /// # Errors
    /// Returns `UnknownLocale` if `locale` is not registered.
    pub fn new(registry: LocaleRegistry, locale: &str) -> Result<Self, TranslateError> {
        Self::with_shared_registry(Rc::new(registry), locale)
    }

    /// Like [`Translator::new`], sharing an existing registry.
    ///
    /// # Errors
    /// Returns `UnknownLocale` if `locale` is not registered.
    pub fn with_shared_registry(
        registry: Rc<LocaleRegistry>,
        locale: &str,
    ) -> Result<Self, TranslateError> {
        let current = Self::validate_locale(&registry, locale)?;
        Ok(Self {
            registry,
            current: RefCell::new(current),
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
        })
    }

    /// Replaces the key separator. An empty separator is ignored.
    #[must_use]
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if separator.is_empty() {
            tracing::warn!("Ignoring empty key separator, keeping '{}'", self.key_separator);
        } else {
            self.key_separator = separator;
        }
        self
    }

    fn validate_locale(registry: &LocaleRegistry, locale: &str) -> Result<LocaleCode, TranslateError> {
        if registry.contains(locale) {
            return Ok(LocaleCode::from(locale));
        }
        Err(TranslateError::UnknownLocale {
            requested: locale.to_string(),
            available: registry.locales().map(LocaleCode::as_str).collect::<Vec<_>>().join(", "),
        })
    }

    /// The currently active locale.
    #[must_use]
    pub fn locale(&self) -> LocaleCode {
        self.current.borrow().clone()
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &LocaleCode {
        self.registry.fallback_locale()
    }

    #[must_use]
    pub fn available_locales(&self) -> Vec<LocaleCode> {
        self.registry.locales().cloned().collect()
    }

    #[must_use]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Switches the active locale.
    ///
    /// Switching to the already active locale is a no-op. On error the
    /// previous locale stays active.
    ///
    /// # Errors
    /// Returns `UnknownLocale` if `locale` is not registered.
    pub fn set_locale(&self, locale: &str) -> Result<(), TranslateError> {
        let next = match Self::validate_locale(&self.registry, locale) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(requested = locale, current = %self.locale(), "Rejected locale switch");
                return Err(err);
            }
        };

        let previous = self.current.replace(next);
        if previous != locale {
            tracing::info!(from = %previous, to = locale, "Locale switched");
        }
        Ok(())
    }

    fn lookup_in(&self, locale: &LocaleCode, key: &str) -> Result<&str, LookupFailure> {
        let bundle = self.registry.get(locale.as_str()).ok_or(LookupFailure::Missing)?;
        bundle.lookup(KeyPath::new(key, &self.key_separator))
    }

    /// Resolves `key` in the current locale, then in the fallback locale.
    ///
    /// # Errors
    /// When neither locale has a message at `key`, returns the current
    /// locale's failure: `KeyNotFound` or `MalformedPath`.
    pub fn try_resolve(&self, key: &str) -> Result<&str, TranslateError> {
        let locale = self.locale();

        let failure = match self.lookup_in(&locale, key) {
            Ok(text) => return Ok(text),
            Err(failure) => failure,
        };
        tracing::debug!(key, %locale, ?failure, "Message not resolved in current locale");

        let fallback = self.registry.fallback_locale();
        if *fallback != locale {
            match self.lookup_in(fallback, key) {
                Ok(text) => {
                    tracing::debug!(key, %fallback, "Message resolved from fallback locale");
                    return Ok(text);
                }
                Err(fallback_failure) => {
                    tracing::debug!(key, %fallback, failure = ?fallback_failure, "Message not resolved in fallback locale");
                }
            }
        }

        let key = key.to_string();
        Err(match failure {
            LookupFailure::Missing => TranslateError::KeyNotFound { key, locale },
            LookupFailure::Malformed => TranslateError::MalformedPath { key, locale },
        })
    }

    /// Resolves `key`, returning the key itself when no message exists.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        match self.try_resolve(key) {
            Ok(text) => text.to_string(),
            Err(err) => {
                tracing::warn!("{err}; showing the key instead");
                key.to_string()
            }
        }
    }

    /// Returns true if `key` names a message in the current locale, without fallback.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.lookup_in(&self.locale(), key).is_ok()
    }

    /// Resolves `key` and fills its placeholders from `args`.
    #[must_use]
    pub fn translate(&self, key: &str, args: &MessageArgs) -> String {
        interpolate(&self.resolve(key), args)
    }

    /// Resolves `key`, selects the plural choice for `count` and fills its
    /// placeholders. `{count}` and `{n}` default to `count`.
    #[must_use]
    pub fn translate_plural(&self, key: &str, count: usize, args: &MessageArgs) -> String {
        let message = self.resolve(key);
        let choice = select_choice(&message, count);

        let mut args = args.clone();
        for name in ["count", "n"] {
            if !args.contains(name) {
                args = args.with(name, count);
            }
        }
        interpolate(choice, &args)
    }
}

impl Plugin for Translator {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn install(self: Box<Self>, ctx: &mut AppContext) -> Result<(), AppError> {
        tracing::debug!(locale = %self.locale(), fallback = %self.fallback_locale(), "Installing translator");
        ctx.provide(Rc::new(*self))
    }
}

/// Returns the translator installed in the application.
///
/// # Errors
/// Returns `MissingCapability` if no translator was installed.
pub fn use_i18n(ctx: &AppContext) -> Result<Rc<Translator>, AppError> {
    ctx.require::<Translator>()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::app::App;
    use crate::test_utils::translator;

    fn en_zh(locale: &str) -> Translator {
        translator(
            &[
                (
                    "en",
                    json!({
                        "a": { "b": "X" },
                        "greeting": { "hello": "Hello", "welcome": "Welcome, {name}!" },
                        "onlyEn": "English only",
                        "apple": "no apples | one apple | {count} apples",
                        "deep": { "leaf": "fallback leaf" }
                    }),
                ),
                (
                    "zh",
                    json!({
                        "a": { "b": "Y" },
                        "greeting": { "hello": "你好", "welcome": "欢迎, {name}!" },
                        "deep": "not a group here"
                    }),
                ),
            ],
            "en",
            locale,
        )
    }

    #[rstest]
    #[case::en_leaf("en", "greeting.hello", "Hello")]
    #[case::zh_leaf("zh", "greeting.hello", "你好")]
    #[case::zh_other_leaf("zh", "a.b", "Y")]
    #[case::zh_falls_back("zh", "onlyEn", "English only")]
    #[case::malformed_falls_back("zh", "deep.leaf", "fallback leaf")]
    #[case::missing_everywhere("zh", "a.c", "a.c")]
    #[case::missing_in_fallback_locale("en", "nothing.here", "nothing.here")]
    #[case::group_key_is_placeholder("en", "greeting", "greeting")]
    #[case::through_leaf_is_placeholder("en", "onlyEn.more", "onlyEn.more")]
    fn test_resolve(#[case] locale: &str, #[case] key: &str, #[case] expected: &str) {
        let t = en_zh(locale);

        assert_that!(t.resolve(key), eq(expected));
    }

    #[googletest::test]
    fn scenario_switch_locale_changes_resolution() {
        let t = en_zh("zh");
        expect_that!(t.resolve("a.b"), eq("Y"));

        t.set_locale("en").unwrap();

        expect_that!(t.resolve("a.b"), eq("X"));
        expect_that!(t.locale().as_str(), eq("en"));
    }

    #[googletest::test]
    fn round_trip_single_locale() {
        let t = translator(&[("en", json!({"greeting": {"hello": "Hello"}}))], "en", "en");

        expect_that!(t.resolve("greeting.hello"), eq("Hello"));
    }

    #[googletest::test]
    fn set_locale_is_idempotent() {
        let t = en_zh("en");

        expect_that!(t.set_locale("zh"), ok(eq(&())));
        expect_that!(t.set_locale("zh"), ok(eq(&())));
        expect_that!(t.locale().as_str(), eq("zh"));
    }

    #[googletest::test]
    fn set_unknown_locale_keeps_current() {
        let t = en_zh("zh");

        let result = t.set_locale("fr");

        expect_that!(
            result,
            err(eq(&TranslateError::UnknownLocale {
                requested: "fr".to_string(),
                available: "en, zh".to_string(),
            }))
        );
        expect_that!(t.locale().as_str(), eq("zh"));
    }

    #[googletest::test]
    fn new_with_unknown_locale_fails() {
        let registry = crate::test_utils::registry(&[("en", json!({"a": "b"}))], "en");

        let result = Translator::new(registry, "zh");

        assert!(matches!(result, Err(TranslateError::UnknownLocale { .. })));
    }

    #[googletest::test]
    fn try_resolve_reports_current_locale_failure() {
        let t = en_zh("zh");

        expect_that!(
            t.try_resolve("a.c"),
            err(eq(&TranslateError::KeyNotFound {
                key: "a.c".to_string(),
                locale: LocaleCode::from("zh"),
            }))
        );
        expect_that!(
            t.try_resolve("greeting"),
            err(eq(&TranslateError::MalformedPath {
                key: "greeting".to_string(),
                locale: LocaleCode::from("zh"),
            }))
        );
        expect_that!(t.try_resolve("onlyEn").ok(), some(eq("English only")));
    }

    #[rstest]
    #[case("en", "onlyEn", true)]
    #[case("zh", "onlyEn", false)]
    #[case("zh", "greeting.hello", true)]
    #[case("zh", "greeting", false)]
    fn test_exists_ignores_fallback(#[case] locale: &str, #[case] key: &str, #[case] expected: bool) {
        assert_that!(en_zh(locale).exists(key), eq(expected));
    }

    #[rstest]
    #[case("en", "Welcome, Ann!")]
    #[case("zh", "欢迎, Ann!")]
    fn test_translate_with_named_args(#[case] locale: &str, #[case] expected: &str) {
        let t = en_zh(locale);

        assert_that!(
            t.translate("greeting.welcome", &MessageArgs::new().with("name", "Ann")),
            eq(expected)
        );
    }

    #[rstest]
    #[case(0, "no apples")]
    #[case(1, "one apple")]
    #[case(5, "5 apples")]
    fn test_translate_plural(#[case] count: usize, #[case] expected: &str) {
        let t = en_zh("zh");

        assert_that!(t.translate_plural("apple", count, &MessageArgs::new()), eq(expected));
    }

    #[googletest::test]
    fn translate_plural_explicit_count_wins() {
        let t = en_zh("en");

        let text = t.translate_plural("apple", 5, &MessageArgs::new().with("count", "five"));

        expect_that!(text, eq("five apples"));
    }

    #[googletest::test]
    fn custom_key_separator() {
        let t = en_zh("en").with_key_separator("/");

        expect_that!(t.resolve("greeting/hello"), eq("Hello"));
        expect_that!(t.resolve("greeting.hello"), eq("greeting.hello"));
    }

    #[googletest::test]
    fn empty_key_separator_is_ignored() {
        let t = en_zh("en").with_key_separator("");

        expect_that!(t.key_separator(), eq("."));
    }

    #[googletest::test]
    fn available_locales_are_sorted() {
        let t = en_zh("zh");

        assert_eq!(t.available_locales(), vec![LocaleCode::from("en"), LocaleCode::from("zh")]);
        expect_that!(t.fallback_locale().as_str(), eq("en"));
    }

    #[googletest::test]
    fn installed_translator_is_shared_with_components() {
        let mut app = App::new(|ctx: &AppContext| -> std::result::Result<String, AppError> {
            let t = use_i18n(ctx)?;
            Ok(format!("<h1>{}</h1>", t.resolve("greeting.hello")))
        });
        app.use_plugin(en_zh("en")).unwrap();

        let mut mounted = app.mount("#app").unwrap();
        expect_that!(mounted.markup(), eq("<div id=\"app\"><h1>Hello</h1></div>"));

        use_i18n(mounted.context()).unwrap().set_locale("zh").unwrap();
        let markup = mounted.rerender().unwrap().to_string();

        expect_that!(markup, eq("<div id=\"app\"><h1>你好</h1></div>"));
    }

    #[googletest::test]
    fn use_i18n_without_plugin_fails() {
        let ctx = AppContext::new();

        assert!(matches!(use_i18n(&ctx), Err(AppError::MissingCapability(_))));
    }
}
