//! Test helpers shared by several test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use serde_json::Value;

use crate::i18n::registry::LocaleRegistry;
use crate::i18n::translator::Translator;
use crate::input::bundle::LocaleBundle;
use crate::types::LocaleCode;

/// Builds a bundle from a JSON literal.
pub(crate) fn bundle(json: &Value) -> LocaleBundle {
    LocaleBundle::from_json(json).unwrap()
}

/// Builds a registry from `(locale, json)` pairs.
pub(crate) fn registry(locales: &[(&str, Value)], fallback: &str) -> LocaleRegistry {
    LocaleRegistry::build(
        locales.iter().map(|(code, json)| (LocaleCode::from(*code), bundle(json))),
        fallback,
    )
    .unwrap()
}

/// Builds a translator with `.` as key separator.
pub(crate) fn translator(locales: &[(&str, Value)], fallback: &str, locale: &str) -> Translator {
    Translator::new(registry(locales, fallback), locale).unwrap()
}
