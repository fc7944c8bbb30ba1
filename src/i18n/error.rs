use thiserror::Error;

use crate::types::LocaleCode;

/// Errors surfaced by the translator.
///
/// `KeyNotFound` and `MalformedPath` are normally recovered by
/// [`Translator::resolve`](super::translator::Translator::resolve), which
/// shows the raw key instead. `UnknownLocale` is returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A path segment has no entry in the locale's bundle.
    #[error("Translation key '{key}' not found in locale '{locale}'")]
    KeyNotFound { key: String, locale: LocaleCode },

    /// The path descends through a message, or names a group instead of a message.
    #[error("Translation key '{key}' does not name a message in locale '{locale}'")]
    MalformedPath { key: String, locale: LocaleCode },

    /// The requested locale is not registered.
    #[error("Unknown locale '{requested}' (available: {available})")]
    UnknownLocale { requested: String, available: String },
}
