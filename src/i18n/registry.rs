//! Locale registry: every loaded bundle keyed by locale code.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::input::bundle::LocaleBundle;
use crate::types::LocaleCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("At least one locale must be registered")]
    NoLocales,

    #[error("Locale '{0}' has no messages")]
    EmptyBundle(LocaleCode),

    #[error("Locale '{0}' is given more than once; merge its bundles first")]
    DuplicateLocale(LocaleCode),

    #[error("Fallback locale '{fallback}' is not registered (available: {available})")]
    UnknownFallback { fallback: LocaleCode, available: String },
}

/// Read-only mapping from locale code to bundle, with a designated fallback.
///
/// Invariants upheld by [`LocaleRegistry::build`]:
/// - at least one locale is registered
/// - no bundle is empty
/// - the fallback locale is registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    bundles: BTreeMap<LocaleCode, LocaleBundle>,
    fallback: LocaleCode,
}

impl LocaleRegistry {
    /// Builds the registry.
    ///
    /// # Errors
    /// - no bundles given
    /// - the same locale given twice
    /// - a bundle without any message
    /// - `fallback` not among the given locales
    pub fn build(
        bundles: impl IntoIterator<Item = (LocaleCode, LocaleBundle)>,
        fallback: impl Into<LocaleCode>,
    ) -> Result<Self, RegistryError> {
        let fallback = fallback.into();

        let mut collected: BTreeMap<LocaleCode, LocaleBundle> = BTreeMap::new();
        for (locale, bundle) in bundles {
            if collected.contains_key(&locale) {
                return Err(RegistryError::DuplicateLocale(locale));
            }
            collected.insert(locale, bundle);
        }
        let bundles = collected;

        if bundles.is_empty() {
            return Err(RegistryError::NoLocales);
        }

        if let Some((locale, _)) = bundles.iter().find(|(_, bundle)| bundle.is_empty()) {
            return Err(RegistryError::EmptyBundle(locale.clone()));
        }

        if !bundles.contains_key(&fallback) {
            let available =
                bundles.keys().map(LocaleCode::as_str).collect::<Vec<_>>().join(", ");
            return Err(RegistryError::UnknownFallback { fallback, available });
        }

        tracing::debug!(
            locales = ?bundles.keys().map(LocaleCode::as_str).collect::<Vec<_>>(),
            %fallback,
            "Locale registry built"
        );
        Ok(Self { bundles, fallback })
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&LocaleBundle> {
        self.bundles.get(locale)
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Registered locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.bundles.keys()
    }

    #[must_use]
    pub const fn fallback_locale(&self) -> &LocaleCode {
        &self.fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Always false for a built registry; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
