//! Core types used throughout the project.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};

/// Primary language subtags recognized in locale file paths (ISO 639-1 plus
/// a few common three-letter codes), lowercase.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
        "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
        "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
        "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
        "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
        "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
        "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
        "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
        "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
        "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
        "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
        "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
        "yo", "za", "zh", "zu", "fil", "haw", "yue",
    ]
    .into_iter()
    .collect()
});

/// A locale code such as `en`, `zh` or `pt-BR`.
///
/// Codes are kept exactly as given; [`LocaleCode::normalized`] is only used
/// when recognizing codes in file paths ([`LocaleCode::is_known_locale`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase with `_` replaced by `-` (`en_US` → `en-us`).
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase().replace('_', "-")
    }

    /// Returns true if the text is a language tag with a known primary
    /// language: the primary subtag (compared in [`LocaleCode::normalized`]
    /// form) must be a known language, followed by up to two alphanumeric
    /// subtags of 2-8 characters, separated by `-` or `_`.
    ///
    /// `en`, `en_US` and `zh-Hant-TW` qualify; `ui`, `nav` and `common` do not.
    #[must_use]
    pub fn is_known_locale(text: &str) -> bool {
        let normalized = Self::new(text).normalized();
        let mut parts = normalized.split('-');
        let Some(primary) = parts.next() else {
            return false;
        };
        if !LANGUAGE_CODES.contains(primary) {
            return false;
        }

        let mut count = 0;
        for part in parts {
            count += 1;
            if count > 2
                || !(2..=8).contains(&part.len())
                || !part.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A message key split into path segments.
///
/// Empty segments are preserved: `"a..b"` has three segments, the middle one
/// empty, so it only resolves if a bundle literally contains an empty key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPath<'a> {
    raw: &'a str,
    separator: &'a str,
}

impl<'a> KeyPath<'a> {
    #[must_use]
    pub const fn new(raw: &'a str, separator: &'a str) -> Self {
        Self { raw, separator }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(self) -> impl Iterator<Item = &'a str> {
        self.raw.split(self.separator)
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
