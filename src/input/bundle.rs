//! Locale bundle: the tree of translatable strings for one locale.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::KeyPath;

/// Errors raised while turning a JSON document into a [`LocaleBundle`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("Locale document root must be an object, found {kind}")]
    RootNotObject { kind: &'static str },

    #[error("Unsupported value at '{path}': expected a string or an object, found {kind}")]
    UnsupportedValue { path: String, kind: &'static str },

    #[error("Locale document contains no messages")]
    Empty,

    #[error("Failed to parse locale document: {0}")]
    Parse(String),
}

/// Why a key path failed to resolve inside a single bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// A segment has no entry.
    Missing,
    /// The path tried to descend through a message, or stopped on a group.
    Malformed,
}

/// One entry of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Group(LocaleBundle),
}

/// Immutable message tree for one locale.
///
/// The tree owns its children, so it cannot contain cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBundle {
    entries: BTreeMap<String, Message>,
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl LocaleBundle {
    /// Builds a bundle from a parsed JSON document.
    ///
    /// The root must be a non-empty object. Leaves must be strings; numbers,
    /// booleans, nulls and arrays are rejected with the dotted path of the
    /// offending entry.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use app_i18n::input::bundle::LocaleBundle;
    ///
    /// let bundle = LocaleBundle::from_json(&json!({
    ///     "greeting": { "hello": "Hello" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(bundle.leaf_count(), 1);
    /// ```
    pub fn from_json(json: &Value) -> Result<Self, BundleError> {
        let Value::Object(map) = json else {
            return Err(BundleError::RootNotObject { kind: value_kind(json) });
        };

        let bundle = Self::from_object(map, None)?;
        if bundle.leaf_count() == 0 {
            return Err(BundleError::Empty);
        }
        Ok(bundle)
    }

    pub fn from_json_str(text: &str) -> Result<Self, BundleError> {
        let json: Value =
            serde_json::from_str(text).map_err(|e| BundleError::Parse(e.to_string()))?;
        Self::from_json(&json)
    }

    fn from_object(
        map: &serde_json::Map<String, Value>,
        prefix: Option<&str>,
    ) -> Result<Self, BundleError> {
        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
            let message = match value {
                Value::String(text) => Message::Text(text.clone()),
                Value::Object(child) => Message::Group(Self::from_object(child, Some(&full_key))?),
                other => {
                    return Err(BundleError::UnsupportedValue {
                        path: full_key,
                        kind: value_kind(other),
                    });
                }
            };
            entries.insert(key.clone(), message);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.entries.get(key)
    }

    /// Descends the tree along the path segments.
    pub fn lookup(&self, path: KeyPath<'_>) -> Result<&str, LookupFailure> {
        let mut current = self;
        let mut segments = path.segments().peekable();

        while let Some(segment) = segments.next() {
            let is_last = segments.peek().is_none();
            match current.entries.get(segment) {
                None => return Err(LookupFailure::Missing),
                Some(Message::Text(text)) if is_last => return Ok(text),
                Some(Message::Text(_)) => return Err(LookupFailure::Malformed),
                Some(Message::Group(_)) if is_last => return Err(LookupFailure::Malformed),
                Some(Message::Group(child)) => current = child,
            }
        }

        // `split` always yields at least one segment
        Err(LookupFailure::Missing)
    }

    /// Number of message strings in the whole tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|message| match message {
                Message::Text(_) => 1,
                Message::Group(child) => child.leaf_count(),
            })
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }

    /// Flattens the tree into a `separator`-joined key map.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use app_i18n::input::bundle::LocaleBundle;
    ///
    /// let bundle = LocaleBundle::from_json(&json!({
    ///     "common": { "hello": "Hello", "goodbye": "Goodbye" }
    /// }))
    /// .unwrap();
    ///
    /// let flattened = bundle.flatten(".");
    /// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
    /// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
    /// ```
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        self.flatten_into(separator, None, &mut result);
        result
    }

    fn flatten_into(
        &self,
        separator: &str,
        prefix: Option<&str>,
        result: &mut BTreeMap<String, String>,
    ) {
        for (key, message) in &self.entries {
            let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
            match message {
                Message::Text(text) => {
                    result.insert(full_key, text.clone());
                }
                Message::Group(child) => child.flatten_into(separator, Some(&full_key), result),
            }
        }
    }

    /// Merges `other` into this bundle. Leaves of `other` win.
    ///
    /// Returns the `.`-joined paths whose existing entry was replaced.
    pub fn merge(&mut self, other: Self) -> Vec<String> {
        let mut overridden = Vec::new();
        self.merge_at(other, None, &mut overridden);
        overridden
    }

    fn merge_at(&mut self, other: Self, prefix: Option<&str>, overridden: &mut Vec<String>) {
        for (key, incoming) in other.entries {
            let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
            if let Some(existing) = self.entries.get_mut(&key) {
                match (existing, incoming) {
                    (Message::Group(existing), Message::Group(child)) => {
                        existing.merge_at(child, Some(&full_key), overridden);
                    }
                    (slot, incoming) => {
                        overridden.push(full_key);
                        *slot = incoming;
                    }
                }
            } else {
                self.entries.insert(key, incoming);
            }
        }
    }
}
