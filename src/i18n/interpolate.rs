//! Placeholder interpolation for resolved messages.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Values substituted into `{name}` and `{0}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageArgs {
    named: BTreeMap<String, String>,
    list: Vec<String>,
}

impl MessageArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value for `{name}`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.named.insert(name.into(), value.to_string());
        self
    }

    /// Appends a positional value for `{0}`, `{1}`, ...
    #[must_use]
    pub fn push(mut self, value: impl Display) -> Self {
        self.list.push(value.to_string());
        self
    }

    /// Named values shadow positional ones with the same numeric name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.named.get(name) {
            return Some(value.as_str());
        }
        name.parse::<usize>().ok().and_then(|index| self.list.get(index)).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.list.is_empty()
    }
}

/// Replaces `{name}` placeholders in `template`.
///
/// Unknown placeholders are kept verbatim, and an unterminated `{` is
/// copied as-is.
///
/// # Examples
/// ```
/// use app_i18n::i18n::interpolate::{interpolate, MessageArgs};
///
/// let args = MessageArgs::new().with("name", "Ann").push(3);
/// assert_eq!(interpolate("Hello, {name}! You have {0} messages.", &args), "Hello, Ann! You have 3 messages.");
/// assert_eq!(interpolate("{unknown} stays", &args), "{unknown} stays");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &MessageArgs) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((before, after)) = rest.split_once('{') {
        out.push_str(before);
        let Some((name, tail)) = after.split_once('}') else {
            out.push('{');
            out.push_str(after);
            return out;
        };

        if let Some(value) = args.get(name.trim()) {
            out.push_str(value);
        } else {
            out.push('{');
            out.push_str(name);
            out.push('}');
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}
