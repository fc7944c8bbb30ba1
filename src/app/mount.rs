//! Mount targets and mounted applications.

use std::fmt;

use super::{
    App,
    AppContext,
    AppError,
};

/// The page element an application is mounted into, selected by id (`#app`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountTarget {
    id: String,
}

impl MountTarget {
    /// Parses an id selector.
    ///
    /// Only `#id` selectors are supported; the id must be non-empty and made of
    /// ASCII letters, digits, `-` or `_`.
    ///
    /// # Errors
    /// Returns `InvalidSelector` for anything else.
    pub fn parse(selector: &str) -> Result<Self, AppError> {
        let invalid = |reason: &'static str| AppError::InvalidSelector {
            selector: selector.to_string(),
            reason,
        };

        let id = selector.strip_prefix('#').ok_or_else(|| invalid("expected an id selector like \"#app\""))?;
        if id.is_empty() {
            return Err(invalid("the id cannot be empty"));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(invalid("the id may only contain letters, digits, '-' and '_'"));
        }

        Ok(Self { id: id.to_string() })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// An application rendered into its mount target.
#[derive(Debug)]
pub struct MountedApp {
    app: App,
    target: MountTarget,
    markup: String,
}

impl MountedApp {
    pub(super) fn new(app: App, target: MountTarget, markup: String) -> Self {
        Self { app, target, markup }
    }

    #[must_use]
    pub const fn target(&self) -> &MountTarget {
        &self.target
    }

    /// Markup produced by the last render.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        self.app.context()
    }

    /// Renders the root component again, e.g. after a locale switch.
    ///
    /// # Errors
    /// Propagates render errors; the previous markup is kept in that case.
    pub fn rerender(&mut self) -> Result<&str, AppError> {
        self.markup = self.app.render_root(&self.target)?;
        tracing::debug!(mount_target = %self.target, "Application re-rendered");
        Ok(&self.markup)
    }

    /// Detaches the application from its target.
    #[must_use]
    pub fn unmount(self) -> App {
        tracing::debug!(mount_target = %self.target, "Application unmounted");
        self.app
    }
}
