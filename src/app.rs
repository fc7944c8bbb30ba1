//! Application shell: plugins, shared context, components and mounting.
//!
//! The application is set up explicitly: plugins are installed with
//! [`App::use_plugin`], which calls [`Plugin::install`] with the
//! application's [`AppContext`]. Components receive that context whenever
//! they are rendered, so shared capabilities such as the translator are
//! passed down instead of living in global state.

mod context;
mod mount;

use std::collections::BTreeSet;

pub use context::AppContext;
pub use mount::{
    MountTarget,
    MountedApp,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid mount selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: &'static str },

    #[error("Capability '{0}' is already provided")]
    DuplicateCapability(&'static str),

    #[error("Capability '{0}' is not provided; install the plugin that provides it first")]
    MissingCapability(&'static str),
}

/// An extension installed into an application during setup.
pub trait Plugin {
    /// Name used to skip repeated installation of the same plugin.
    fn name(&self) -> &str;

    /// Registers the plugin's capabilities.
    ///
    /// # Errors
    /// Returns error if a capability conflicts with one already provided.
    fn install(self: Box<Self>, ctx: &mut AppContext) -> Result<(), AppError>;
}

/// A renderable piece of the UI tree.
pub trait Component {
    /// Renders the component's markup.
    ///
    /// # Errors
    /// Returns error if a required capability is missing.
    fn render(&self, ctx: &AppContext) -> Result<String, AppError>;
}

impl<F> Component for F
where
    F: Fn(&AppContext) -> Result<String, AppError>,
{
    fn render(&self, ctx: &AppContext) -> Result<String, AppError> {
        self(ctx)
    }
}

/// An application instance: a root component plus its installed plugins.
pub struct App {
    root: Box<dyn Component>,
    context: AppContext,
    installed: BTreeSet<String>,
}

impl App {
    #[must_use]
    pub fn new(root: impl Component + 'static) -> Self {
        Self { root: Box::new(root), context: AppContext::new(), installed: BTreeSet::new() }
    }

    /// Installs a plugin. A plugin whose name is already installed is skipped.
    ///
    /// # Errors
    /// Propagates the plugin's install error.
    pub fn use_plugin(&mut self, plugin: impl Plugin + 'static) -> Result<&mut Self, AppError> {
        let name = plugin.name().to_string();
        if self.installed.contains(&name) {
            tracing::warn!(plugin = %name, "Plugin has already been installed, skipping");
            return Ok(self);
        }

        Box::new(plugin).install(&mut self.context)?;
        tracing::debug!(plugin = %name, "Plugin installed");
        self.installed.insert(name);
        Ok(self)
    }

    #[must_use]
    pub const fn context(&self) -> &AppContext {
        &self.context
    }

    /// Names of the installed plugins, sorted.
    pub fn plugins(&self) -> impl Iterator<Item = &str> {
        self.installed.iter().map(String::as_str)
    }

    /// Renders the root component into `selector`.
    ///
    /// # Errors
    /// - `selector` is not a valid id selector
    /// - the root component fails to render
    pub fn mount(self, selector: &str) -> Result<MountedApp, AppError> {
        let target = MountTarget::parse(selector)?;
        let markup = self.render_root(&target)?;
        tracing::info!(mount_target = %target, plugins = self.installed.len(), "Application mounted");
        Ok(MountedApp::new(self, target, markup))
    }

    fn render_root(&self, target: &MountTarget) -> Result<String, AppError> {
        let inner = self.root.render(&self.context)?;
        Ok(format!("<div id=\"{}\">{inner}</div>", target.id()))
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("root", &"<dyn Component>")
            .field("context", &self.context)
            .field("installed", &self.installed)
            .finish()
    }
}
