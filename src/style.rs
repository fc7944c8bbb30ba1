//! Style build configuration: dark mode, content globs, theme extensions and
//! generator plugins.
mod loader;
mod matcher;
mod types;

pub use loader::load_style_config;
pub use matcher::{
    ContentMatcher,
    MatcherError,
};
pub use types::{
    DarkMode,
    StyleConfig,
    StyleConfigError,
    ThemeConfig,
};
