//! Application settings.
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub(crate) use types::{
    format_validation_errors,
    validate_globs,
};
pub use types::{
    AppSettings,
    ConfigError,
    LocaleFilesConfig,
    ValidationError,
};
