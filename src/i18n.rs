//! Locale-keyed message resolution.

pub mod error;
pub mod interpolate;
pub mod plural;
pub mod registry;
pub mod translator;

pub use error::TranslateError;
pub use interpolate::MessageArgs;
pub use registry::{
    LocaleRegistry,
    RegistryError,
};
pub use translator::{
    Translator,
    use_i18n,
};
