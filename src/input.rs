//! Locale data input: bundle model, file loading and discovery.

pub mod bundle;
pub mod discovery;
pub mod locale_file;
