//! app-i18n
//!
//! ロケール辞書からメッセージを解決する i18n レイヤーと、それをプラグインとして
//! 組み込むアプリケーションの起動処理

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod i18n;
pub mod input;
pub mod style;
pub mod types;

mod test_utils;

pub use app::{
    App,
    AppContext,
    Plugin,
};
pub use bootstrap::{
    BootstrapError,
    bootstrap,
};
pub use i18n::{
    LocaleRegistry,
    Translator,
};
