//! persogenius-i18n
//!
//! PersoGenius フォーム向けの表示言語選択・翻訳バインディングライブラリ

pub mod binder;
pub mod catalog;
pub mod document;
pub mod locale;

mod test_utils;

// 主要な型を再エクスポート
pub use binder::{
    BindOptions,
    bind_document,
    localize,
};
pub use catalog::LanguagePack;
pub use document::Document;
pub use locale::Language;
