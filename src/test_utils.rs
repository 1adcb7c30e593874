//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::document::MemoryDocument;

/// Element ids the shipped page template provides.
pub(crate) const PAGE_ELEMENT_IDS: &[&str] = &[
    "fieldset-legend",
    "input-field-1-label",
    "input-field-2-label",
    "input-field-3-label",
    "input-field-4-label",
    "input-field-5-label",
    "button-reset",
    "button-random",
    "output-field-label",
    "privacy-link",
    "privacy-notice",
];

/// テスト用の MemoryDocument を作成する
///
/// ページテンプレートが提供する全ターゲット要素を配置済みの状態で返します。
/// 各要素のテキストは "placeholder" で初期化されます。
pub(crate) fn form_document() -> MemoryDocument {
    let mut document = MemoryDocument::new();
    for id in PAGE_ELEMENT_IDS {
        document.insert_element(*id, "placeholder").unwrap();
    }
    document
}
