//! フォームローカライズの統合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use persogenius_i18n::document::MemoryDocument;
use persogenius_i18n::{
    BindOptions,
    localize,
};

const PAGE_ELEMENT_IDS: &[&str] = &[
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

fn create_form_document() -> MemoryDocument {
    let mut document = MemoryDocument::new();
    for id in PAGE_ELEMENT_IDS {
        document.insert_element(*id, "placeholder").unwrap();
    }
    document
}

#[test]
fn test_localize_english_browser() {
    let mut document = create_form_document();

    localize(&mut document, Some("en-US"), BindOptions::default());

    assert_eq!(document.language_tag(), Some("en"));
    assert_eq!(document.element_text("fieldset-legend"), Some("ID Card Number Generator"));
    assert_eq!(document.element_text("input-field-1-label"), Some("Authority ID"));
    assert_eq!(document.element_text("input-field-2-label"), Some("Number"));
    assert_eq!(document.element_text("input-field-3-label"), Some("Birth Date"));
    assert_eq!(document.element_text("input-field-4-label"), Some("Expiry Date"));
    assert_eq!(document.element_text("input-field-5-label"), Some("Issuing Date"));
    assert_eq!(document.element_text("button-reset"), Some("Reset"));
    assert_eq!(document.element_text("button-random"), Some("New"));
    assert_eq!(document.element_text("output-field-label"), Some("ID Card Number:"));
    assert_eq!(document.element_text("privacy-link"), Some("Privacy"));

    let metas = document.metas();
    assert_eq!(metas.len(), 1);
    assert_eq!(metas.first().map(|meta| meta.name.as_str()), Some("description"));
    assert_eq!(
        metas.first().map(|meta| meta.content.as_str()),
        Some("Generate ID card numbers for German ID cards.")
    );
}

#[test]
fn test_localize_german_browser() {
    let mut document = create_form_document();

    localize(&mut document, Some("de-DE"), BindOptions::default());

    assert_eq!(document.language_tag(), Some("de"));
    assert_eq!(document.element_text("fieldset-legend"), Some("Personalausweisnummer Generator"));
    assert_eq!(document.element_text("input-field-1-label"), Some("Behördenkennzahl"));
    assert_eq!(document.element_text("button-reset"), Some("Zurücksetzen"));
    assert_eq!(document.element_text("button-random"), Some("Neu"));
    assert_eq!(document.element_text("output-field-label"), Some("Ausweisnummer:"));
    assert_eq!(document.element_text("privacy-link"), Some("Datenschutz"));

    let metas = document.metas();
    assert_eq!(metas.len(), 1);
    assert_eq!(
        metas.first().map(|meta| meta.content.as_str()),
        Some("Generiere Ausweisnummmern für deutsche Personalausweise.")
    );
}

#[test]
fn test_localize_without_locale_defaults_to_english() {
    let mut document = create_form_document();

    localize(&mut document, None, BindOptions::default());

    assert_eq!(document.language_tag(), Some("en"));
    assert_eq!(document.element_text("button-reset"), Some("Reset"));
}

#[test]
fn test_localize_with_empty_locale_defaults_to_english() {
    let mut document = create_form_document();

    localize(&mut document, Some(""), BindOptions::default());

    assert_eq!(document.language_tag(), Some("en"));
    assert_eq!(document.element_text("button-reset"), Some("Reset"));
}

#[test]
fn test_localize_tolerates_missing_elements() {
    let mut document = MemoryDocument::new();
    for id in PAGE_ELEMENT_IDS {
        if *id != "privacy-notice" {
            document.insert_element(*id, "placeholder").unwrap();
        }
    }

    localize(&mut document, Some("de"), BindOptions::default());

    // The missing element is skipped, everything else is bound
    assert_eq!(document.element_text("privacy-notice"), None);
    assert_eq!(document.element_text("button-reset"), Some("Zurücksetzen"));
    assert_eq!(document.element_text("output-field-label"), Some("Ausweisnummer:"));
    assert_eq!(document.language_tag(), Some("de"));
}

#[test]
fn test_repeated_localize_is_stable_for_elements() {
    let mut document = create_form_document();

    localize(&mut document, Some("en"), BindOptions::default());
    let first_pass: Vec<Option<String>> = PAGE_ELEMENT_IDS
        .iter()
        .map(|id| document.element_text(id).map(str::to_string))
        .collect();

    localize(&mut document, Some("en"), BindOptions::default());
    let second_pass: Vec<Option<String>> = PAGE_ELEMENT_IDS
        .iter()
        .map(|id| document.element_text(id).map(str::to_string))
        .collect();

    assert_eq!(first_pass, second_pass);
    // The description meta is appended again on every pass
    assert_eq!(document.metas().len(), 2);
}

#[test]
fn test_repeated_localize_with_replace_keeps_one_description_meta() {
    let mut document = create_form_document();
    let options = BindOptions { replace_meta_description: true };

    localize(&mut document, Some("en"), options);
    localize(&mut document, Some("de"), options);

    let metas = document.metas();
    assert_eq!(metas.len(), 1);
    assert_eq!(
        metas.first().map(|meta| meta.content.as_str()),
        Some("Generiere Ausweisnummmern für deutsche Personalausweise.")
    );
}
