//! Applies a language pack to the page.

use serde::{
    Deserialize,
    Serialize,
};

use crate::catalog::LanguagePack;
use crate::document::Document;

/// Name of the head metadata element carrying the page description.
/// Doubles as the translation key of its content.
const DESCRIPTION_META: &str = "description";

/// How the text of a bound element is derived from the pack.
#[derive(Debug, Clone, Copy)]
enum TargetText {
    /// Translated value of the key, verbatim.
    Value(&'static str),
    /// Translated value of the key with a trailing colon appended.
    ValueWithColon(&'static str),
}

impl TargetText {
    fn resolve(self, pack: &LanguagePack) -> String {
        match self {
            Self::Value(key) => pack.get(key).to_string(),
            Self::ValueWithColon(key) => format!("{}:", pack.get(key)),
        }
    }
}

/// One element of the fixed page contract.
#[derive(Debug, Clone, Copy)]
struct BindTarget {
    /// `id` attribute the page template gives the element.
    id: &'static str,
    /// Source of the text written into the element.
    text: TargetText,
}

/// Elements the page template provides, bound in this order.
const BIND_TARGETS: &[BindTarget] = &[
    BindTarget { id: "fieldset-legend", text: TargetText::Value("header") },
    BindTarget { id: "input-field-1-label", text: TargetText::Value("authority_id") },
    BindTarget { id: "input-field-2-label", text: TargetText::Value("assigned_number") },
    BindTarget { id: "input-field-3-label", text: TargetText::Value("birth_date") },
    BindTarget { id: "input-field-4-label", text: TargetText::Value("expiry_date") },
    BindTarget { id: "input-field-5-label", text: TargetText::Value("issuing_date") },
    BindTarget { id: "button-reset", text: TargetText::Value("reset") },
    BindTarget { id: "button-random", text: TargetText::Value("random") },
    BindTarget { id: "output-field-label", text: TargetText::ValueWithColon("id_card_number") },
    BindTarget { id: "privacy-link", text: TargetText::Value("privacy") },
    BindTarget { id: "privacy-notice", text: TargetText::Value("privacy_notice") },
];

/// Options controlling a binding pass.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BindOptions {
    /// Replace any existing `description` metadata instead of appending
    /// another element.
    ///
    /// Off by default: the shipped page appends unconditionally, which
    /// duplicates the element when binding runs more than once per load.
    pub replace_meta_description: bool,
}

/// Writes the pack's language and strings into the document.
///
/// Mutations happen in a fixed order: language tag, description metadata,
/// then each element of the page contract. An element missing from the
/// document is skipped; an unknown key would surface as the key text
/// itself. The pass cannot fail.
pub fn bind_document(pack: &LanguagePack, document: &mut dyn Document, options: BindOptions) {
    tracing::debug!("Binding translations for language {:?}", pack.language());

    document.set_language_tag(pack.tag());

    if options.replace_meta_description {
        document.remove_meta(DESCRIPTION_META);
    }
    document.append_meta(DESCRIPTION_META, pack.get(DESCRIPTION_META));

    for target in BIND_TARGETS {
        let text = target.text.resolve(pack);
        if !document.set_element_text(target.id, &text) {
            tracing::debug!("No element with id {:?}, skipping", target.id);
        }
    }
}

/// One shot localization for a page load.
///
/// Selects the language for the reported locale, builds its pack and binds
/// it. Intended to run once from the page's content loaded hook; running it
/// again is harmless (see [`BindOptions`] for the metadata policy).
pub fn localize(document: &mut dyn Document, runtime_locale: Option<&str>, options: BindOptions) {
    let pack = LanguagePack::from_runtime_locale(runtime_locale);
    bind_document(&pack, document, options);
}
