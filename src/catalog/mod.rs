//! Fixed translation tables and the language pack built from them.

mod de;
mod en;

use std::collections::HashMap;

use crate::locale::Language;

/// Immutable pairing of a display language with its translation table.
///
/// A pack is built once per page load via [`for_language`](Self::for_language)
/// or [`from_runtime_locale`](Self::from_runtime_locale); the two shipped
/// tables are the only ones obtainable, and entries never change after
/// construction.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    language: Language,
    entries: HashMap<&'static str, &'static str>,
}

impl LanguagePack {
    fn new(language: Language, table: &'static [(&'static str, &'static str)]) -> Self {
        Self { language, entries: table.iter().copied().collect() }
    }

    /// Builds the pack for a language from its fixed table.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::new(language, en::TABLE),
            Language::De => Self::new(language, de::TABLE),
        }
    }

    /// Selects the language for the given runtime locale and builds its pack.
    #[must_use]
    pub fn from_runtime_locale(locale: Option<&str>) -> Self {
        Self::for_language(Language::from_runtime_locale(locale))
    }

    /// Language this pack was built for.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Language tag of this pack, `"en"` or `"de"`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.language.tag()
    }

    /// Looks up a translation, falling back to the key itself.
    ///
    /// An unknown key becomes the visible text unchanged rather than an
    /// error, so the lookup is total.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).copied().unwrap_or(key)
    }

    /// Keys of the underlying table, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.keys().copied()
    }
}
