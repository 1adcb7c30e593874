//! Display language variants and runtime locale selection.

/// Supported display languages.
///
/// The set is closed: the page ships English and German text only, and
/// every locale outside the German family falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English, the default.
    En,
    /// German.
    De,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: &'static [Self] = &[Self::En, Self::De];

    /// Language tag written to the document language attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Parses an exact language tag, the inverse of [`tag`](Self::tag).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Selects the display language for a browser reported locale.
    ///
    /// German is chosen when a locale is present and starts with `de`
    /// (case sensitive), so `de`, `de-DE` and `de-AT` all match. `None`,
    /// the empty string and every other locale select English.
    #[must_use]
    pub fn from_runtime_locale(locale: Option<&str>) -> Self {
        let selected = match locale {
            Some(locale) if locale.starts_with("de") => Self::De,
            _ => Self::En,
        };
        tracing::debug!("Selected language {:?} for locale {:?}", selected, locale);
        selected
    }
}
