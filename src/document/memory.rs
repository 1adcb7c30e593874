//! In-memory document implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::{
    Document,
    DocumentError,
};

/// Metadata element recorded by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    /// Value of the `name` attribute.
    pub name: String,
    /// Value of the `content` attribute.
    pub content: String,
}

/// In-memory stand-in for a browser page.
///
/// Holds a language tag, head metadata in insertion order and a flat
/// id to text map of elements. Used by the crate's own tests and by hosts
/// running a binding pass outside a browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    language_tag: Option<String>,
    metas: Vec<MetaTag>,
    elements: HashMap<String, String>,
}

impl MemoryDocument {
    /// Creates an empty document with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an element the page markup would provide.
    ///
    /// # Errors
    /// Returns [`DocumentError::DuplicateElementId`] when the id is already
    /// taken.
    pub fn insert_element(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), DocumentError> {
        match self.elements.entry(id.into()) {
            Entry::Occupied(entry) => Err(DocumentError::DuplicateElementId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(text.into());
                Ok(())
            }
        }
    }

    /// Current document language tag, if one was set.
    #[must_use]
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    /// Text of the element with the given id.
    #[must_use]
    pub fn element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Head metadata elements in insertion order.
    #[must_use]
    pub fn metas(&self) -> &[MetaTag] {
        &self.metas
    }
}

impl Document for MemoryDocument {
    fn set_language_tag(&mut self, tag: &str) {
        self.language_tag = Some(tag.to_string());
    }

    fn append_meta(&mut self, name: &str, content: &str) {
        self.metas.push(MetaTag { name: name.to_string(), content: content.to_string() });
    }

    fn remove_meta(&mut self, name: &str) {
        self.metas.retain(|meta| meta.name != name);
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(existing) => {
                *existing = text.to_string();
                true
            }
            None => false,
        }
    }
}
