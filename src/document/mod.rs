//! Abstraction over the page that binding mutates.

mod memory;

use thiserror::Error;

pub use memory::{
    MemoryDocument,
    MetaTag,
};

/// Errors building a concrete document.
///
/// Binding itself never fails; only seeding a document with elements can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A well formed page never carries two elements with the same id.
    #[error("Duplicate element id: {0}")]
    DuplicateElementId(String),
}

/// Mutation surface of the page a binding pass needs.
///
/// The live browser document is one implementation, provided by the
/// embedding shell; [`MemoryDocument`] is the in-process one used by tests
/// and headless hosts.
pub trait Document {
    /// Sets the document level language attribute.
    fn set_language_tag(&mut self, tag: &str);

    /// Appends a metadata element to the document head.
    ///
    /// Purely additive: existing elements with the same name are left in
    /// place, so repeated calls accumulate duplicates.
    fn append_meta(&mut self, name: &str, content: &str);

    /// Removes every metadata element with the given name.
    fn remove_meta(&mut self, name: &str);

    /// Overwrites the rendered text of the element with the given id.
    ///
    /// Returns `false` when no such element exists. Absence is a normal
    /// outcome, not a failure.
    fn set_element_text(&mut self, id: &str, text: &str) -> bool;
}
