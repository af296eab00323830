//! Filters that narrow a document's token selection.
//!
//! A [`Filter`] receives a [`Document`] and returns a sub-document of it.
//! Filters only ever shrink the selection, so a chain of filters keeps the
//! intersection of what every filter keeps.
//!
//! # Available Filters
//!
//! - [`BoolFilter`] - keeps tokens for which a per-token predicate holds
//! - [`PropertyFilter`] - keeps tokens whose property is in an allowed set
//! - [`Negated`] - keeps what another filter discards
//! - [`SubsetLenFilter`] - keeps tokens of groups (e.g. sentences) of a certain length
//! - [`FrequencyFilter`] - keeps tokens whose property has a document
//!   frequency inside an interval, measured over a corpus
//! - [`FnFilter`] - wraps a closure
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nlprep::document::Document;
//! use nlprep::error::Result;
//! use nlprep::filter::{BoolFilter, Filter, FilterExt};
//!
//! let is_short = |doc: &Document| -> Result<Vec<bool>> {
//!     Ok(doc.original_tokens().iter().map(|t| t.len() < 3).collect())
//! };
//! let drop_short = BoolFilter::new(Arc::new(is_short)).negated();
//!
//! let doc = Document::from_tokens(["an", "elephant", "in", "town"]);
//! let filtered = drop_short.apply(&doc).unwrap();
//! assert_eq!(filtered.selected_tokens(), vec!["elephant", "town"]);
//! ```

use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;

/// Trait for filters that narrow a document's selection.
///
/// Implementations must derive their result from the input through
/// [`Document::sub_doc`] (or an equivalent narrowing), never widen it.
/// Corpus-level context, such as document frequencies, is captured when the
/// filter is built.
pub trait Filter: Send + Sync {
    /// Return a sub-document of `doc`.
    fn apply(&self, doc: &Document) -> Result<Document>;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn apply(&self, doc: &Document) -> Result<Document> {
        (**self).apply(doc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn apply(&self, doc: &Document) -> Result<Document> {
        (**self).apply(doc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Postfix combinators for filters.
pub trait FilterExt: Filter + Sized + 'static {
    /// Keep exactly the tokens this filter discards.
    fn negated(self) -> Negated {
        Negated::new(self)
    }
}

impl<F: Filter + Sized + 'static> FilterExt for F {}

// Individual filter modules
pub mod bool_fun;
pub mod frequency;
pub mod func;
pub mod interval;
pub mod negated;
pub mod property;
pub mod subset_len;

// Re-export all filters for convenient access
pub use bool_fun::BoolFilter;
pub use frequency::{
    DocumentFrequencyBounds, FrequencyFilter, document_frequencies, props_by_document_frequency,
};
pub use func::FnFilter;
pub use interval::Interval;
pub use negated::Negated;
pub use property::PropertyFilter;
pub use subset_len::SubsetLenFilter;
