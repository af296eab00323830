//! Negation filter implementation.

use std::fmt;
use std::sync::Arc;

use super::Filter;

use crate::document::Document;
use crate::error::Result;

/// A filter that keeps exactly the tokens its inner filter discards.
///
/// The result is the input selection minus the inner filter's selection, so
/// negating twice selects the same tokens as the inner filter.
#[derive(Clone)]
pub struct Negated {
    inner: Arc<dyn Filter>,
}

impl Negated {
    /// Negate the given filter.
    pub fn new<F: Filter + 'static>(filter: F) -> Self {
        Negated {
            inner: Arc::new(filter),
        }
    }

    /// Negate a shared filter.
    pub fn from_arc(inner: Arc<dyn Filter>) -> Self {
        Negated { inner }
    }

    /// The filter being negated.
    pub fn inner(&self) -> &Arc<dyn Filter> {
        &self.inner
    }
}

impl Filter for Negated {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let kept_by_inner = self.inner.apply(doc)?;
        Ok(doc.without(kept_by_inner.selected()))
    }

    fn name(&self) -> &'static str {
        "negated"
    }
}

impl fmt::Debug for Negated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Negated")
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::filter::{FilterExt, FnFilter};

    fn first_half() -> impl Filter + 'static {
        FnFilter::new("first_half", |doc: &Document| {
            doc.sub_doc(0..doc.original_tokens().len() / 2)
        })
    }

    #[test]
    fn test_negated_is_complement() {
        let doc = Document::from_tokens(["a", "b", "c", "d"]).sub_doc([0, 1, 3]).unwrap();
        let positive = first_half().apply(&doc).unwrap();
        let negative = first_half().negated().apply(&doc).unwrap();

        assert_eq!(positive.selected(), &BTreeSet::from([0, 1]));
        assert_eq!(negative.selected(), &BTreeSet::from([3]));
        assert!(positive.selected().is_disjoint(negative.selected()));

        let union: BTreeSet<usize> = positive
            .selected()
            .union(negative.selected())
            .copied()
            .collect();
        assert_eq!(&union, doc.selected());
    }

    #[test]
    fn test_double_negation() {
        let doc = Document::from_tokens(["a", "b", "c", "d", "e"]);
        let twice = first_half().negated().negated();

        assert_eq!(twice.apply(&doc).unwrap(), first_half().apply(&doc).unwrap());
    }

    #[test]
    fn test_negated_empty_document() {
        let doc = Document::from_tokens(Vec::<String>::new());
        assert!(first_half().negated().apply(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_filter_name() {
        let negated = Negated::new(first_half());
        assert_eq!(negated.name(), "negated");
        assert_eq!(negated.inner().name(), "first_half");
    }
}
