//! Predicate filter implementation.

use std::fmt;
use std::sync::Arc;

use super::Filter;

use crate::document::Document;
use crate::error::Result;
use crate::property::{PropertyFunction, compute_checked};

/// A filter that keeps the tokens for which a per-token predicate is true.
///
/// Negate it to remove such tokens, e.g. stop words.
#[derive(Clone)]
pub struct BoolFilter {
    bool_fun: Arc<dyn PropertyFunction<bool>>,
}

impl BoolFilter {
    /// Create a new filter from a per-token predicate.
    pub fn new(bool_fun: Arc<dyn PropertyFunction<bool>>) -> Self {
        BoolFilter { bool_fun }
    }
}

impl Filter for BoolFilter {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let flags = compute_checked(&*self.bool_fun, doc)?;
        doc.sub_doc(
            flags
                .into_iter()
                .enumerate()
                .filter_map(|(index, keep)| keep.then_some(index)),
        )
    }

    fn name(&self) -> &'static str {
        "bool"
    }
}

impl fmt::Debug for BoolFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolFilter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NlprepError;

    fn is_upper(doc: &Document) -> Result<Vec<bool>> {
        Ok(doc
            .original_tokens()
            .iter()
            .map(|t| t.chars().next().is_some_and(char::is_uppercase))
            .collect())
    }

    #[test]
    fn test_bool_filter() {
        let filter = BoolFilter::new(Arc::new(is_upper));
        let doc = Document::from_tokens(["Der", "große", "Hund", "bellt"]);

        let result = filter.apply(&doc).unwrap();
        assert_eq!(result.selected_tokens(), vec!["Der", "Hund"]);
    }

    #[test]
    fn test_bool_filter_respects_selection() {
        let filter = BoolFilter::new(Arc::new(is_upper));
        let doc = Document::from_tokens(["Der", "große", "Hund"]).sub_doc([1, 2]).unwrap();

        assert_eq!(filter.apply(&doc).unwrap().selected_tokens(), vec!["Hund"]);
    }

    #[test]
    fn test_bool_filter_rejects_short_result() {
        let filter = BoolFilter::new(Arc::new(|_: &Document| -> Result<Vec<bool>> {
            Ok(vec![true])
        }));
        let doc = Document::from_tokens(["a", "b"]);

        assert!(matches!(filter.apply(&doc), Err(NlprepError::Property(_))));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(BoolFilter::new(Arc::new(is_upper)).name(), "bool");
    }
}
