//! Per-token property functions.
//!
//! A [`PropertyFunction`] computes one value for every *original* token of a
//! document, regardless of the current selection, so the result can always be
//! indexed with the document's token indices. A [`SplitFunction`] does the
//! same but groups the values into consecutive sub-sequences such as
//! sentences.
//!
//! Closures implement both traits:
//!
//! ```
//! use nlprep::document::Document;
//! use nlprep::error::Result;
//! use nlprep::property::PropertyFunction;
//!
//! let lengths = |doc: &Document| -> Result<Vec<usize>> {
//!     Ok(doc.original_tokens().iter().map(|t| t.chars().count()).collect())
//! };
//!
//! let doc = Document::from_tokens(["a", "bcd"]);
//! assert_eq!(lengths.compute(&doc).unwrap(), vec![1, 3]);
//! ```

use crate::document::Document;
use crate::error::{NlprepError, Result};

/// Functions that compute a property for each original token of a document.
pub trait PropertyFunction<P>: Send + Sync {
    /// Return the property of each *original* token.
    ///
    /// The result has exactly `doc.original_tokens().len()` entries.
    fn compute(&self, doc: &Document) -> Result<Vec<P>>;
}

impl<P, F> PropertyFunction<P> for F
where
    F: Fn(&Document) -> Result<Vec<P>> + Send + Sync,
{
    fn compute(&self, doc: &Document) -> Result<Vec<P>> {
        self(doc)
    }
}

/// Functions that compute a property for each original token, organized
/// into consecutive groups (e.g. the sentences of a document).
pub trait SplitFunction<P>: Send + Sync {
    /// Return the property of each *original* token, grouped.
    ///
    /// The group lengths sum up to `doc.original_tokens().len()`.
    fn split(&self, doc: &Document) -> Result<Vec<Vec<P>>>;
}

impl<P, F> SplitFunction<P> for F
where
    F: Fn(&Document) -> Result<Vec<Vec<P>>> + Send + Sync,
{
    fn split(&self, doc: &Document) -> Result<Vec<Vec<P>>> {
        self(doc)
    }
}

/// The token text itself as a property.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenText;

impl PropertyFunction<String> for TokenText {
    fn compute(&self, doc: &Document) -> Result<Vec<String>> {
        Ok(doc.original_tokens().to_vec())
    }
}

/// Compute `property_fun` on `doc` and check that it yields one value per
/// original token.
pub fn compute_checked<P, F>(property_fun: &F, doc: &Document) -> Result<Vec<P>>
where
    F: PropertyFunction<P> + ?Sized,
{
    let values = property_fun.compute(doc)?;
    let expected = doc.original_tokens().len();
    if values.len() != expected {
        return Err(NlprepError::property(format!(
            "property function returned {} values for {} tokens",
            values.len(),
            expected
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        let doc = Document::from_tokens(["a", "b"]).sub_doc([1]).unwrap();

        // computed over the original tokens, not the selection
        assert_eq!(TokenText.compute(&doc).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_closure_split_function() {
        let halves = |doc: &Document| -> Result<Vec<Vec<String>>> {
            let tokens = doc.original_tokens();
            let (left, right) = tokens.split_at(tokens.len() / 2);
            Ok(vec![left.to_vec(), right.to_vec()])
        };
        let doc = Document::from_tokens(["a", "b", "c"]);

        assert_eq!(halves.split(&doc).unwrap(), vec![vec!["a"], vec!["b", "c"]]);
    }

    #[test]
    fn test_compute_checked_rejects_wrong_length() {
        let broken = |_: &Document| -> Result<Vec<bool>> { Ok(vec![true]) };
        let doc = Document::from_tokens(["a", "b"]);

        assert!(matches!(
            compute_checked(&broken, &doc),
            Err(NlprepError::Property(_))
        ));
        assert_eq!(compute_checked(&TokenText, &doc).unwrap().len(), 2);
    }
}
