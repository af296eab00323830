//! Tokenizer boundary.
//!
//! Tokenization is the job of an external NLP toolkit; this module only
//! defines the [`Tokenizer`] trait that [`Document::from_text`] consumes,
//! plus a whitespace tokenizer that mirrors [`Document::from_tokens`].
//!
//! Any `Fn(&str) -> Result<Vec<String>>` closure is a tokenizer as well.
//! Failures should be reported as [`NlprepError::Tokenize`]:
//!
//! ```
//! use nlprep::document::Document;
//! use nlprep::error::{NlprepError, Result};
//!
//! let comma = |text: &str| -> Result<Vec<String>> {
//!     if text.contains('\n') {
//!         return Err(NlprepError::tokenize("expected a single line"));
//!     }
//!     Ok(text.split(',').map(|s| s.trim().to_string()).collect())
//! };
//! let doc = Document::from_text("a, b, c", &comma).unwrap();
//! assert_eq!(doc.selected_tokens(), vec!["a", "b", "c"]);
//!
//! let result = Document::from_text("a,\nb", &comma);
//! assert!(matches!(result, Err(NlprepError::Tokenize(_))));
//! ```
//!
//! [`Document::from_text`]: crate::document::Document::from_text
//! [`Document::from_tokens`]: crate::document::Document::from_tokens
//! [`NlprepError::Tokenize`]: crate::error::NlprepError::Tokenize

use crate::error::Result;

/// Trait for tokenizers that split raw text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared by filters
/// and pipelines, which carry the same bound.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into its tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self(text)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::NlprepError;

    fn split_lines(text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Err(NlprepError::tokenize("empty input"));
        }
        Ok(text.lines().map(str::to_string).collect())
    }

    #[test]
    fn test_fn_tokenizer() {
        let tokenizer = split_lines;

        assert_eq!(tokenizer.name(), "fn");
        assert_eq!(tokenizer.tokenize("a b\nc").unwrap(), vec!["a b", "c"]);
    }

    #[test]
    fn test_fn_tokenizer_failure_reaches_caller() {
        let result = Document::from_text("", &split_lines);

        match result {
            Err(NlprepError::Tokenize(msg)) => assert_eq!(msg, "empty input"),
            other => panic!("expected a tokenize error, got {other:?}"),
        }
    }
}
