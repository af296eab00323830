//! Tokenized documents with a selection mask.
//!
//! A [`Document`] pairs the original text and tokens with the set of token
//! indices that survived filtering so far. Filters never mutate a document;
//! they derive a new one through [`Document::sub_doc`], which can only shrink
//! the selection. The original text and tokens are shared between a document
//! and all of its sub-documents.
//!
//! # Examples
//!
//! ```
//! use nlprep::document::Document;
//!
//! let doc = Document::from_tokens(["the", "quick", "brown", "fox"]);
//! assert_eq!(doc.original_text(), "the quick brown fox");
//! assert_eq!(doc.len(), 4);
//!
//! let sub = doc.sub_doc([1, 3]).unwrap();
//! assert_eq!(sub.selected_tokens(), vec!["quick", "fox"]);
//!
//! // selection is monotonic: index 2 was never selected in `sub`
//! let sub = sub.sub_doc([2, 3]).unwrap();
//! assert_eq!(sub.selected_tokens(), vec!["fox"]);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{NlprepError, Result};
use crate::language::detect_language;
use crate::tokenizer::Tokenizer;

/// A tokenized document together with its current token selection.
///
/// Invariant: every index in the selection is a valid index into
/// [`original_tokens`](Document::original_tokens).
///
/// The constructors guess the language from the original text; use
/// [`with_language`](Document::with_language) when it is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    original_text: Arc<str>,
    original_tokens: Arc<[String]>,
    selected: BTreeSet<usize>,
    language: Option<String>,
}

impl Document {
    /// Create a document from its parts.
    ///
    /// Fails with [`NlprepError::IndexOutOfRange`] if `selected` contains an
    /// index outside of `tokens`.
    pub fn new<T, I, S, J>(text: T, tokens: I, selected: J) -> Result<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = usize>,
    {
        let original_tokens: Arc<[String]> = tokens.into_iter().map(Into::into).collect();
        let selected = Self::checked_indices(selected, original_tokens.len())?;
        let text: String = text.into();
        let language = detect_language(&text);

        Ok(Document {
            original_text: Arc::from(text),
            original_tokens,
            selected,
            language,
        })
    }

    /// Tokenize `text` with the given tokenizer, selecting every token.
    ///
    /// Tokenizer failures are returned unchanged.
    pub fn from_text<Tk>(text: &str, tokenizer: &Tk) -> Result<Self>
    where
        Tk: Tokenizer + ?Sized,
    {
        let tokens = tokenizer.tokenize(text)?;
        let len = tokens.len();
        Ok(Document {
            original_text: Arc::from(text),
            original_tokens: tokens.into(),
            selected: (0..len).collect(),
            language: detect_language(text),
        })
    }

    /// Create a document from pre-tokenized input, selecting every token.
    ///
    /// The original text is reconstructed by joining the tokens with a single
    /// space.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let original_tokens: Arc<[String]> = tokens.into_iter().map(Into::into).collect();
        let text = original_tokens.join(" ");
        let len = original_tokens.len();
        let language = detect_language(&text);
        Document {
            original_text: Arc::from(text),
            original_tokens,
            selected: (0..len).collect(),
            language,
        }
    }

    /// Override the detected language of this document (e.g. `"de"`).
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The raw text this document was built from.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// All tokens of the document, regardless of the selection.
    pub fn original_tokens(&self) -> &[String] {
        &self.original_tokens
    }

    /// Indices of the selected tokens, in ascending order.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// The language of the document, if it was given or could be detected.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The selected tokens in original order.
    pub fn selected_tokens(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Iterate over the selected tokens in original order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected
            .iter()
            .map(move |&index| self.original_tokens[index].as_str())
    }

    /// Number of selected tokens.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether no token is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether `token` is among the selected tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    /// Derive a sub-document whose selection is the intersection of the
    /// current selection and `indices`.
    ///
    /// Every index must point into the original tokens, otherwise this fails
    /// with [`NlprepError::IndexOutOfRange`].
    pub fn sub_doc<I>(&self, indices: I) -> Result<Document>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices = Self::checked_indices(indices, self.original_tokens.len())?;
        Ok(self.with_selection(self.selected.intersection(&indices).copied().collect()))
    }

    /// Derive a sub-document that drops `indices` from the current selection.
    pub(crate) fn without(&self, indices: &BTreeSet<usize>) -> Document {
        self.with_selection(self.selected.difference(indices).copied().collect())
    }

    /// Whether both documents were derived from the same source document.
    pub fn shares_source(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.original_text, &other.original_text)
            && Arc::ptr_eq(&self.original_tokens, &other.original_tokens)
    }

    pub(crate) fn tokens_handle(&self) -> &Arc<[String]> {
        &self.original_tokens
    }

    fn with_selection(&self, selected: BTreeSet<usize>) -> Document {
        Document {
            original_text: Arc::clone(&self.original_text),
            original_tokens: Arc::clone(&self.original_tokens),
            selected,
            language: self.language.clone(),
        }
    }

    fn checked_indices<I>(indices: I, len: usize) -> Result<BTreeSet<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .map(|index| {
                if index < len {
                    Ok(index)
                } else {
                    Err(NlprepError::index_out_of_range(index, len))
                }
            })
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
