//! Memoization of toolkit parses.
//!
//! Parsing is by far the most expensive step of a pipeline, and every
//! property query on every sub-document of a source document needs the same
//! parse. [`ParseCache`] stores one [`ParsedDocument`] per source document
//! and language:
//!
//! - keyed by raw text, when the toolkit tokenized the text itself
//!   (see [`ToolkitTokenizer`](crate::nlp::props::ToolkitTokenizer)), with
//!   one entry per set of [`MergeOptions`], and
//! - keyed by the token sequence otherwise, so pre-tokenized documents are
//!   analyzed without being tokenized again.
//!
//! Entries are never invalidated; call [`ParseCache::clear`] to start over.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::document::Document;
use crate::error::{NlprepError, Result};
use crate::nlp::toolkit::{LanguageToolkit, MergeOptions, ParsedDocument};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TextKey {
    language: Option<String>,
    merge: MergeOptions,
}

type TextParses = AHashMap<TextKey, Arc<ParsedDocument>>;
type TokenParses = AHashMap<Option<String>, Arc<ParsedDocument>>;

/// A cache of toolkit parses keyed by source text or source tokens.
pub struct ParseCache {
    toolkit: Arc<dyn LanguageToolkit>,
    by_text: RwLock<AHashMap<Arc<str>, TextParses>>,
    by_tokens: RwLock<AHashMap<Arc<[String]>, TokenParses>>,
}

impl ParseCache {
    /// Create an empty cache in front of the given toolkit.
    pub fn new(toolkit: Arc<dyn LanguageToolkit>) -> Self {
        ParseCache {
            toolkit,
            by_text: RwLock::new(AHashMap::new()),
            by_tokens: RwLock::new(AHashMap::new()),
        }
    }

    /// The toolkit behind this cache.
    pub fn toolkit(&self) -> &Arc<dyn LanguageToolkit> {
        &self.toolkit
    }

    /// Parse raw text, reusing an earlier parse of the same text, language
    /// and merge options.
    ///
    /// Merged variants are derived from the unmerged parse, so the toolkit
    /// sees each text at most once per language.
    pub fn parse_text(
        &self,
        text: &str,
        language: Option<&str>,
        merge: MergeOptions,
    ) -> Result<Arc<ParsedDocument>> {
        let key = TextKey {
            language: language.map(str::to_string),
            merge,
        };
        let cached = self
            .by_text
            .read()
            .get(text)
            .and_then(|parses| parses.get(&key))
            .cloned();
        if let Some(parsed) = cached {
            trace!(toolkit = self.toolkit.name(), ?language, "text parse cache hit");
            return Ok(parsed);
        }

        trace!(toolkit = self.toolkit.name(), ?language, ?merge, "text parse cache miss");
        let parsed = if merge.is_noop() {
            Arc::new(self.toolkit.parse_text(text, language)?)
        } else {
            let base = self.parse_text(text, language, MergeOptions::default())?;
            Arc::new(base.merged(merge))
        };

        let mut by_text = self.by_text.write();
        let entry = by_text
            .entry(Arc::from(text))
            .or_default()
            .entry(key)
            .or_insert(parsed);
        Ok(Arc::clone(entry))
    }

    /// Analyze a token sequence, reusing an earlier analysis of the same
    /// tokens in the same language.
    pub fn parse_tokens(
        &self,
        tokens: &Arc<[String]>,
        language: Option<&str>,
    ) -> Result<Arc<ParsedDocument>> {
        let key = language.map(str::to_string);
        let cached = self
            .by_tokens
            .read()
            .get(&**tokens)
            .and_then(|parses| parses.get(&key))
            .cloned();
        if let Some(parsed) = cached {
            trace!(toolkit = self.toolkit.name(), ?language, "token parse cache hit");
            return Ok(parsed);
        }

        trace!(toolkit = self.toolkit.name(), ?language, "token parse cache miss");
        let parsed = self.toolkit.parse_tokens(tokens, language)?;
        if parsed.len() != tokens.len() {
            return Err(NlprepError::toolkit(format!(
                "toolkit {} returned {} tokens for {} input tokens",
                self.toolkit.name(),
                parsed.len(),
                tokens.len()
            )));
        }

        let mut by_tokens = self.by_tokens.write();
        let entry = by_tokens
            .entry(Arc::clone(tokens))
            .or_default()
            .entry(key)
            .or_insert_with(|| Arc::new(parsed));
        Ok(Arc::clone(entry))
    }

    /// The parse that belongs to `doc`.
    ///
    /// If the document's text was tokenized by the toolkit in the document's
    /// language, and one of the cached parses of that text lines up with the
    /// document's tokens, that parse is reused. Otherwise the document's
    /// original tokens are analyzed as-is.
    pub fn parsed(&self, doc: &Document) -> Result<Arc<ParsedDocument>> {
        let from_text = self
            .by_text
            .read()
            .get(doc.original_text())
            .and_then(|parses| {
                parses
                    .iter()
                    .filter(|(key, _)| key.language.as_deref() == doc.language())
                    .map(|(_, parsed)| parsed)
                    .find(|parsed| aligns_with(parsed, doc.original_tokens()))
                    .cloned()
            });

        match from_text {
            Some(parsed) => {
                trace!(toolkit = self.toolkit.name(), "text parse cache hit");
                Ok(parsed)
            }
            None => self.parse_tokens(doc.tokens_handle(), doc.language()),
        }
    }

    /// Whether a parse of this exact text is cached.
    pub fn contains_text(&self, text: &str) -> bool {
        self.by_text.read().contains_key(text)
    }

    /// Number of cached parses.
    pub fn len(&self) -> usize {
        let texts: usize = self.by_text.read().values().map(|parses| parses.len()).sum();
        let tokens: usize = self.by_tokens.read().values().map(|parses| parses.len()).sum();
        texts + tokens
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached parse.
    pub fn clear(&self) {
        self.by_text.write().clear();
        self.by_tokens.write().clear();
    }
}

/// Whether each token of `parsed` produced the matching document token, as
/// its text or as its lemma.
fn aligns_with(parsed: &ParsedDocument, tokens: &[String]) -> bool {
    parsed.len() == tokens.len()
        && parsed
            .tokens()
            .iter()
            .zip(tokens)
            .all(|(parsed, token)| parsed.text == *token || parsed.lemma == *token)
}

impl fmt::Debug for ParseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseCache")
            .field("toolkit", &self.toolkit.name())
            .field("texts", &self.by_text.read().len())
            .field("token_sequences", &self.by_tokens.read().len())
            .finish()
    }
}
