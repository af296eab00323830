//! Property and split functions backed by a [`ParseCache`].
//!
//! Each type holds a shared handle to the cache and reads one attribute of
//! the cached parse. Creating several of them over the same cache means a
//! document is parsed once, however many filters inspect it.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use nlprep::nlp::{Lemmas, LanguageToolkit, ParseCache, StopWords};
//!
//! fn properties(toolkit: Arc<dyn LanguageToolkit>) -> (Lemmas, StopWords) {
//!     let cache = Arc::new(ParseCache::new(toolkit));
//!     (Lemmas::new(cache.clone()), StopWords::new(cache))
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{NlprepError, Result};
use crate::language::detect_language;
use crate::nlp::cache::ParseCache;
use crate::nlp::toolkit::{MergeOptions, ParsedDocument, ParsedToken};
use crate::nlp::upos::Upos;
use crate::property::{PropertyFunction, SplitFunction};
use crate::tokenizer::Tokenizer;

/// The token attribute a [`ToolkitTokenizer`] emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAttribute {
    /// The token text
    #[default]
    Text,
    /// The lemmatized form
    Lemma,
}

impl TokenAttribute {
    fn of(self, token: &ParsedToken) -> &str {
        match self {
            TokenAttribute::Text => &token.text,
            TokenAttribute::Lemma => &token.lemma,
        }
    }
}

fn checked_parse(cache: &ParseCache, doc: &Document) -> Result<Arc<ParsedDocument>> {
    let parsed = cache.parsed(doc)?;
    if parsed.len() != doc.original_tokens().len() {
        return Err(NlprepError::property(format!(
            "parse has {} tokens but the document has {}",
            parsed.len(),
            doc.original_tokens().len()
        )));
    }
    Ok(parsed)
}

/// The lemmatized form of each token.
#[derive(Clone, Debug)]
pub struct Lemmas {
    cache: Arc<ParseCache>,
}

impl Lemmas {
    /// Create a lemma property function over the given cache.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        Lemmas { cache }
    }
}

impl PropertyFunction<String> for Lemmas {
    fn compute(&self, doc: &Document) -> Result<Vec<String>> {
        let parsed = checked_parse(&self.cache, doc)?;
        Ok(parsed.tokens().iter().map(|t| t.lemma.clone()).collect())
    }
}

/// The universal POS tag of each token.
#[derive(Clone, Debug)]
pub struct UposTags {
    cache: Arc<ParseCache>,
}

impl UposTags {
    /// Create a POS tag property function over the given cache.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        UposTags { cache }
    }
}

impl PropertyFunction<Upos> for UposTags {
    fn compute(&self, doc: &Document) -> Result<Vec<Upos>> {
        let parsed = checked_parse(&self.cache, doc)?;
        Ok(parsed.tokens().iter().map(|t| t.upos).collect())
    }
}

/// Whether each token is a stop word.
#[derive(Clone, Debug)]
pub struct StopWords {
    cache: Arc<ParseCache>,
}

impl StopWords {
    /// Create a stop-word indicator function over the given cache.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        StopWords { cache }
    }
}

impl PropertyFunction<bool> for StopWords {
    fn compute(&self, doc: &Document) -> Result<Vec<bool>> {
        let parsed = checked_parse(&self.cache, doc)?;
        Ok(parsed.tokens().iter().map(|t| t.is_stop).collect())
    }
}

/// The token texts of a document, split by sentence.
#[derive(Clone, Debug)]
pub struct Sentences {
    cache: Arc<ParseCache>,
}

impl Sentences {
    /// Create a sentence splitter over the given cache.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        Sentences { cache }
    }
}

impl SplitFunction<String> for Sentences {
    fn split(&self, doc: &Document) -> Result<Vec<Vec<String>>> {
        let parsed = checked_parse(&self.cache, doc)?;
        Ok(parsed
            .sentences()
            .map(|sent| sent.iter().map(|t| t.text.clone()).collect())
            .collect())
    }
}

/// The lemmas of a document, split by sentence.
#[derive(Clone, Debug)]
pub struct LemmatizedSentences {
    cache: Arc<ParseCache>,
}

impl LemmatizedSentences {
    /// Create a lemmatizing sentence splitter over the given cache.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        LemmatizedSentences { cache }
    }
}

impl SplitFunction<String> for LemmatizedSentences {
    fn split(&self, doc: &Document) -> Result<Vec<Vec<String>>> {
        let parsed = checked_parse(&self.cache, doc)?;
        Ok(parsed
            .sentences()
            .map(|sent| sent.iter().map(|t| t.lemma.clone()).collect())
            .collect())
    }
}

/// A tokenizer that lets the toolkit split the text.
///
/// The parse is stored in the cache under the raw text, so every property
/// function later applied to the resulting document reuses it. The text is
/// parsed in the language detected from it, the same one
/// [`Document::from_text`] records. A fixed language set with
/// [`with_language`](Self::with_language) should be given to the documents
/// as well, otherwise they are parsed again from their tokens.
///
/// Named entities and noun chunks can be merged into single tokens; each
/// combination of merge options is cached separately.
#[derive(Clone, Debug)]
pub struct ToolkitTokenizer {
    cache: Arc<ParseCache>,
    attribute: TokenAttribute,
    language: Option<String>,
    merge: MergeOptions,
}

impl ToolkitTokenizer {
    /// Create a tokenizer emitting token texts.
    pub fn new(cache: Arc<ParseCache>) -> Self {
        ToolkitTokenizer {
            cache,
            attribute: TokenAttribute::Text,
            language: None,
            merge: MergeOptions::default(),
        }
    }

    /// Emit the given attribute instead of the token text.
    pub fn with_attribute(mut self, attribute: TokenAttribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Parse every text in `language` instead of detecting it.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Emit each named entity as one token.
    pub fn with_merge_entities(mut self, merge: bool) -> Self {
        self.merge = self.merge.with_entities(merge);
        self
    }

    /// Emit each noun chunk as one token.
    pub fn with_merge_noun_chunks(mut self, merge: bool) -> Self {
        self.merge = self.merge.with_noun_chunks(merge);
        self
    }

    /// The attribute this tokenizer emits.
    pub fn attribute(&self) -> TokenAttribute {
        self.attribute
    }

    /// The spans this tokenizer merges.
    pub fn merge_options(&self) -> MergeOptions {
        self.merge
    }
}

impl Tokenizer for ToolkitTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let language = self.language.clone().or_else(|| detect_language(text));
        let parsed = self.cache.parse_text(text, language.as_deref(), self.merge)?;
        Ok(parsed
            .tokens()
            .iter()
            .map(|t| self.attribute.of(t).to_string())
            .collect())
    }

    fn name(&self) -> &'static str {
        "toolkit"
    }
}
