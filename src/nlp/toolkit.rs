//! The external NLP toolkit boundary and its parse record.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{NlprepError, Result};
use crate::nlp::upos::Upos;

/// Linguistic attributes of a single token, as reported by the toolkit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    /// The token text
    pub text: String,
    /// The lemmatized form
    pub lemma: String,
    /// The universal part-of-speech tag
    pub upos: Upos,
    /// Whether the toolkit considers this token a stop word
    pub is_stop: bool,
}

impl ParsedToken {
    /// Create a new parsed token.
    pub fn new<T, L>(text: T, lemma: L, upos: Upos, is_stop: bool) -> Self
    where
        T: Into<String>,
        L: Into<String>,
    {
        ParsedToken {
            text: text.into(),
            lemma: lemma.into(),
            upos,
            is_stop,
        }
    }
}

/// Which multi-token spans to merge into single tokens.
///
/// Entities are merged before noun chunks. Where spans overlap, the longer
/// one wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOptions {
    /// Merge named entities, e.g. "Neue Zürcher Zeitung"
    pub entities: bool,
    /// Merge noun chunks, e.g. "die schwarze Katze"
    pub noun_chunks: bool,
}

impl MergeOptions {
    /// Options that merge nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether named entities are merged.
    pub fn with_entities(mut self, entities: bool) -> Self {
        self.entities = entities;
        self
    }

    /// Set whether noun chunks are merged.
    pub fn with_noun_chunks(mut self, noun_chunks: bool) -> Self {
        self.noun_chunks = noun_chunks;
        self
    }

    /// Whether these options leave a parse unchanged.
    pub fn is_noop(&self) -> bool {
        !self.entities && !self.noun_chunks
    }
}

/// The structured properties record of one parsed document.
///
/// Sentences are stored as consecutive token ranges that cover every token
/// exactly once, in order. Named entities and noun chunks are sorted,
/// non-overlapping token ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParsedDocument")]
pub struct ParsedDocument {
    tokens: Vec<ParsedToken>,
    sentences: Vec<Range<usize>>,
    entities: Vec<Range<usize>>,
    noun_chunks: Vec<Range<usize>>,
}

/// Wire form of [`ParsedDocument`], validated on conversion.
#[derive(Deserialize)]
struct RawParsedDocument {
    tokens: Vec<ParsedToken>,
    sentences: Vec<Range<usize>>,
    #[serde(default)]
    entities: Vec<Range<usize>>,
    #[serde(default)]
    noun_chunks: Vec<Range<usize>>,
}

impl TryFrom<RawParsedDocument> for ParsedDocument {
    type Error = NlprepError;

    fn try_from(raw: RawParsedDocument) -> Result<Self> {
        ParsedDocument::new(raw.tokens, raw.sentences)?
            .with_entities(raw.entities)?
            .with_noun_chunks(raw.noun_chunks)
    }
}

impl ParsedDocument {
    /// Create a parse record from tokens and sentence spans.
    ///
    /// Fails with a toolkit error if the spans are not consecutive or do not
    /// cover all tokens.
    pub fn new(tokens: Vec<ParsedToken>, sentences: Vec<Range<usize>>) -> Result<Self> {
        let mut expected_start = 0;
        for span in &sentences {
            if span.start != expected_start || span.end < span.start {
                return Err(NlprepError::toolkit(format!(
                    "sentence span {span:?} does not continue at token {expected_start}"
                )));
            }
            expected_start = span.end;
        }
        if expected_start != tokens.len() {
            return Err(NlprepError::toolkit(format!(
                "sentence spans cover {} of {} tokens",
                expected_start,
                tokens.len()
            )));
        }

        Ok(ParsedDocument {
            tokens,
            sentences,
            entities: Vec::new(),
            noun_chunks: Vec::new(),
        })
    }

    /// Create a parse record in which all tokens form a single sentence.
    pub fn single_sentence(tokens: Vec<ParsedToken>) -> Self {
        let sentences = if tokens.is_empty() {
            Vec::new()
        } else {
            vec![0..tokens.len()]
        };
        ParsedDocument {
            tokens,
            sentences,
            entities: Vec::new(),
            noun_chunks: Vec::new(),
        }
    }

    /// Attach named entity spans.
    ///
    /// Fails with a toolkit error if a span is empty, reaches past the last
    /// token or overlaps its predecessor.
    pub fn with_entities(mut self, entities: Vec<Range<usize>>) -> Result<Self> {
        check_spans("entity", &entities, self.tokens.len())?;
        self.entities = entities;
        Ok(self)
    }

    /// Attach noun chunk spans, checked like [`with_entities`](Self::with_entities).
    pub fn with_noun_chunks(mut self, noun_chunks: Vec<Range<usize>>) -> Result<Self> {
        check_spans("noun chunk", &noun_chunks, self.tokens.len())?;
        self.noun_chunks = noun_chunks;
        Ok(self)
    }

    /// The parsed tokens.
    pub fn tokens(&self) -> &[ParsedToken] {
        &self.tokens
    }

    /// Number of parsed tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the parse contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens grouped by sentence.
    pub fn sentences(&self) -> impl Iterator<Item = &[ParsedToken]> + '_ {
        self.sentences
            .iter()
            .map(move |span| &self.tokens[span.clone()])
    }

    /// Token ranges of the named entities.
    pub fn entities(&self) -> &[Range<usize>] {
        &self.entities
    }

    /// Token ranges of the noun chunks.
    pub fn noun_chunks(&self) -> &[Range<usize>] {
        &self.noun_chunks
    }

    /// A copy of this parse in which the spans chosen by `options` are
    /// merged into single tokens.
    ///
    /// A merged token joins the texts and lemmas of its parts with a space,
    /// takes the tag of its last part and is a stop word only if all parts
    /// are. A merged token that crosses a sentence boundary belongs to the
    /// sentence it starts in. Span information is not carried over.
    pub fn merged(&self, options: MergeOptions) -> ParsedDocument {
        let mut candidates: Vec<Range<usize>> = Vec::new();
        if options.entities {
            candidates.extend(self.entities.iter().cloned());
        }
        if options.noun_chunks {
            candidates.extend(self.noun_chunks.iter().cloned());
        }

        // longest first, then leftmost; stable so entities beat equal chunks
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));
        let mut spans: Vec<Range<usize>> = Vec::new();
        for span in candidates {
            if span.len() > 1 && spans.iter().all(|s| s.end <= span.start || span.end <= s.start) {
                spans.push(span);
            }
        }
        spans.sort_by_key(|span| span.start);

        let mut tokens = Vec::with_capacity(self.tokens.len());
        let mut new_index = Vec::with_capacity(self.tokens.len());
        let mut spans = spans.into_iter().peekable();
        let mut index = 0;
        while index < self.tokens.len() {
            let end = match spans.peek() {
                Some(span) if span.start == index => span.end,
                _ => index + 1,
            };
            if end > index + 1 {
                spans.next();
            }

            let parts = &self.tokens[index..end];
            new_index.extend(std::iter::repeat_n(tokens.len(), parts.len()));
            tokens.push(merge_tokens(parts));
            index = end;
        }

        let mut sentences = Vec::with_capacity(self.sentences.len());
        let mut start = 0;
        for span in &self.sentences {
            let end = if span.is_empty() {
                start
            } else {
                (new_index[span.end - 1] + 1).max(start)
            };
            sentences.push(start..end);
            start = end;
        }

        ParsedDocument {
            tokens,
            sentences,
            entities: Vec::new(),
            noun_chunks: Vec::new(),
        }
    }
}

fn check_spans(kind: &str, spans: &[Range<usize>], len: usize) -> Result<()> {
    let mut previous_end = 0;
    for span in spans {
        if span.start >= span.end || span.end > len || span.start < previous_end {
            return Err(NlprepError::toolkit(format!(
                "{kind} span {span:?} is empty, out of range or overlaps its predecessor"
            )));
        }
        previous_end = span.end;
    }
    Ok(())
}

fn merge_tokens(parts: &[ParsedToken]) -> ParsedToken {
    if let [token] = parts {
        return token.clone();
    }
    let join = |attribute: fn(&ParsedToken) -> &str| {
        parts.iter().map(attribute).collect::<Vec<_>>().join(" ")
    };
    ParsedToken {
        text: join(|t| t.text.as_str()),
        lemma: join(|t| t.lemma.as_str()),
        upos: parts.last().map_or(Upos::X, |t| t.upos),
        is_stop: parts.iter().all(|t| t.is_stop),
    }
}

/// Trait for external NLP toolkits.
///
/// Implementations wrap a tokenizer/tagger/lemmatizer pipeline. `language` is
/// the language of the input (e.g. `"de"`) if known, and lets a toolkit pick
/// its model. Failures (e.g. an unsupported language) are reported as errors
/// and propagate to the caller unchanged.
///
/// Toolkits that recognize named entities or noun chunks report them through
/// [`ParsedDocument::with_entities`] and [`ParsedDocument::with_noun_chunks`].
pub trait LanguageToolkit: Send + Sync {
    /// Tokenize and analyze raw text.
    fn parse_text(&self, text: &str, language: Option<&str>) -> Result<ParsedDocument>;

    /// Analyze already tokenized input without tokenizing it again.
    ///
    /// The returned record must contain exactly one token per input token.
    fn parse_tokens(&self, tokens: &[String], language: Option<&str>) -> Result<ParsedDocument>;

    /// Get the name of this toolkit (for debugging and logging).
    fn name(&self) -> &'static str;
}
