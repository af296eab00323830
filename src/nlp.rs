//! Adapter to an external NLP toolkit.
//!
//! Linguistic properties (lemmas, universal POS tags, stop-word flags and
//! sentence boundaries) are not computed by this crate. A
//! [`LanguageToolkit`](toolkit::LanguageToolkit) implementation parses text
//! into a [`ParsedDocument`](toolkit::ParsedDocument), and the
//! [`ParseCache`](cache::ParseCache) makes sure each source document is parsed
//! only once, no matter how many filters query it or how many sub-documents
//! are derived from it. Parses are requested in the document's language, and
//! named entities or noun chunks can be merged into single tokens with
//! [`MergeOptions`](toolkit::MergeOptions).
//!
//! ```text
//! Document ──▶ ParseCache ──(miss)──▶ LanguageToolkit
//!                  │
//!                  ▼
//!            ParsedDocument ──▶ Lemmas / UposTags / StopWords / Sentences
//! ```

pub mod cache;
pub mod props;
pub mod toolkit;
pub mod upos;

pub use cache::ParseCache;
pub use props::{
    LemmatizedSentences, Lemmas, Sentences, StopWords, TokenAttribute, ToolkitTokenizer, UposTags,
};
pub use toolkit::{LanguageToolkit, MergeOptions, ParsedDocument, ParsedToken};
pub use upos::Upos;
