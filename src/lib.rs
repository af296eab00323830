//! # nlprep
//!
//! Token-level preprocessing of natural language corpora, e.g. for topic
//! modeling.
//!
//! ## Features
//!
//! - Documents that keep their original text and tokens and carry a selection
//!   of token positions, with automatic language identification
//! - Composable filters that only ever narrow the selection
//! - Property functions backed by an external NLP toolkit, with one parse per
//!   source document
//! - Corpus-level filtering by document frequency
//! - Staged pipelines, including a ready-made topic-modeling pipeline

pub mod document;
pub mod error;
pub mod filter;
pub mod language;
pub mod nlp;
pub mod pipeline;
pub mod property;
pub mod tokenizer;

pub mod prelude {
    pub use crate::document::Document;
    pub use crate::error::{NlprepError, Result};
    pub use crate::filter::{
        BoolFilter, DocumentFrequencyBounds, Filter, FilterExt, FnFilter, FrequencyFilter,
        Negated, PropertyFilter, SubsetLenFilter,
    };
    pub use crate::nlp::{LanguageToolkit, ParseCache, Upos};
    pub use crate::pipeline::{
        Pipeline, PipelineGenerator, TopicModelingConfig, apply_filters,
    };
    pub use crate::property::{PropertyFunction, SplitFunction, TokenText};
    pub use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
