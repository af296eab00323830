//! Pipelines of filters and their application to corpora.
//!
//! A [`Pipeline`] is an ordered list of filters. Applying it to a document
//! runs every filter on the output of the previous one, so the result keeps
//! the intersection of what each filter keeps.
//!
//! Some filters need to look at the whole corpus before they can be applied
//! (e.g. to compute document frequencies). A
//! [`PipelineGenerator`](generator::PipelineGenerator) therefore runs in
//! stages: each stage first builds a pipeline from the current corpus, then
//! applies it to every document.
//!
//! ```text
//! text ─▶ Tokenizer ─▶ Document ─▶ stage 1 ─▶ ... ─▶ stage n ─▶ Document
//!                                     │
//!                           corpus ─▶ build pipeline
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nlprep::document::Document;
//! use nlprep::filter::{FilterExt, PropertyFilter};
//! use nlprep::pipeline::{Pipeline, apply_filters};
//! use nlprep::property::TokenText;
//!
//! let pipeline = Pipeline::new()
//!     .add_filter(Arc::new(
//!         PropertyFilter::new(Arc::new(TokenText), ["the".to_string()]).negated(),
//!     ))
//!     .with_name("drop_the");
//!
//! let docs = vec![Document::from_tokens(["the", "cat"]), Document::from_tokens(["a", "dog"])];
//! let filtered: Vec<Document> = apply_filters(docs, &pipeline)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(filtered[0].selected_tokens(), vec!["cat"]);
//! assert_eq!(filtered[1].selected_tokens(), vec!["a", "dog"]);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;
use crate::tokenizer::Tokenizer;

pub mod collections;
pub mod generator;
pub mod topic_modeling;

pub use generator::{PipelineFactory, PipelineGenerator};
pub use topic_modeling::{
    TopicModelingConfig, apply_generic_topic_modeling, apply_poc_topic_modeling,
    generic_topic_modeling, poc_topic_modeling,
};

/// An ordered sequence of filters.
#[derive(Clone)]
pub struct Pipeline {
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl Pipeline {
    /// Create an empty pipeline, which passes documents through unchanged.
    pub fn new() -> Self {
        Pipeline {
            filters: Vec::new(),
            name: "pipeline".to_string(),
        }
    }

    /// Append a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this pipeline.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The name of this pipeline.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filters, in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the pipeline has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply every filter to `doc`, each on the output of the previous one.
    pub fn apply(&self, doc: &Document) -> Result<Document> {
        let mut doc = doc.clone();
        for filter in &self.filters {
            let before = doc.len();
            doc = filter.apply(&doc)?;
            trace!(
                pipeline = %self.name,
                filter = filter.name(),
                before,
                after = doc.len(),
                "applied filter"
            );
        }
        Ok(doc)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Arc<dyn Filter>> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Filter>>>(iter: I) -> Self {
        Pipeline {
            filters: iter.into_iter().collect(),
            ..Self::new()
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Lazily apply `pipeline` to each document of `docs`.
///
/// With an empty pipeline the documents are returned as-is. The returned
/// iterator can be restarted only if the source can.
pub fn apply_filters<'a, I>(
    docs: I,
    pipeline: &'a Pipeline,
) -> impl Iterator<Item = Result<Document>> + 'a
where
    I: IntoIterator<Item = Document>,
    I::IntoIter: 'a,
{
    docs.into_iter().map(move |doc| {
        if pipeline.is_empty() {
            Ok(doc)
        } else {
            pipeline.apply(&doc)
        }
    })
}

/// Lazily create documents from raw texts with the given tokenizer.
pub fn tokenize_documents<'a, I, S, Tk>(
    raw_docs: I,
    tokenizer: &'a Tk,
) -> impl Iterator<Item = Result<Document>> + 'a
where
    I: IntoIterator<Item = S>,
    I::IntoIter: 'a,
    S: AsRef<str>,
    Tk: Tokenizer + ?Sized,
{
    raw_docs
        .into_iter()
        .map(move |raw| Document::from_text(raw.as_ref(), tokenizer))
}
