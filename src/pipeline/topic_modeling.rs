//! Preconfigured pipelines for topic-modeling preprocessing.
//!
//! Both generators run two stages:
//!
//! 1. Remove tokens with unwanted universal POS tags, stop words and
//!    unwanted lemmas.
//! 2. Remove tokens whose lemma is too rare or too frequent across the
//!    corpus left over by stage 1.
//!
//! [`generic_topic_modeling`] takes the property functions explicitly;
//! [`poc_topic_modeling`] uses the toolkit-backed ones over a shared
//! [`ParseCache`].

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Pipeline;
use super::collections::POC_IGNORED_LEMMAS;
use super::generator::PipelineGenerator;

use crate::document::Document;
use crate::error::Result;
use crate::filter::{
    BoolFilter, DocumentFrequencyBounds, FilterExt, FrequencyFilter, PropertyFilter,
};
use crate::nlp::cache::ParseCache;
use crate::nlp::props::{Lemmas, StopWords, UposTags};
use crate::nlp::upos::Upos;
use crate::property::PropertyFunction;

/// Configuration of the topic-modeling pipelines.
///
/// The default is the PoC configuration: punctuation and whitespace are
/// ignored, the PoC blocklists are ignored, and lemmas must occur in at least
/// five and at most 25% of the documents (counting selected tokens only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopicModelingConfig {
    /// Universal POS tags whose tokens are removed
    pub ignored_upos_tags: BTreeSet<Upos>,

    /// Lemmas whose tokens are removed
    pub ignored_lemmas: BTreeSet<String>,

    /// Document frequency interval the lemmas must fall into
    pub document_frequency: DocumentFrequencyBounds,
}

impl Default for TopicModelingConfig {
    fn default() -> Self {
        Self {
            ignored_upos_tags: BTreeSet::from([Upos::Punct, Upos::Space]),
            ignored_lemmas: POC_IGNORED_LEMMAS.clone(),
            document_frequency: DocumentFrequencyBounds::new()
                .with_min_num(5.0)
                .with_max_rate(0.25)
                .with_interval_open(false)
                .with_count_only_selected(true),
        }
    }
}

impl TopicModelingConfig {
    /// A configuration that ignores nothing and accepts every frequency.
    pub fn empty() -> Self {
        Self {
            ignored_upos_tags: BTreeSet::new(),
            ignored_lemmas: BTreeSet::new(),
            document_frequency: DocumentFrequencyBounds::new(),
        }
    }

    /// Parse a configuration from JSON. Missing fields take their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the ignored universal POS tags.
    pub fn with_ignored_upos_tags<I: IntoIterator<Item = Upos>>(mut self, tags: I) -> Self {
        self.ignored_upos_tags = tags.into_iter().collect();
        self
    }

    /// Set the ignored lemmas.
    pub fn with_ignored_lemmas<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_lemmas = lemmas.into_iter().map(Into::into).collect();
        self
    }

    /// Set the document frequency interval.
    pub fn with_document_frequency(mut self, bounds: DocumentFrequencyBounds) -> Self {
        self.document_frequency = bounds;
        self
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<()> {
        self.document_frequency.validate()
    }
}

/// Build the two-stage topic-modeling generator from explicit property
/// functions.
pub fn generic_topic_modeling(
    upos_fun: Arc<dyn PropertyFunction<Upos>>,
    stop_fun: Arc<dyn PropertyFunction<bool>>,
    lemma_fun: Arc<dyn PropertyFunction<String>>,
    config: &TopicModelingConfig,
) -> Result<PipelineGenerator> {
    config.validate()?;

    let ignored_upos_tags = config.ignored_upos_tags.clone();
    let ignored_lemmas = config.ignored_lemmas.clone();
    let exclusion_lemma_fun = Arc::clone(&lemma_fun);
    let exclusion = move |_: &[Document]| -> Result<Pipeline> {
        let upos = PropertyFilter::new(Arc::clone(&upos_fun), ignored_upos_tags.iter().copied());
        let stop = BoolFilter::new(Arc::clone(&stop_fun));
        let lemmas = PropertyFilter::new(
            Arc::clone(&exclusion_lemma_fun),
            ignored_lemmas.iter().cloned(),
        );
        Ok(Pipeline::new()
            .with_name("exclusion")
            .add_filter(Arc::new(upos.negated()))
            .add_filter(Arc::new(stop.negated()))
            .add_filter(Arc::new(lemmas.negated())))
    };

    let bounds = config.document_frequency.clone();
    let frequency = move |corpus: &[Document]| -> Result<Pipeline> {
        let filter = FrequencyFilter::new(corpus, Arc::clone(&lemma_fun), &bounds)?;
        Ok(Pipeline::new()
            .with_name("document_frequency")
            .add_filter(Arc::new(filter)))
    };

    Ok(PipelineGenerator::new()
        .with_name("topic_modeling")
        .add_stage(exclusion)
        .add_stage(frequency))
}

/// Build the topic-modeling generator over the toolkit-backed property
/// functions of `cache`.
///
/// Pass [`TopicModelingConfig::default`] for the PoC settings.
pub fn poc_topic_modeling(
    cache: Arc<ParseCache>,
    config: &TopicModelingConfig,
) -> Result<PipelineGenerator> {
    generic_topic_modeling(
        Arc::new(UposTags::new(Arc::clone(&cache))),
        Arc::new(StopWords::new(Arc::clone(&cache))),
        Arc::new(Lemmas::new(cache)),
        config,
    )
}

/// Run the generic topic-modeling pipeline over `corpus`.
pub fn apply_generic_topic_modeling(
    corpus: Vec<Document>,
    upos_fun: Arc<dyn PropertyFunction<Upos>>,
    stop_fun: Arc<dyn PropertyFunction<bool>>,
    lemma_fun: Arc<dyn PropertyFunction<String>>,
    config: &TopicModelingConfig,
) -> Result<Vec<Document>> {
    generic_topic_modeling(upos_fun, stop_fun, lemma_fun, config)?.run(corpus)
}

/// Run the toolkit-backed topic-modeling pipeline over `corpus`.
pub fn apply_poc_topic_modeling(
    corpus: Vec<Document>,
    cache: Arc<ParseCache>,
    config: &TopicModelingConfig,
) -> Result<Vec<Document>> {
    poc_topic_modeling(cache, config)?.run(corpus)
}
