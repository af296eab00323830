//! Two-phase pipeline generation.
//!
//! A [`PipelineFactory`] looks at a whole corpus and returns the
//! [`Pipeline`] to apply to each of its documents. A [`PipelineGenerator`]
//! chains factories into stages, feeding the filtered corpus of one stage
//! into the factory of the next.

use std::fmt;

use tracing::debug;

use super::{Pipeline, apply_filters};

use crate::document::Document;
use crate::error::Result;

/// Functions that generate a pipeline, given a document corpus.
///
/// The corpus is supplied because some filters require an analysis of all
/// documents first, e.g. to filter by the document frequency of lemmas.
pub trait PipelineFactory: Send + Sync {
    /// Build the pipeline for this corpus.
    fn build(&self, corpus: &[Document]) -> Result<Pipeline>;
}

impl<F> PipelineFactory for F
where
    F: Fn(&[Document]) -> Result<Pipeline> + Send + Sync,
{
    fn build(&self, corpus: &[Document]) -> Result<Pipeline> {
        self(corpus)
    }
}

/// An ordered list of pipeline factories, run stage by stage.
pub struct PipelineGenerator {
    stages: Vec<Box<dyn PipelineFactory>>,
    name: String,
}

impl PipelineGenerator {
    /// Create a generator without stages, which returns corpora unchanged.
    pub fn new() -> Self {
        PipelineGenerator {
            stages: Vec::new(),
            name: "generator".to_string(),
        }
    }

    /// Append a stage.
    pub fn add_stage<F: PipelineFactory + 'static>(mut self, factory: F) -> Self {
        self.stages.push(Box::new(factory));
        self
    }

    /// Set a custom name for this generator.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The name of this generator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stages, in execution order.
    pub fn stages(&self) -> &[Box<dyn PipelineFactory>] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the generator has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over `corpus`.
    ///
    /// Each stage builds its pipeline from the output of the previous stage
    /// and applies it to every document. The first failing document aborts
    /// the run.
    pub fn run(&self, corpus: Vec<Document>) -> Result<Vec<Document>> {
        let mut corpus = corpus;
        for (index, stage) in self.stages.iter().enumerate() {
            let pipeline = stage.build(&corpus)?;
            let tokens_before: usize = corpus.iter().map(Document::len).sum();
            corpus = apply_filters(corpus, &pipeline).collect::<Result<Vec<_>>>()?;
            let tokens_after: usize = corpus.iter().map(Document::len).sum();
            debug!(
                generator = %self.name,
                stage = index + 1,
                pipeline = %pipeline.name(),
                documents = corpus.len(),
                tokens_before,
                tokens_after,
                "finished pipeline stage"
            );
        }
        Ok(corpus)
    }
}

impl Default for PipelineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PipelineGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineGenerator")
            .field("name", &self.name)
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::filter::{DocumentFrequencyBounds, FilterExt, FrequencyFilter, PropertyFilter};
    use crate::property::TokenText;

    fn corpus() -> Vec<Document> {
        vec![
            Document::from_tokens(["the", "cat", "sat"]),
            Document::from_tokens(["the", "cat", "ran"]),
            Document::from_tokens(["a", "dog", "sat"]),
        ]
    }

    #[test]
    fn test_empty_generator() {
        let result = PipelineGenerator::new().run(corpus()).unwrap();
        assert_eq!(result, corpus());
    }

    #[test]
    fn test_later_stage_sees_filtered_corpus() {
        let generator = PipelineGenerator::new()
            .add_stage(|_: &[Document]| -> Result<Pipeline> {
                let drop_the =
                    PropertyFilter::new(Arc::new(TokenText), ["the".to_string()]).negated();
                Ok(Pipeline::new().add_filter(Arc::new(drop_the)))
            })
            .add_stage(|corpus: &[Document]| -> Result<Pipeline> {
                // "the" would be frequent enough, but it is gone by now
                let bounds = DocumentFrequencyBounds::new()
                    .with_min_num(2.0)
                    .with_count_only_selected(true);
                let filter = FrequencyFilter::<String>::new(corpus, Arc::new(TokenText), &bounds)?;
                Ok(Pipeline::new().add_filter(Arc::new(filter)))
            });

        let result = generator.run(corpus()).unwrap();

        assert_eq!(generator.len(), 2);
        assert_eq!(result[0].selected_tokens(), vec!["cat", "sat"]);
        assert_eq!(result[1].selected_tokens(), vec!["cat"]);
        assert_eq!(result[2].selected_tokens(), vec!["sat"]);
    }

    #[test]
    fn test_empty_corpus() {
        let stage = |corpus: &[Document]| -> Result<Pipeline> {
            let bounds = DocumentFrequencyBounds::new().with_min_num(1.0);
            let filter = FrequencyFilter::<String>::new(corpus, Arc::new(TokenText), &bounds)?;
            Ok(Pipeline::new().add_filter(Arc::new(filter)))
        };
        let generator = PipelineGenerator::new().add_stage(stage);

        assert!(generator.run(Vec::new()).unwrap().is_empty());
    }
}
