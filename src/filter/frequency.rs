//! Document frequency statistics and the frequency filter.
//!
//! The document frequency of a property value is the number of documents in
//! a corpus in which at least one token has that value. Tokens whose value is
//! too rare to reason about or too common to carry meaning are removed by a
//! [`FrequencyFilter`], which is built in two phases: a pass over the whole
//! corpus collects the statistics, after which the filter is applied to each
//! document on its own.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nlprep::document::Document;
//! use nlprep::filter::{DocumentFrequencyBounds, Filter, FrequencyFilter};
//! use nlprep::property::TokenText;
//!
//! let corpus = vec![
//!     Document::from_tokens(["a", "b", "a"]),
//!     Document::from_tokens(["a", "c"]),
//! ];
//! let bounds = DocumentFrequencyBounds::new().with_min_num(2.0);
//! let filter = FrequencyFilter::<String>::new(&corpus, Arc::new(TokenText), &bounds).unwrap();
//!
//! assert_eq!(filter.apply(&corpus[0]).unwrap().selected_tokens(), vec!["a", "a"]);
//! assert_eq!(filter.apply(&corpus[1]).unwrap().selected_tokens(), vec!["a"]);
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Filter;
use super::interval::Interval;
use super::property::PropertyFilter;

use crate::document::Document;
use crate::error::{NlprepError, Result};
use crate::property::{PropertyFunction, compute_checked};

/// Bounds on the document frequency of a property value.
///
/// `min_num` / `max_num` are absolute document counts. `min_rate` /
/// `max_rate` are fractions of the corpus size and override the count on the
/// same side when given. Missing bounds are unbounded.
///
/// `interval_open` excludes the boundary values on both sides;
/// `lower_open` / `upper_open` override it for a single side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentFrequencyBounds {
    /// Minimum number of documents
    pub min_num: Option<f64>,

    /// Maximum number of documents
    pub max_num: Option<f64>,

    /// Minimum fraction of documents, overrides `min_num`
    pub min_rate: Option<f64>,

    /// Maximum fraction of documents, overrides `max_num`
    pub max_rate: Option<f64>,

    /// Exclude the boundary values on both sides
    pub interval_open: bool,

    /// Per-side override of `interval_open` for the lower bound
    pub lower_open: Option<bool>,

    /// Per-side override of `interval_open` for the upper bound
    pub upper_open: Option<bool>,

    /// Only count values of tokens that are still selected
    pub count_only_selected: bool,
}

impl DocumentFrequencyBounds {
    /// Bounds that accept every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of documents.
    pub fn with_min_num(mut self, min_num: f64) -> Self {
        self.min_num = Some(min_num);
        self
    }

    /// Set the maximum number of documents.
    pub fn with_max_num(mut self, max_num: f64) -> Self {
        self.max_num = Some(max_num);
        self
    }

    /// Set the minimum fraction of documents.
    pub fn with_min_rate(mut self, min_rate: f64) -> Self {
        self.min_rate = Some(min_rate);
        self
    }

    /// Set the maximum fraction of documents.
    pub fn with_max_rate(mut self, max_rate: f64) -> Self {
        self.max_rate = Some(max_rate);
        self
    }

    /// Set whether both boundaries are excluded.
    pub fn with_interval_open(mut self, open: bool) -> Self {
        self.interval_open = open;
        self
    }

    /// Set whether the lower boundary is excluded.
    pub fn with_lower_open(mut self, open: bool) -> Self {
        self.lower_open = Some(open);
        self
    }

    /// Set whether the upper boundary is excluded.
    pub fn with_upper_open(mut self, open: bool) -> Self {
        self.upper_open = Some(open);
        self
    }

    /// Set whether only selected tokens are counted.
    pub fn with_count_only_selected(mut self, only_selected: bool) -> Self {
        self.count_only_selected = only_selected;
        self
    }

    /// Check that the bounds are meaningful.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("min_num", self.min_num), ("max_num", self.max_num)] {
            match value {
                Some(value) if !(value >= 0.0) => {
                    return Err(NlprepError::invalid_config(format!(
                        "{name} must be a non-negative number, got {value}"
                    )));
                }
                _ => {}
            }
        }
        for (name, value) in [("min_rate", self.min_rate), ("max_rate", self.max_rate)] {
            match value {
                Some(value) if !(0.0..=1.0).contains(&value) => {
                    return Err(NlprepError::invalid_config(format!(
                        "{name} must be within [0, 1], got {value}"
                    )));
                }
                _ => {}
            }
        }
        if let (Some(min), Some(max)) = (self.min_num, self.max_num) {
            if min > max {
                return Err(NlprepError::invalid_config(format!(
                    "min_num ({min}) is greater than max_num ({max})"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_rate, self.max_rate) {
            if min > max {
                return Err(NlprepError::invalid_config(format!(
                    "min_rate ({min}) is greater than max_rate ({max})"
                )));
            }
        }
        Ok(())
    }

    /// The accepted document counts for a corpus of `corpus_size` documents.
    pub fn interval(&self, corpus_size: usize) -> Interval {
        let size = corpus_size as f64;
        Interval {
            lower: self.min_rate.map(|rate| rate * size).or(self.min_num),
            upper: self.max_rate.map(|rate| rate * size).or(self.max_num),
            lower_open: self.lower_open.unwrap_or(self.interval_open),
            upper_open: self.upper_open.unwrap_or(self.interval_open),
        }
    }
}

/// Count, for every distinct property value, the number of documents that
/// contain it.
///
/// With `count_only_selected`, only the values of selected tokens count.
pub fn document_frequencies<P, F>(
    corpus: &[Document],
    property_fun: &F,
    count_only_selected: bool,
) -> Result<AHashMap<P, usize>>
where
    P: Eq + Hash,
    F: PropertyFunction<P> + ?Sized,
{
    let mut frequencies: AHashMap<P, usize> = AHashMap::new();
    for doc in corpus {
        let values = compute_checked(property_fun, doc)?;
        let distinct: AHashSet<P> = if count_only_selected {
            values
                .into_iter()
                .enumerate()
                .filter(|(index, _)| doc.selected().contains(index))
                .map(|(_, value)| value)
                .collect()
        } else {
            values.into_iter().collect()
        };

        for value in distinct {
            *frequencies.entry(value).or_insert(0) += 1;
        }
    }
    Ok(frequencies)
}

/// The property values whose document frequency lies within `bounds`.
pub fn props_by_document_frequency<P, F>(
    corpus: &[Document],
    property_fun: &F,
    bounds: &DocumentFrequencyBounds,
) -> Result<AHashSet<P>>
where
    P: Eq + Hash,
    F: PropertyFunction<P> + ?Sized,
{
    bounds.validate()?;
    let frequencies = document_frequencies(corpus, property_fun, bounds.count_only_selected)?;
    Ok(select_by_frequency(frequencies, &bounds.interval(corpus.len())))
}

fn select_by_frequency<P>(frequencies: AHashMap<P, usize>, interval: &Interval) -> AHashSet<P>
where
    P: Eq + Hash,
{
    frequencies
        .into_iter()
        .filter(|&(_, count)| interval.contains(count as f64))
        .map(|(value, _)| value)
        .collect()
}

/// A filter that keeps tokens whose property value has a document frequency
/// within the configured bounds.
///
/// A filter built from an empty corpus has no statistics to go by and passes
/// every document through unchanged.
pub struct FrequencyFilter<P> {
    inner: Option<PropertyFilter<P>>,
    bounds: DocumentFrequencyBounds,
}

impl<P> FrequencyFilter<P>
where
    P: Eq + Hash + Send + Sync + 'static,
{
    /// Scan `corpus` and build the filter.
    pub fn new(
        corpus: &[Document],
        property_fun: Arc<dyn PropertyFunction<P>>,
        bounds: &DocumentFrequencyBounds,
    ) -> Result<Self> {
        bounds.validate()?;

        if corpus.is_empty() {
            warn!(
                "document frequency filter built from an empty corpus, passing documents through"
            );
            return Ok(FrequencyFilter {
                inner: None,
                bounds: bounds.clone(),
            });
        }

        let frequencies =
            document_frequencies(corpus, &*property_fun, bounds.count_only_selected)?;
        let vocabulary = frequencies.len();
        let interval = bounds.interval(corpus.len());
        let allowed = select_by_frequency(frequencies, &interval);
        debug!(
            documents = corpus.len(),
            vocabulary,
            allowed = allowed.len(),
            lower = ?interval.lower,
            upper = ?interval.upper,
            "computed document frequencies"
        );

        Ok(FrequencyFilter {
            inner: Some(PropertyFilter::new(property_fun, allowed)),
            bounds: bounds.clone(),
        })
    }

    /// The allowed property values, or `None` if the filter passes everything.
    pub fn allowed(&self) -> Option<&AHashSet<P>> {
        self.inner.as_ref().map(PropertyFilter::required)
    }

    /// The bounds this filter was built with.
    pub fn bounds(&self) -> &DocumentFrequencyBounds {
        &self.bounds
    }
}

impl<P> Filter for FrequencyFilter<P>
where
    P: Eq + Hash + Send + Sync + 'static,
{
    fn apply(&self, doc: &Document) -> Result<Document> {
        match &self.inner {
            Some(filter) => filter.apply(doc),
            None => Ok(doc.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

impl<P> fmt::Debug for FrequencyFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyFilter")
            .field("bounds", &self.bounds)
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TokenText;

    fn corpus() -> Vec<Document> {
        vec![
            Document::from_tokens(["a", "b", "a"]),
            Document::from_tokens(["a", "c"]),
        ]
    }

    fn sorted(set: AHashSet<String>) -> Vec<String> {
        let mut values: Vec<String> = set.into_iter().collect();
        values.sort();
        values
    }

    #[test]
    fn test_document_frequencies() {
        let frequencies = document_frequencies(&corpus(), &TokenText, false).unwrap();

        assert_eq!(frequencies.len(), 3);
        assert_eq!(frequencies["a"], 2);
        assert_eq!(frequencies["b"], 1);
        assert_eq!(frequencies["c"], 1);
    }

    #[test]
    fn test_document_frequencies_only_selected() {
        let corpus = vec![
            Document::from_tokens(["a", "b"]).sub_doc([1]).unwrap(),
            Document::from_tokens(["a", "b"]),
        ];

        let all = document_frequencies(&corpus, &TokenText, false).unwrap();
        let selected = document_frequencies(&corpus, &TokenText, true).unwrap();

        assert_eq!(all["a"], 2);
        assert_eq!(selected["a"], 1);
        assert_eq!(selected["b"], 2);
    }

    #[test]
    fn test_min_num() {
        let bounds = DocumentFrequencyBounds::new().with_min_num(2.0);
        let props = props_by_document_frequency(&corpus(), &TokenText, &bounds).unwrap();

        assert_eq!(sorted(props), vec!["a"]);
    }

    #[test]
    fn test_min_zero_returns_whole_vocabulary() {
        let bounds = DocumentFrequencyBounds::new().with_min_num(0.0);
        let props = props_by_document_frequency(&corpus(), &TokenText, &bounds).unwrap();

        assert_eq!(sorted(props), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_open_and_closed_bounds() {
        let closed = DocumentFrequencyBounds::new().with_min_num(1.0).with_max_num(2.0);
        let props = props_by_document_frequency(&corpus(), &TokenText, &closed).unwrap();
        assert_eq!(sorted(props), vec!["a", "b", "c"]);

        let open = closed.clone().with_interval_open(true);
        let props = props_by_document_frequency(&corpus(), &TokenText, &open).unwrap();
        assert!(props.is_empty());

        let lower_open = closed.with_lower_open(true);
        let props = props_by_document_frequency(&corpus(), &TokenText, &lower_open).unwrap();
        assert_eq!(sorted(props), vec!["a"]);
    }

    #[test]
    fn test_rate_overrides_num() {
        // max_rate 0.5 of 2 documents allows a frequency of at most 1
        let bounds = DocumentFrequencyBounds::new()
            .with_max_num(10.0)
            .with_max_rate(0.5);
        let props = props_by_document_frequency(&corpus(), &TokenText, &bounds).unwrap();

        assert_eq!(sorted(props), vec!["b", "c"]);
    }

    #[test]
    fn test_interval_from_bounds() {
        let bounds = DocumentFrequencyBounds::new()
            .with_min_num(5.0)
            .with_max_rate(0.25)
            .with_upper_open(true);
        let interval = bounds.interval(40);

        assert_eq!(interval.lower, Some(5.0));
        assert_eq!(interval.upper, Some(10.0));
        assert!(!interval.lower_open);
        assert!(interval.upper_open);
    }

    #[test]
    fn test_validate() {
        assert!(DocumentFrequencyBounds::new().validate().is_ok());
        assert!(
            DocumentFrequencyBounds::new()
                .with_min_rate(1.5)
                .validate()
                .is_err()
        );
        assert!(
            DocumentFrequencyBounds::new()
                .with_min_num(-1.0)
                .validate()
                .is_err()
        );
        assert!(
            DocumentFrequencyBounds::new()
                .with_min_num(3.0)
                .with_max_num(2.0)
                .validate()
                .is_err()
        );
        assert!(
            DocumentFrequencyBounds::new()
                .with_min_num(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_frequency_filter() {
        let corpus = corpus();
        let bounds = DocumentFrequencyBounds::new().with_max_num(1.0);
        let filter = FrequencyFilter::<String>::new(&corpus, Arc::new(TokenText), &bounds).unwrap();

        assert_eq!(filter.apply(&corpus[0]).unwrap().selected_tokens(), vec!["b"]);
        assert_eq!(filter.apply(&corpus[1]).unwrap().selected_tokens(), vec!["c"]);
        assert_eq!(filter.allowed().map(|set| set.len()), Some(2));
    }

    #[test]
    fn test_frequency_filter_empty_corpus_passes_through() {
        let bounds = DocumentFrequencyBounds::new().with_min_num(5.0);
        let filter = FrequencyFilter::<String>::new(&[], Arc::new(TokenText), &bounds).unwrap();
        let doc = Document::from_tokens(["x", "y"]);

        assert!(filter.allowed().is_none());
        assert_eq!(filter.apply(&doc).unwrap(), doc);
    }

    #[test]
    fn test_bounds_from_json() {
        let bounds: DocumentFrequencyBounds = serde_json::from_str(
            r#"{"min_num": 5, "max_rate": 0.25, "count_only_selected": true}"#,
        )
        .unwrap();

        assert_eq!(bounds.min_num, Some(5.0));
        assert_eq!(bounds.max_rate, Some(0.25));
        assert!(!bounds.interval_open);
        assert!(bounds.count_only_selected);

        let unknown = serde_json::from_str::<DocumentFrequencyBounds>(r#"{"min_count": 5}"#);
        assert!(unknown.is_err());
    }
}
