//! Subset length filter implementation.

use std::fmt;
use std::sync::Arc;

use super::Filter;
use super::interval::Interval;

use crate::document::Document;
use crate::error::{NlprepError, Result};
use crate::property::SplitFunction;

/// A filter that keeps tokens based on the length of the group they belong
/// to, e.g. tokens of sentences with at least five and at most 40 tokens.
///
/// Group lengths count original tokens, independent of the selection.
pub struct SubsetLenFilter<P> {
    split_fun: Arc<dyn SplitFunction<P>>,
    interval: Interval,
}

impl<P: 'static> SubsetLenFilter<P> {
    /// Create a new filter keeping tokens of groups whose length lies in
    /// `[min_len, max_len]` (or `(min_len, max_len)` if `interval_open`).
    pub fn new(
        split_fun: Arc<dyn SplitFunction<P>>,
        min_len: Option<usize>,
        max_len: Option<usize>,
        interval_open: bool,
    ) -> Self {
        let interval = Interval::new(
            min_len.map(|len| len as f64),
            max_len.map(|len| len as f64),
            interval_open,
        );
        SubsetLenFilter {
            split_fun,
            interval,
        }
    }

    /// Create a new filter from an explicit interval.
    pub fn with_interval(split_fun: Arc<dyn SplitFunction<P>>, interval: Interval) -> Self {
        SubsetLenFilter {
            split_fun,
            interval,
        }
    }

    /// The accepted group lengths.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl<P: 'static> Filter for SubsetLenFilter<P> {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let groups = self.split_fun.split(doc)?;
        let covered: usize = groups.iter().map(Vec::len).sum();
        if covered != doc.original_tokens().len() {
            return Err(NlprepError::property(format!(
                "split function covered {} of {} tokens",
                covered,
                doc.original_tokens().len()
            )));
        }

        let len_by_token = groups
            .iter()
            .flat_map(|group| std::iter::repeat_n(group.len(), group.len()));
        doc.sub_doc(
            len_by_token
                .enumerate()
                .filter(|&(_, len)| self.interval.contains(len as f64))
                .map(|(index, _)| index),
        )
    }

    fn name(&self) -> &'static str {
        "subset_len"
    }
}

impl<P> fmt::Debug for SubsetLenFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubsetLenFilter")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits after every token equal to ".".
    fn sentences(doc: &Document) -> Result<Vec<Vec<String>>> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        for token in doc.original_tokens() {
            current.push(token.clone());
            if token == "." {
                groups.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        Ok(groups)
    }

    fn doc() -> Document {
        // sentence lengths: 2, 4, 1
        Document::from_tokens(["Hi", ".", "How", "are", "you", ".", "Bye"])
    }

    #[test]
    fn test_min_len() {
        let filter = SubsetLenFilter::<String>::new(Arc::new(sentences), Some(2), None, false);
        let result = filter.apply(&doc()).unwrap();

        assert_eq!(
            result.selected_tokens(),
            vec!["Hi", ".", "How", "are", "you", "."]
        );
    }

    #[test]
    fn test_open_interval() {
        let filter = SubsetLenFilter::<String>::new(Arc::new(sentences), Some(1), Some(4), true);
        let result = filter.apply(&doc()).unwrap();

        assert_eq!(result.selected_tokens(), vec!["Hi", "."]);
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let filter = SubsetLenFilter::<String>::new(Arc::new(sentences), None, None, false);
        let doc = doc();

        assert_eq!(filter.apply(&doc).unwrap(), doc);
    }

    #[test]
    fn test_rejects_incomplete_split() {
        let first_only = |doc: &Document| -> Result<Vec<Vec<String>>> {
            Ok(vec![doc.original_tokens()[..1].to_vec()])
        };
        let filter = SubsetLenFilter::<String>::new(Arc::new(first_only), None, None, false);

        assert!(matches!(
            filter.apply(&doc()),
            Err(NlprepError::Property(_))
        ));
    }

    #[test]
    fn test_filter_name() {
        let filter = SubsetLenFilter::<String>::new(Arc::new(sentences), None, None, false);
        assert_eq!(filter.name(), "subset_len");
    }
}
