//! Closure filter implementation.

use std::fmt;

use super::Filter;

use crate::document::Document;
use crate::error::Result;

/// A filter backed by a closure.
pub struct FnFilter<F> {
    name: &'static str,
    fun: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&Document) -> Result<Document> + Send + Sync,
{
    /// Wrap `fun` as a filter called `name`.
    pub fn new(name: &'static str, fun: F) -> Self {
        FnFilter { name, fun }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&Document) -> Result<Document> + Send + Sync,
{
    fn apply(&self, doc: &Document) -> Result<Document> {
        (self.fun)(doc)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_filter() {
        let filter = FnFilter::new("evens", |doc: &Document| {
            doc.sub_doc((0..doc.original_tokens().len()).filter(|i| i % 2 == 0))
        });
        let doc = Document::from_tokens(["a", "b", "c", "d"]);

        assert_eq!(filter.apply(&doc).unwrap().selected_tokens(), vec!["a", "c"]);
        assert_eq!(filter.name(), "evens");
    }
}
