//! Property filter implementation.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use ahash::AHashSet;

use super::Filter;

use crate::document::Document;
use crate::error::Result;
use crate::property::{PropertyFunction, compute_checked};

/// A filter that keeps tokens whose property value is in a required set.
///
/// This can be used to select (or, negated, to remove) tokens by universal
/// POS tag, by a fixed vocabulary of lemmas, and so on.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use nlprep::document::Document;
/// use nlprep::filter::{Filter, PropertyFilter};
/// use nlprep::property::TokenText;
///
/// let filter = PropertyFilter::new(Arc::new(TokenText), ["cat".to_string(), "dog".to_string()]);
/// let doc = Document::from_tokens(["a", "cat", "and", "a", "dog"]);
///
/// assert_eq!(filter.apply(&doc).unwrap().selected_tokens(), vec!["cat", "dog"]);
/// ```
pub struct PropertyFilter<P> {
    property_fun: Arc<dyn PropertyFunction<P>>,
    required: Arc<AHashSet<P>>,
}

impl<P> PropertyFilter<P>
where
    P: Eq + Hash + Send + Sync + 'static,
{
    /// Create a new filter keeping tokens whose property is in `required`.
    pub fn new<I>(property_fun: Arc<dyn PropertyFunction<P>>, required: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        PropertyFilter {
            property_fun,
            required: Arc::new(required.into_iter().collect()),
        }
    }

    /// The set of required property values.
    pub fn required(&self) -> &AHashSet<P> {
        &self.required
    }
}

impl<P> Clone for PropertyFilter<P> {
    fn clone(&self) -> Self {
        PropertyFilter {
            property_fun: Arc::clone(&self.property_fun),
            required: Arc::clone(&self.required),
        }
    }
}

impl<P> Filter for PropertyFilter<P>
where
    P: Eq + Hash + Send + Sync + 'static,
{
    fn apply(&self, doc: &Document) -> Result<Document> {
        let values = compute_checked(&*self.property_fun, doc)?;
        doc.sub_doc(
            values
                .iter()
                .enumerate()
                .filter(|(_, value)| self.required.contains(*value))
                .map(|(index, _)| index),
        )
    }

    fn name(&self) -> &'static str {
        "property"
    }
}

impl<P> fmt::Debug for PropertyFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyFilter")
            .field("required", &self.required.len())
            .finish_non_exhaustive()
    }
}
