//! Query filtering over a fixed, ordered list of labeled items.
//!
//! A [`FilterableList`] is built once per screen and never mutated.
//! Every query is answered by a full rescan: the result is a pure function
//! of (list, query), so repeated or out-of-order queries cannot drift.

pub mod screen;

pub use screen::{ResultsDisplay, SearchScreen};

use crate::model::Item;

/// Ordered collection of items answering "which labels match this query".
///
/// Insertion order is the display order and is never changed. Labels need
/// not be unique.
#[derive(Debug, Clone)]
pub struct FilterableList<H> {
    items: Vec<Item<H>>,
    /// Case-folded labels, index-aligned with `items`.
    folded: Vec<String>,
}

impl<H> FilterableList<H> {
    /// Build the list, fixing its order to the input order.
    pub fn new(items: impl IntoIterator<Item = Item<H>>) -> Self {
        let items: Vec<Item<H>> = items.into_iter().collect();
        let folded = items.iter().map(|item| fold_case(item.label())).collect();
        Self { items, folded }
    }

    /// Items whose label contains `query`, ignoring case, in list order.
    ///
    /// An empty query returns every item. The query is used verbatim:
    /// surrounding whitespace is significant.
    pub fn set_query(&self, query: &str) -> Vec<&Item<H>> {
        if query.is_empty() {
            return self.items.iter().collect();
        }

        let needle = fold_case(query);
        self.items
            .iter()
            .zip(&self.folded)
            .filter(|(_, label)| label.contains(needle.as_str()))
            .map(|(item, _)| item)
            .collect()
    }

    /// All items in their original order.
    pub fn items(&self) -> &[Item<H>] {
        &self.items
    }

    /// Number of items, ignoring any query.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a list built from no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An unconstructed list behaves as an empty one.
impl<H> Default for FilterableList<H> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            folded: Vec::new(),
        }
    }
}

impl<H> FromIterator<Item<H>> for FilterableList<H> {
    fn from_iter<I: IntoIterator<Item = Item<H>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Unicode case folding used on both labels and queries.
///
/// Full default folding, applied per character: `ß` folds to `ss` and every
/// sigma form folds to `σ`. A substring of a label therefore always folds to
/// a substring of the folded label.
pub fn fold_case(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        caseless::default_case_fold_str(text)
    }
}
