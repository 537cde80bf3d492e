//! One search screen: a fixed list, the current query, and a display sink.

use super::FilterableList;
use crate::model::Item;
use tracing::debug;

/// Presentation-side receiver of filtered rows.
///
/// Implementors announce the new row count and schedule a redraw in
/// whatever display layer they wrap. The filter core never renders.
pub trait ResultsDisplay<H> {
    /// Replace the displayed rows with `rows`.
    fn reload(&mut self, rows: &[&Item<H>]);
}

/// Collects an owned snapshot of the rows, replacing earlier contents.
impl<H: Clone> ResultsDisplay<H> for Vec<Item<H>> {
    fn reload(&mut self, rows: &[&Item<H>]) {
        self.clear();
        self.extend(rows.iter().map(|item| (*item).clone()));
    }
}

/// A screen session: one immutable item list and the active query.
#[derive(Debug, Clone)]
pub struct SearchScreen<H> {
    list: FilterableList<H>,
    query: String,
}

impl<H> SearchScreen<H> {
    /// Start a session over `list` with an empty query.
    pub fn new(list: FilterableList<H>) -> Self {
        Self {
            list,
            query: String::new(),
        }
    }

    /// Apply a new query and push the recomputed rows to `display`.
    ///
    /// `query` is the raw search field contents. Returns the visible row count.
    pub fn set_query<D>(&mut self, query: &str, display: &mut D) -> usize
    where
        D: ResultsDisplay<H> + ?Sized,
    {
        self.query.clear();
        self.query.push_str(query);

        let rows = self.list.set_query(&self.query);
        debug!(
            query = %self.query,
            visible = rows.len(),
            total = self.list.len(),
            "Query applied"
        );
        display.reload(&rows);
        rows.len()
    }

    /// Push the rows for the current query without changing it.
    pub fn refresh<D>(&self, display: &mut D) -> usize
    where
        D: ResultsDisplay<H> + ?Sized,
    {
        let rows = self.visible();
        display.reload(&rows);
        rows.len()
    }

    /// Rows matching the current query.
    pub fn visible(&self) -> Vec<&Item<H>> {
        self.list.set_query(&self.query)
    }

    /// The query last passed to [`SearchScreen::set_query`].
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The unfiltered list.
    pub fn list(&self) -> &FilterableList<H> {
        &self.list
    }
}

impl<H> Default for SearchScreen<H> {
    fn default() -> Self {
        Self::new(FilterableList::default())
    }
}
