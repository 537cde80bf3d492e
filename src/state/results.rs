//! Snapshot of the rows currently on screen, plus the selection.

use crate::catalog::RowHandle;
use crate::filter::ResultsDisplay;
use crate::model::Item;
use tracing::debug;

/// Rows handed over by the last filter pass and the highlighted row.
///
/// This is the terminal UI's side of [`ResultsDisplay`]: every reload
/// replaces the rows and keeps the selection inside the new row count.
#[derive(Debug, Clone, Default)]
pub struct ResultsList {
    rows: Vec<Item<RowHandle>>,
    selected: Option<usize>,
}

impl ResultsList {
    /// Rows from the last reload, in list order.
    pub fn rows(&self) -> &[Item<RowHandle>] {
        &self.rows
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the highlighted row, `None` when there are no rows.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted row itself.
    pub fn selected_row(&self) -> Option<&Item<RowHandle>> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    /// Move down one row, stopping at the last.
    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some((idx + 1).min(self.rows.len() - 1));
        }
    }

    /// Move up one row, stopping at the first.
    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }

    /// Highlight the first row.
    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Highlight the last row.
    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = Some(self.rows.len() - 1);
        }
    }
}

impl ResultsDisplay<RowHandle> for ResultsList {
    fn reload(&mut self, rows: &[&Item<RowHandle>]) {
        self.rows.clear();
        self.rows.extend(rows.iter().map(|item| (*item).clone()));

        self.selected = match (self.rows.len(), self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(idx)) => Some(idx.min(len - 1)),
        };
        debug!(rows = self.rows.len(), selected = ?self.selected, "Results reloaded");
    }
}
