//! Results list rendering.

use super::constants::HIGHLIGHT_SYMBOL;
use super::styles::ViewStyles;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Message shown when the query matches nothing.
pub const NO_MATCHES: &str = "No matching resources";

/// Render the visible rows with the selection highlighted.
///
/// The block title shows the screen name and `visible/total` row counts.
pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let results = state.results();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(results_title(state))
        .border_style(styles.results_border);

    if results.is_empty() {
        let empty = Paragraph::new(Line::styled(NO_MATCHES, styles.muted)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Inner width minus borders and the highlight gutter
    let text_width = usize::from(area.width)
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.width());

    let items: Vec<ListItem> = results
        .rows()
        .iter()
        .map(|item| ListItem::new(fit_to_width(item.handle().text, text_width).into_owned()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.selected)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default().with_selected(results.selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Title of the results block, e.g. ` directory (3/9) `.
pub fn results_title(state: &AppState) -> String {
    format!(
        " {} ({}/{}) ",
        state.kind(),
        state.results().len(),
        state.total_rows()
    )
}

/// Shorten `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn fit_to_width(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let budget = width - 1;
    let mut used = 0;
    let mut fitted = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        fitted.push(ch);
    }
    fitted.push('…');
    Cow::Owned(fitted)
}
