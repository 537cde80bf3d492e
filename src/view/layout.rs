//! Screen layout rendering.
//!
//! Pure layout logic: header, search bar, results and status bar stacked
//! vertically, with the help overlay drawn on top when visible.

use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::results::render_results;
use super::search_input::SearchBar;
use super::styles::ViewStyles;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Screen header line, zero height when absent.
    pub header: Rect,
    /// Bordered search input.
    pub search: Rect,
    /// Bordered results list.
    pub results: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` for `state`. The header row collapses when the screen has none.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let header_height = if state.kind().header().is_some() {
        HEADER_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        results: chunks[2],
        status: chunks[3],
    }
}

/// Render one full frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ViewStyles) {
    let areas = calculate_areas(frame.area(), state);

    if let Some(header) = state.kind().header() {
        let paragraph = Paragraph::new(Line::styled(header, styles.header))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, areas.header);
    }

    frame.render_widget(SearchBar::new(state.input(), styles), areas.search);
    render_results(frame, areas.results, state, styles);
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let mut spans = Vec::new();

    if let Some(row) = state.results().selected_row() {
        spans.push(Span::styled(row.handle().slot, styles.key));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        "Esc clear/quit · Tab switch screen · F1 help",
        styles.muted,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
