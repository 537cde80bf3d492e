//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay listing the key bindings.
//! Toggled by F1, dismissed by Esc.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::ViewStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// (keys, description) rows shown in the overlay.
const SHORTCUTS: &[(&str, &str)] = &[
    ("type", "Filter resources"),
    ("↑/Ctrl+p", "Previous resource"),
    ("↓/Ctrl+n", "Next resource"),
    ("PgUp/PgDn", "First / last resource"),
    ("←/→", "Move cursor"),
    ("Home/End", "Start / end of query"),
    ("Ctrl+u", "Clear query"),
    ("Tab", "Switch screen"),
    ("Esc", "Clear query, or quit if empty"),
    ("F1", "Toggle this help"),
    ("Ctrl+c", "Quit"),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &ViewStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.header),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on `area` with the specified
/// percentage of width and height. Percentages above 100 are clamped.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = percent_of(area.width, percent_x);
    let popup_height = percent_of(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// `percent`% of `len`, computed in u32 so wide terminals cannot overflow.
fn percent_of(len: u16, percent: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(percent.min(100)) / 100;
    // Never exceeds `len` after clamping
    u16::try_from(scaled).unwrap_or(len)
}

fn build_help_content(styles: &ViewStyles) -> Vec<Line<'static>> {
    SHORTCUTS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("  {:<11} ", keys), styles.key),
                Span::raw(*description),
            ])
        })
        .collect()
}
