//! Search input widget for rendering the search bar.

use super::styles::ViewStyles;
use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget: the raw query with a block cursor.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    styles: &'a ViewStyles,
}

impl<'a> SearchBar<'a> {
    /// Widget rendering `input`.
    pub fn new(input: &'a SearchInput, styles: &'a ViewStyles) -> Self {
        Self { input, styles }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (before, under, after) = self.input.split_at_cursor();

        // Past the end, the cursor is drawn on a blank cell
        let cursor_char = under.map_or_else(|| " ".to_string(), |ch| ch.to_string());

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.styles.cursor),
            Span::raw(after),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .border_style(self.styles.search_border),
        );

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_lines(input: &SearchInput) -> Vec<String> {
        let styles = ViewStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(SearchBar::new(input, &styles), frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..3u16)
            .map(|y| (0..30u16).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn renders_query_inside_titled_border() {
        let lines = render_to_lines(&SearchInput::with_text("fire"));
        assert!(lines[0].contains("Search"), "Title missing: {:?}", lines);
        assert!(lines[1].contains("fire"), "Query missing: {:?}", lines);
    }

    #[test]
    fn renders_empty_query() {
        let lines = render_to_lines(&SearchInput::default());
        assert_eq!(lines[1].trim_matches(|c| c == '│' || c == ' '), "");
    }

    #[test]
    fn cursor_in_middle_keeps_text_intact() {
        let mut input = SearchInput::with_text("unit");
        input.move_left();
        input.move_left();
        let lines = render_to_lines(&input);
        assert!(lines[1].contains("unit"), "Text split around cursor: {:?}", lines);
    }
}
