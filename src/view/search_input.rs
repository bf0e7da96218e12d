//! Search input widget for rendering the search bar.

use super::styles::TableStyles;
use crate::state::{EmailFilter, SearchInput};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget.
///
/// Renders the editable input while typing, or the active filter read-only
/// when a search is applied. Renders nothing otherwise.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    active: Option<&'a EmailFilter>,
    styles: &'a TableStyles,
}

impl<'a> SearchBar<'a> {
    /// Create new SearchBar widget.
    pub fn new(
        input: &'a SearchInput,
        active: Option<&'a EmailFilter>,
        styles: &'a TableStyles,
    ) -> Self {
        Self {
            input,
            active,
            styles,
        }
    }

    /// Whether there is anything to draw.
    pub fn is_visible(&self) -> bool {
        self.input.is_typing() || self.active.is_some()
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.input {
            SearchInput::Typing {
                query,
                cursor,
                origin,
            } => {
                // Split query into before/after cursor for rendering cursor
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ]);

                let title = format!(" {} (Enter: apply, Esc: cancel, Ctrl+U: reset) ", origin.title());
                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(self.styles.border)
                            .title(title),
                    )
                    .render(area, buf);
            }
            SearchInput::Inactive => {
                let Some(filter) = self.active else {
                    return;
                };
                Paragraph::new(Line::from(filter.as_str()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(self.styles.muted)
                            .title(" Email filter (c: clear) "),
                    )
                    .render(area, buf);
            }
        }
    }
}
