//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::TableStyles;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("j/↓", "Next row"),
            ("k/↑", "Previous row"),
            ("Enter", "Open comment details"),
        ],
    ),
    (
        "Pages",
        &[
            ("n/l/→/PgDn", "Next page"),
            ("p/h/←/PgUp", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("+ / -", "Larger / smaller pages"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Search by exact email"),
            ("f", "Email column filter"),
            ("c", "Clear search"),
            ("Ctrl+U", "Reset typed filter"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Refresh current page"),
            ("?", "Toggle this help"),
            ("q/Ctrl+C", "Quit"),
        ],
    ),
];

/// Width of the key column, in cells.
const KEY_COLUMN_WIDTH: usize = 14;

/// Build the help content lines grouped by category.
fn build_help_content(styles: &TableStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, entries)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, styles.label)));
        for (keys, description) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN_WIDTH), styles.key),
                Span::styled(*description, Style::default()),
            ]));
        }
    }
    lines
}

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TableStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_bottom(
                    Line::from(Span::styled(" Press Esc or ? to close ", styles.muted))
                        .alignment(Alignment::Center),
                )
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::helpers::buffer_to_string;
    use crate::view::styles::ColorConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn help_content_has_every_section() {
        let lines = build_help_content(&TableStyles::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        for (category, _) in HELP_SECTIONS {
            assert!(text.iter().any(|l| l == *category), "missing {category}");
        }
    }

    #[test]
    fn overlay_renders_title_and_hint() {
        let styles = TableStyles::with_color_config(ColorConfig::new(false));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &styles))
            .unwrap();
        let out = buffer_to_string(terminal.backend().buffer());

        assert!(out.contains("Keyboard Shortcuts"));
        assert!(out.contains("Search by exact email"));
        assert!(out.contains("Press Esc or ? to close"));
    }
}
