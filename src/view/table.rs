//! Comments table widget.

use super::constants::{
    BODY_PREVIEW_WIDTH, EMAIL_COLUMN_PERCENT, ID_COLUMN_WIDTH, NAME_COLUMN_PERCENT,
};
use super::helpers::truncate_to_width;
use super::styles::TableStyles;
use crate::model::Comment;
use crate::state::ViewState;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Column headers, in display order.
pub const COLUMN_TITLES: [&str; 4] = ["Id", "Name", "Email", "Body"];

fn comment_row(comment: &Comment) -> Row<'_> {
    Row::new(vec![
        Cell::from(comment.id.to_string()),
        Cell::from(comment.name.as_str()),
        Cell::from(comment.email.as_str()),
        Cell::from(truncate_to_width(comment.body_summary(), BODY_PREVIEW_WIDTH)),
    ])
}

fn table_title(view: &ViewState, styles: &TableStyles) -> Line<'static> {
    let mut spans = vec![Span::styled(" Comments ", styles.border)];
    if view.is_loading() {
        spans.push(Span::styled("(loading…) ", styles.loading));
    }
    Line::from(spans)
}

/// Render the rows of `view` with the cursor row highlighted.
///
/// With no rows, shows a placeholder instead of an empty grid.
pub fn render_comment_table(frame: &mut Frame, area: Rect, view: &ViewState, styles: &TableStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border)
        .title(table_title(view, styles));

    if view.rows().is_empty() {
        let message = if view.is_loading() {
            "Loading comments…"
        } else {
            "No comments"
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(message, styles.muted)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(COLUMN_TITLES.iter().map(|t| Cell::from(*t))).style(styles.header);
    let widths = [
        Constraint::Length(ID_COLUMN_WIDTH),
        Constraint::Percentage(NAME_COLUMN_PERCENT),
        Constraint::Percentage(EMAIL_COLUMN_PERCENT),
        Constraint::Min(10),
    ];

    let table = Table::new(view.rows().iter().map(comment_row), widths)
        .header(header)
        .block(block)
        .row_highlight_style(styles.highlight)
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(view.cursor()));
    frame.render_stateful_widget(table, area, &mut table_state);
}
