//! Comment detail modal.
//!
//! Centered overlay showing every field of the selected comment, with the
//! body wrapped. Esc, Enter or q closes it.

use super::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line, key_value_line};
use super::styles::TableStyles;
use crate::model::Comment;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn detail_lines<'a>(comment: &'a Comment, styles: &TableStyles) -> Vec<Line<'a>> {
    let post = comment
        .post_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        key_value_line("Id", comment.id.to_string(), styles.label),
        key_value_line("Post", post, styles.label),
        key_value_line("Name", comment.name.clone(), styles.label),
        key_value_line("Email", comment.email.clone(), styles.label),
        empty_line(),
        Line::from(Span::styled("Body", styles.label)),
    ];
    lines.extend(comment.body.lines().map(Line::from));
    lines
}

/// Render `comment` in a modal over whatever is already drawn.
pub fn render_detail_modal(frame: &mut Frame, comment: &Comment, styles: &TableStyles) {
    let area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    // Clear the background for overlay effect
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(detail_lines(comment, styles))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border)
                .title(format!(" Comment #{} ", comment.id))
                .title_bottom(Line::from(" Esc/Enter/q: close ").alignment(Alignment::Center)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
