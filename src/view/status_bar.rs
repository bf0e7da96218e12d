//! Status bar: pagination, total, mode and loading state.

use super::styles::TableStyles;
use crate::state::{QueryMode, ViewState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown at the right of the status bar.
pub const STATUS_HINTS: &str = "?: help | q: quit";

/// Total to display. Email-only searches come back without a total header,
/// so fall back to the rows on screen.
fn shown_total(view: &ViewState) -> u64 {
    match view.total_count() {
        0 => view.rows().len() as u64,
        total => total,
    }
}

/// Left part of the status bar, e.g.
/// `Page 3/50 | 500 comments | 10 per page | email: a@b.com`.
pub fn build_status_text(view: &ViewState) -> String {
    let mode = match view.mode() {
        QueryMode::Listing => "all comments".to_string(),
        QueryMode::Searching { filter, .. } => format!("email: {filter}"),
    };
    format!(
        "Page {}/{} | {} comments | {} per page | {}",
        view.page(),
        view.page_count(),
        shown_total(view),
        view.page_size(),
        mode
    )
}

/// Render the status bar.
///
/// With `debug_status`, the last fetch error (if any) is appended.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    styles: &TableStyles,
    debug_status: bool,
) {
    let mut spans = vec![Span::raw(build_status_text(view))];

    if view.is_loading() {
        spans.push(Span::styled(" | Loading…", styles.loading));
    }
    if debug_status {
        if let Some(err) = view.last_error() {
            spans.push(Span::styled(format!(" | {err}"), styles.error));
        }
    }
    spans.push(Span::styled(format!(" | {STATUS_HINTS}"), styles.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, CommentPage, FetchError};
    use crate::state::{reduce, EmailFilter, ViewEvent};
    use crate::view::helpers::buffer_to_string;
    use crate::view::styles::ColorConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn complete(view: ViewState, outcome: Result<CommentPage, FetchError>) -> ViewState {
        let t = reduce(view, ViewEvent::Init);
        let seq = t.request.unwrap().seq;
        reduce(t.state, ViewEvent::FetchCompleted { seq, outcome }).state
    }

    fn render(view: &ViewState, debug_status: bool) -> String {
        let styles = TableStyles::with_color_config(ColorConfig::new(false));
        let mut terminal = Terminal::new(TestBackend::new(140, 1)).unwrap();
        terminal
            .draw(|frame| render_status_bar(frame, frame.area(), view, &styles, debug_status))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn listing_status_shows_page_and_total() {
        let view = complete(ViewState::default(), Ok(CommentPage::new(Vec::new(), 500)));
        assert_eq!(
            build_status_text(&view),
            "Page 1/50 | 500 comments | 10 per page | all comments"
        );
    }

    #[test]
    fn unknown_total_shows_single_page() {
        let view = complete(ViewState::default(), Ok(CommentPage::new(Vec::new(), 0)));
        assert!(build_status_text(&view).starts_with("Page 1/1 | 0 comments"));
    }

    #[test]
    fn missing_total_counts_rows_on_screen() {
        let rows = vec![
            Comment::new(5, "n", "a@b.com", "b"),
            Comment::new(10, "n", "a@b.com", "b"),
        ];
        let view = complete(ViewState::default(), Ok(CommentPage::new(rows, 0)));

        assert_eq!(view.total_count(), 0);
        assert!(build_status_text(&view).starts_with("Page 1/1 | 2 comments"));
    }

    #[test]
    fn search_status_names_the_filter() {
        let view = ViewState::default().with_search(EmailFilter::new("a@b.com").unwrap());
        assert!(build_status_text(&view).ends_with("email: a@b.com"));
    }

    #[test]
    fn loading_indicator_shown_while_in_flight() {
        let view = reduce(ViewState::default(), ViewEvent::Init).state;
        assert!(render(&view, false).contains("Loading…"));
    }

    #[test]
    fn error_only_shown_with_debug_status() {
        let view = complete(
            ViewState::default(),
            Err(FetchError::Status { status: 500 }),
        );

        assert!(!render(&view, false).contains("status: 500"));
        assert!(render(&view, true).contains("API returned status: 500"));
    }
}
