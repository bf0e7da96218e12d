//! Pagination/search state and its reducer.
//!
//! ViewState is the whole table state: which page of which query is shown,
//! what came back, and whether a request is outstanding. It only changes
//! through [`reduce`], a pure function returning the next state plus the
//! request (if any) the shell has to execute.

use crate::model::{Comment, CommentPage, FetchError};
use crate::state::query::{CommentQuery, QueryMode, RequestSeq, RequestTicket};
use crate::state::search::{EmailFilter, SearchOrigin};
use std::num::NonZeroU32;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// Sizes offered by the grow/shrink page size keys.
pub const PAGE_SIZE_STEPS: [u32; 5] = [5, 10, 20, 50, 100];

// ===== ViewState =====

/// Table view state. Pure data, no side effects.
///
/// # Invariants
///
/// - `page >= 1`
/// - `cursor < rows.len()` whenever `rows` is non-empty, 0 otherwise
/// - `loading` is true exactly while the request tagged `latest_request`
///   has not completed
/// - every issued request gets a fresh sequence number from `next_seq`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current 1-indexed page.
    page: u32,

    /// Rows per page.
    page_size: NonZeroU32,

    /// Listing vs. email search.
    mode: QueryMode,

    /// Rows from the last applied response. Replaced wholesale.
    rows: Vec<Comment>,

    /// Total reported by the last applied response.
    /// Only meaningful for the mode that produced it.
    total_count: u64,

    /// Whether the latest request is still in flight.
    loading: bool,

    /// Sequence number of the most recently issued request.
    latest_request: Option<RequestSeq>,

    /// Sequence number the next request will get.
    next_seq: RequestSeq,

    /// Comment shown in the detail modal.
    selected: Option<Comment>,

    /// Highlighted table row.
    cursor: usize,

    /// Error from the last failed fetch, kept for diagnostics only.
    last_error: Option<FetchError>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Listing mode, page 1, nothing fetched yet.
    pub fn new(page_size: NonZeroU32) -> Self {
        Self {
            page: 1,
            page_size,
            mode: QueryMode::Listing,
            rows: Vec::new(),
            total_count: 0,
            loading: false,
            latest_request: None,
            next_seq: RequestSeq::new(1),
            selected: None,
            cursor: 0,
            last_error: None,
        }
    }

    /// Start on a specific page (0 is treated as 1).
    ///
    /// A start page past 1 inside a search counts as paginating it.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        if self.page > 1 {
            self.mode = self.mode.into_ranged();
        }
        self
    }

    /// Start with an email filter active.
    pub fn with_search(mut self, filter: EmailFilter) -> Self {
        self.mode = QueryMode::Searching {
            filter,
            ranged: self.page > 1,
        };
        self
    }

    /// Current 1-indexed page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Listing or searching.
    pub fn mode(&self) -> &QueryMode {
        &self.mode
    }

    /// Rows currently displayed.
    pub fn rows(&self) -> &[Comment] {
        &self.rows
    }

    /// Last reported total result count.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whether a request for the latest query is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sequence number of the latest issued request.
    pub fn latest_request(&self) -> Option<RequestSeq> {
        self.latest_request
    }

    /// Comment open in the detail modal.
    pub fn selected(&self) -> Option<&Comment> {
        self.selected.as_ref()
    }

    /// Highlighted row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Comment under the cursor.
    pub fn highlighted(&self) -> Option<&Comment> {
        self.rows.get(self.cursor)
    }

    /// Last fetch error, cleared by the next successful fetch.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Number of pages implied by the reported total. Never 0.
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.get());
        let pages = self.total_count.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Query the current state maps to.
    pub fn current_query(&self) -> CommentQuery {
        CommentQuery::derive(self)
    }

    /// Allocate a sequence number, mark loading and describe the request.
    fn issue(mut self) -> Transition {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.latest_request = Some(seq);
        self.loading = true;
        let query = CommentQuery::derive(&self);
        Transition {
            state: self,
            request: Some(RequestTicket { seq, query }),
        }
    }

    /// Issue only if the derived query differs from `before`.
    fn issue_if_changed(self, before: &CommentQuery) -> Transition {
        if &CommentQuery::derive(&self) == before {
            Transition::stay(self)
        } else {
            self.issue()
        }
    }

    /// Move to `page` (clamped), keeping the mode.
    fn go_to_page(mut self, page: u32) -> Transition {
        let before = self.current_query();
        self.page = page.clamp(1, self.page_count());
        self.mode = self.mode.into_ranged();
        self.issue_if_changed(&before)
    }
}

// ===== Events =====

/// Everything that can change the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Initial load for whatever state the view starts in.
    Init,
    /// Search submitted. Empty or whitespace text means "no filter".
    SubmitSearch {
        /// Raw text from the input.
        text: String,
        /// Control it came from.
        origin: SearchOrigin,
    },
    /// Explicit clear of the email filter.
    ClearSearch,
    /// Jump to a 1-indexed page (clamped to the known page count).
    GoToPage(u32),
    /// Page + 1.
    NextPage,
    /// Page - 1.
    PrevPage,
    /// Page 1.
    FirstPage,
    /// Last known page.
    LastPage,
    /// Change rows per page. Returns to page 1.
    SetPageSize(NonZeroU32),
    /// Re-issue the current query unchanged.
    Refresh,
    /// A request finished.
    FetchCompleted {
        /// Sequence number the request was issued under.
        seq: RequestSeq,
        /// Rows and total, or why it failed.
        outcome: Result<CommentPage, FetchError>,
    },
    /// Move the row highlight up.
    CursorUp,
    /// Move the row highlight down.
    CursorDown,
    /// Open the detail modal for the highlighted row.
    OpenDetail,
    /// Close the detail modal.
    CloseDetail,
}

/// Result of a reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: ViewState,
    /// Request the shell must execute, if the event changed the query.
    pub request: Option<RequestTicket>,
}

impl Transition {
    /// No request needed.
    fn stay(state: ViewState) -> Self {
        Self {
            state,
            request: None,
        }
    }
}

// ===== Reducer =====

/// Apply one event. Pure: same input, same output, no I/O.
pub fn reduce(state: ViewState, event: ViewEvent) -> Transition {
    match event {
        ViewEvent::Init | ViewEvent::Refresh => state.issue(),

        ViewEvent::SubmitSearch { text, .. } => {
            let mut state = state;
            state.mode = match EmailFilter::new(&text) {
                Some(filter) => QueryMode::Searching {
                    filter,
                    ranged: false,
                },
                None => QueryMode::Listing,
            };
            state.page = 1;
            // The old total belongs to the old mode.
            state.total_count = 0;
            state.issue()
        }

        ViewEvent::ClearSearch => {
            let mut state = state;
            state.mode = QueryMode::Listing;
            state.page = 1;
            state.total_count = 0;
            state.issue()
        }

        ViewEvent::GoToPage(page) => state.go_to_page(page),
        ViewEvent::NextPage => {
            let page = state.page.saturating_add(1);
            state.go_to_page(page)
        }
        ViewEvent::PrevPage => {
            let page = state.page.saturating_sub(1);
            state.go_to_page(page)
        }
        ViewEvent::FirstPage => state.go_to_page(1),
        ViewEvent::LastPage => {
            let page = state.page_count();
            state.go_to_page(page)
        }

        ViewEvent::SetPageSize(size) => {
            let mut state = state;
            let before = state.current_query();
            state.page_size = size;
            state.page = 1;
            state.mode = state.mode.into_ranged();
            state.issue_if_changed(&before)
        }

        ViewEvent::FetchCompleted { seq, outcome } => {
            if state.latest_request != Some(seq) || !state.loading {
                // Stale: a newer request has been issued since.
                return Transition::stay(state);
            }
            let mut state = state;
            state.loading = false;
            match outcome {
                Ok(page) => {
                    state.rows = page.comments;
                    state.total_count = page.total_count;
                    state.cursor = 0;
                    state.last_error = None;
                    // The result set shrank under us: land on its last page.
                    if state.total_count > 0 && state.page > state.page_count() {
                        state.page = state.page_count();
                        return state.issue();
                    }
                }
                Err(err) => {
                    state.last_error = Some(err);
                }
            }
            Transition::stay(state)
        }

        ViewEvent::CursorUp => {
            let mut state = state;
            state.cursor = state.cursor.saturating_sub(1);
            Transition::stay(state)
        }
        ViewEvent::CursorDown => {
            let mut state = state;
            if !state.rows.is_empty() {
                state.cursor = (state.cursor + 1).min(state.rows.len() - 1);
            }
            Transition::stay(state)
        }

        ViewEvent::OpenDetail => {
            let mut state = state;
            state.selected = state.highlighted().cloned();
            Transition::stay(state)
        }
        ViewEvent::CloseDetail => {
            let mut state = state;
            state.selected = None;
            Transition::stay(state)
        }
    }
}

/// Next page size in [`PAGE_SIZE_STEPS`] above (`grow`) or below `current`.
///
/// Returns `current` when already at the end of the steps.
pub fn step_page_size(current: NonZeroU32, grow: bool) -> NonZeroU32 {
    let current_raw = current.get();
    let candidate = if grow {
        PAGE_SIZE_STEPS.iter().copied().find(|&s| s > current_raw)
    } else {
        PAGE_SIZE_STEPS.iter().rev().copied().find(|&s| s < current_raw)
    };
    candidate.and_then(NonZeroU32::new).unwrap_or(current)
}

// ===== Tests =====

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
