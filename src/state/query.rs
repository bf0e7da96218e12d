//! Request derivation (pure).
//!
//! Turns the current view state into exactly one outbound query. Nothing in
//! here performs I/O; the controller executes what this module describes.

use crate::state::search::EmailFilter;
use crate::state::view_state::ViewState;
use std::num::NonZeroU32;

/// Query parameter carrying the offset start (inclusive).
pub const START_PARAM: &str = "_start";
/// Query parameter carrying the offset end (exclusive).
pub const END_PARAM: &str = "_end";
/// Query parameter carrying the exact email filter.
pub const EMAIL_PARAM: &str = "email";

// ===== QueryMode =====

/// Which kind of listing the table is showing.
///
/// # State Transitions
///
/// - Listing → Searching: non-empty search submitted
/// - Searching → Listing: search cleared, or empty text submitted
/// - Searching { ranged: false } → Searching { ranged: true }: any page change
///   while searching
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Plain offset-range listing.
    #[default]
    Listing,
    /// Exact email match.
    Searching {
        /// Email to match.
        filter: EmailFilter,
        /// Whether the user has paginated inside this search. The first
        /// request after submitting carries only the filter.
        ranged: bool,
    },
}

impl QueryMode {
    /// The active filter, if searching.
    pub fn filter(&self) -> Option<&EmailFilter> {
        match self {
            QueryMode::Listing => None,
            QueryMode::Searching { filter, .. } => Some(filter),
        }
    }

    /// Whether an email filter is active.
    pub fn is_searching(&self) -> bool {
        matches!(self, QueryMode::Searching { .. })
    }

    /// Same mode, with pagination inside a search recorded.
    pub fn into_ranged(self) -> Self {
        match self {
            QueryMode::Searching { filter, .. } => QueryMode::Searching {
                filter,
                ranged: true,
            },
            listing => listing,
        }
    }
}

// ===== OffsetRange =====

/// Half-open offset range `[start, end)` for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetRange {
    start: u64,
    end: u64,
}

impl OffsetRange {
    /// Range for 1-indexed `page` of `size` rows: `[(page-1)*size, page*size)`.
    ///
    /// Page 0 is treated as page 1. Arithmetic is done in u64 so no
    /// u32 page/size combination can overflow.
    pub fn for_page(page: u32, size: NonZeroU32) -> Self {
        let page = u64::from(page.max(1));
        let size = u64::from(size.get());
        Self {
            start: (page - 1) * size,
            end: page * size,
        }
    }

    /// First offset (inclusive).
    pub fn start(self) -> u64 {
        self.start
    }

    /// Last offset (exclusive).
    pub fn end(self) -> u64 {
        self.end
    }

    /// Number of rows the range covers.
    pub fn len(self) -> u64 {
        self.end - self.start
    }

    /// True when the range covers no rows. Never true for ranges built with
    /// `for_page`.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

// ===== CommentQuery =====

/// One outbound request against the comments endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    /// Exact email filter, if searching.
    pub email: Option<EmailFilter>,
    /// Offset range, absent only for the first request of a search.
    pub range: Option<OffsetRange>,
}

impl CommentQuery {
    /// Derive the single query for the current state.
    ///
    /// - Listing → range only
    /// - Searching, not yet paginated → email only
    /// - Searching, paginated → email + range
    pub fn derive(state: &ViewState) -> Self {
        let range = OffsetRange::for_page(state.page(), state.page_size());
        match state.mode() {
            QueryMode::Listing => Self {
                email: None,
                range: Some(range),
            },
            QueryMode::Searching { filter, ranged } => Self {
                email: Some(filter.clone()),
                range: ranged.then_some(range),
            },
        }
    }

    /// Query pairs in wire order: `email`, `_start`, `_end`.
    ///
    /// Values are unencoded; the HTTP client encodes them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(email) = &self.email {
            pairs.push((EMAIL_PARAM, email.as_str().to_string()));
        }
        if let Some(range) = self.range {
            pairs.push((START_PARAM, range.start().to_string()));
            pairs.push((END_PARAM, range.end().to_string()));
        }
        pairs
    }
}

impl std::fmt::Display for CommentQuery {
    /// Unencoded query string, e.g. `email=a@b.com&_start=0&_end=10`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.query_pairs().iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

// ===== Request sequencing =====

/// Monotonically increasing request tag.
///
/// Used for the latest-request-wins guard: only a completion carrying the
/// latest issued sequence number may touch the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Wrap a raw sequence number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The following sequence number.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A query plus the sequence number it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Tag checked on completion.
    pub seq: RequestSeq,
    /// What to fetch.
    pub query: CommentQuery,
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
