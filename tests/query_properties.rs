//! Property-based tests for request derivation and the reducer.
//!
//! Tests validate:
//! 1. Offset ranges are exactly one page wide and start at (page-1)*size
//! 2. Every issued request gets a fresh, increasing sequence number
//! 3. Only the latest request's completion changes the rows, and a
//!    completed page never lies past the reported total
//! 4. Page stays within [1, page_count] under any key sequence
//! 5. Blank search text always means listing

use comview::model::{Comment, CommentPage};
use comview::state::{
    reduce, OffsetRange, QueryMode, RequestTicket, SearchOrigin, ViewEvent, ViewState,
};
use proptest::prelude::*;
use std::num::NonZeroU32;

fn page_of(first_id: u64, count: u64, total: u64) -> CommentPage {
    let rows = (first_id..first_id + count)
        .map(|id| Comment::new(id, "n", format!("u{id}@x.com"), "b"))
        .collect();
    CommentPage::new(rows, total)
}

/// User-level events that never carry a completion.
fn user_event() -> impl Strategy<Value = ViewEvent> {
    prop_oneof![
        Just(ViewEvent::NextPage),
        Just(ViewEvent::PrevPage),
        Just(ViewEvent::FirstPage),
        Just(ViewEvent::LastPage),
        Just(ViewEvent::Refresh),
        Just(ViewEvent::ClearSearch),
        (0u32..80).prop_map(ViewEvent::GoToPage),
        (1u32..60).prop_map(|n| ViewEvent::SetPageSize(NonZeroU32::new(n).unwrap())),
        prop_oneof![Just(""), Just("  "), Just("a@b.com"), Just("x@y.org")].prop_map(|t| {
            ViewEvent::SubmitSearch {
                text: t.to_string(),
                origin: SearchOrigin::SearchBox,
            }
        }),
    ]
}

/// Start from a listing with `total` results loaded.
fn loaded(total: u64) -> ViewState {
    let transition = reduce(ViewState::default(), ViewEvent::Init);
    let seq = transition.request.unwrap().seq;
    reduce(
        transition.state,
        ViewEvent::FetchCompleted {
            seq,
            outcome: Ok(page_of(1, 10, total)),
        },
    )
    .state
}

// ===== Property 1: Offset ranges =====

proptest! {
    #[test]
    fn offset_range_covers_one_page(page in 1u32..=u32::MAX, size in 1u32..=u32::MAX) {
        let size = NonZeroU32::new(size).unwrap();
        let range = OffsetRange::for_page(page, size);

        prop_assert_eq!(range.start(), u64::from(page - 1) * u64::from(size.get()));
        prop_assert_eq!(range.len(), u64::from(size.get()));
        prop_assert!(!range.is_empty());
    }

    #[test]
    fn consecutive_pages_are_contiguous(page in 1u32..100_000, size in 1u32..1_000) {
        let size = NonZeroU32::new(size).unwrap();
        let current = OffsetRange::for_page(page, size);
        let next = OffsetRange::for_page(page + 1, size);
        prop_assert_eq!(current.end(), next.start());
    }
}

// ===== Properties 2 & 4: Sequencing and page bounds =====

proptest! {
    #[test]
    fn issued_sequences_strictly_increase(
        total in 0u64..1_000,
        events in prop::collection::vec(user_event(), 1..40),
    ) {
        let mut state = loaded(total);
        let mut last_seq = state.latest_request();

        for event in events {
            let transition = reduce(state, event);
            state = transition.state;
            if let Some(ticket) = transition.request {
                prop_assert!(Some(ticket.seq) > last_seq);
                prop_assert_eq!(state.latest_request(), Some(ticket.seq));
                prop_assert!(state.is_loading());
                last_seq = Some(ticket.seq);
            }
            prop_assert!(state.page() >= 1);
            prop_assert!(state.page() <= state.page_count());
        }
    }

    #[test]
    fn navigation_clamps_to_page_count(
        total in 0u64..1_000,
        events in prop::collection::vec(
            prop_oneof![
                Just(ViewEvent::NextPage),
                Just(ViewEvent::PrevPage),
                Just(ViewEvent::LastPage),
                (0u32..500).prop_map(ViewEvent::GoToPage),
            ],
            1..30,
        ),
    ) {
        let mut state = loaded(total);
        for event in events {
            state = reduce(state, event).state;
            prop_assert!(state.page() >= 1);
            prop_assert!(state.page() <= state.page_count());
        }
    }
}

// ===== Property 3: Latest request wins =====

proptest! {
    #[test]
    fn only_latest_completion_applies(
        events in prop::collection::vec(user_event(), 2..20),
        stale_pick in any::<prop::sample::Index>(),
    ) {
        let mut state = loaded(500);
        let mut tickets: Vec<RequestTicket> = Vec::new();
        for event in events {
            let transition = reduce(state, event);
            state = transition.state;
            tickets.extend(transition.request);
        }
        prop_assume!(tickets.len() >= 2);

        let latest = tickets.last().unwrap().seq;
        let stale = tickets[stale_pick.index(tickets.len() - 1)].seq;
        let before_rows = state.rows().to_vec();

        // A stale completion leaves everything untouched.
        let after_stale = reduce(
            state.clone(),
            ViewEvent::FetchCompleted { seq: stale, outcome: Ok(page_of(900, 3, 3)) },
        );
        prop_assert!(after_stale.request.is_none());
        prop_assert_eq!(&after_stale.state, &state);

        // The latest one applies and clears loading. An unknown total never
        // triggers a page clamp, so nothing is re-issued.
        let applied = reduce(
            state,
            ViewEvent::FetchCompleted { seq: latest, outcome: Ok(page_of(700, 2, 0)) },
        )
        .state;
        prop_assert!(!applied.is_loading());
        prop_assert_eq!(applied.rows()[0].id, 700);
        prop_assert_ne!(applied.rows(), before_rows.as_slice());
    }
}

proptest! {
    #[test]
    fn completed_page_never_exceeds_reported_total(
        events in prop::collection::vec(user_event(), 1..20),
        new_total in 1u64..600,
    ) {
        let mut state = loaded(500);
        let mut latest = None;
        for event in events {
            let transition = reduce(state, event);
            state = transition.state;
            latest = transition.request.map(|t| t.seq).or(latest);
        }
        prop_assume!(latest.is_some());

        let applied = reduce(
            state,
            ViewEvent::FetchCompleted { seq: latest.unwrap(), outcome: Ok(page_of(1, 1, new_total)) },
        )
        .state;
        prop_assert!(applied.page() <= applied.page_count());
    }
}

// ===== Property 5: Blank search =====

proptest! {
    #[test]
    fn blank_search_text_means_listing(
        text in "[ \t]{0,8}",
        start in prop_oneof![Just(""), Just("a@b.com")],
    ) {
        let mut state = loaded(500);
        if !start.is_empty() {
            state = reduce(
                state,
                ViewEvent::SubmitSearch { text: start.to_string(), origin: SearchOrigin::SearchBox },
            )
            .state;
        }

        let transition = reduce(
            state,
            ViewEvent::SubmitSearch { text, origin: SearchOrigin::ColumnFilter },
        );

        prop_assert_eq!(transition.state.mode(), &QueryMode::Listing);
        prop_assert_eq!(transition.state.page(), 1);
        let query = transition.request.unwrap().query;
        prop_assert!(query.email.is_none());
        prop_assert!(query.range.is_some());
    }
}
