//! Query controller: runs request tickets off the UI thread.
//!
//! The reducer decides *what* to fetch; the controller only executes it.
//! Each ticket becomes one task on the tokio runtime, and its outcome comes
//! back over a flume channel tagged with the ticket's sequence number. The
//! UI thread drains the channel on every tick and feeds completions through
//! the reducer, which drops anything that is not the latest request.

use crate::client::CommentSource;
use crate::model::{CommentPage, FetchError};
use crate::state::{CommentQuery, RequestSeq, RequestTicket, ViewEvent};
use flume::{Receiver, Sender, TryRecvError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Outcome of one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Sequence number of the ticket.
    pub seq: RequestSeq,
    /// Query that was sent.
    pub query: CommentQuery,
    /// Rows and total, or why the fetch failed.
    pub outcome: Result<CommentPage, FetchError>,
}

impl FetchCompletion {
    /// Reducer event for this completion.
    pub fn into_event(self) -> ViewEvent {
        ViewEvent::FetchCompleted {
            seq: self.seq,
            outcome: self.outcome,
        }
    }
}

/// Spawns fetches and collects their completions.
pub struct QueryController {
    source: Arc<dyn CommentSource>,
    handle: Handle,
    send: Sender<FetchCompletion>,
    recv: Receiver<FetchCompletion>,
    in_flight: Arc<AtomicUsize>,
}

impl std::fmt::Debug for QueryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryController")
            .field("in_flight", &self.in_flight())
            .finish_non_exhaustive()
    }
}

impl QueryController {
    /// Controller running fetches from `source` on the runtime behind
    /// `handle`.
    pub fn new(source: Arc<dyn CommentSource>, handle: Handle) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            source,
            handle,
            send,
            recv,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Spawn the fetch for `ticket` and return immediately.
    ///
    /// Earlier requests keep running; their results are discarded by the
    /// reducer when they arrive.
    pub fn issue(&self, ticket: RequestTicket) {
        let RequestTicket { seq, query } = ticket;
        info!(seq = %seq, query = %query, "Issuing comments request");

        let source = Arc::clone(&self.source);
        let send = self.send.clone();
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);

        self.handle.spawn(async move {
            let outcome = source.fetch(&query).await;
            match &outcome {
                Ok(page) => debug!(
                    seq = %seq,
                    rows = page.comments.len(),
                    total = page.total_count,
                    "Comments request completed"
                ),
                Err(err) => warn!(seq = %seq, query = %query, error = %err, "Comments request failed"),
            }
            // The receiver lives as long as the controller; a send error
            // only means the UI has already shut down.
            if send.send(FetchCompletion { seq, query, outcome }).is_err() {
                debug!(seq = %seq, "Completion dropped, controller gone");
            }
            // Decrement after sending: in_flight() == 0 means every
            // completion is already queued.
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Next finished request, if one is ready. Never blocks.
    pub fn try_next_completion(&self) -> Option<FetchCompletion> {
        match self.recv.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next finished request.
    ///
    /// Returns `None` only if the channel is closed, which cannot happen
    /// while `self` is alive.
    pub async fn next_completion(&self) -> Option<FetchCompletion> {
        self.recv.recv_async().await.ok()
    }

    /// Requests spawned but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

// ===== Tests =====
