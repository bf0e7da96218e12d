//! Comments API client.
//!
//! Performs network IO against the comments endpoint. Callers map results
//! into `ViewEvent::FetchCompleted`; nothing here touches view state.
//!
//! Notes:
//! - [`CommentSource`] is the seam the controller depends on, so tests can
//!   swap the network out.
//! - [`HttpCommentSource`] uses `reqwest`'s async client and is cheap to share
//!   behind an `Arc`.

use crate::model::{Comment, CommentPage, FetchError};
use crate::state::CommentQuery;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Header carrying the total size of the result set.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Path of the comments collection, appended to the base URL.
pub const COMMENTS_PATH: &str = "/comments";

/// A typed fetch result.
pub type FetchResult<T> = Result<T, FetchError>;

/// Anything that can answer a [`CommentQuery`].
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch one page of comments.
    async fn fetch(&self, query: &CommentQuery) -> FetchResult<CommentPage>;
}

/// Parse the total-count header value.
///
/// Absent or unparseable values count as 0. Surrounding whitespace is
/// ignored.
pub fn parse_total_count(value: Option<&str>) -> u64 {
    let Some(raw) = value else {
        return 0;
    };
    match raw.trim().parse::<u64>() {
        Ok(total) => total,
        Err(err) => {
            warn!(value = raw, error = %err, "Malformed total-count header, using 0");
            0
        }
    }
}

/// HTTP implementation of [`CommentSource`].
#[derive(Debug, Clone)]
pub struct HttpCommentSource {
    client: reqwest::Client,
    comments_url: String,
}

impl HttpCommentSource {
    /// Build a client for `{api_url}/comments`.
    ///
    /// A trailing slash on `api_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the TLS backend cannot be
    /// initialized.
    pub fn new(api_url: &str, timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::transport)?;
        Ok(Self::with_client(client, api_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            comments_url: format!("{}{COMMENTS_PATH}", api_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the comments collection.
    pub fn comments_url(&self) -> &str {
        &self.comments_url
    }
}

#[async_trait]
impl CommentSource for HttpCommentSource {
    /// GET `/comments?email=..&_start=..&_end=..`
    async fn fetch(&self, query: &CommentQuery) -> FetchResult<CommentPage> {
        let response = self
            .client
            .get(&self.comments_url)
            .query(&query.query_pairs())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let total_count = parse_total_count(
            response
                .headers()
                .get(TOTAL_COUNT_HEADER)
                .and_then(|v| v.to_str().ok()),
        );

        let comments: Vec<Comment> = response.json().await.map_err(FetchError::decode)?;

        Ok(CommentPage::new(comments, total_count))
    }
}

// ===== Tests =====
