//! Comment records as returned by the comments API.

use serde::Deserialize;

/// A single comment row.
///
/// Immutable once fetched. `id` is server-assigned and used as the row key;
/// it is only guaranteed unique within one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// Server-assigned identifier.
    pub id: u64,
    /// Display name (usually a short sentence on the public API).
    pub name: String,
    /// Author email. The search filter matches this field exactly.
    pub email: String,
    /// Comment text, possibly multi-line.
    pub body: String,
    /// Parent post, when the API reports it.
    #[serde(default, rename = "postId")]
    pub post_id: Option<u64>,
}

impl Comment {
    /// Build a comment without a parent post.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
            post_id: None,
        }
    }

    /// First line of the body, used for the table's body column.
    pub fn body_summary(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }
}

/// One response from the comments endpoint.
///
/// `total_count` comes from the `X-Total-Count` header, not from
/// `comments.len()`; it is the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentPage {
    /// Rows in server order.
    pub comments: Vec<Comment>,
    /// Total results reported by the server (0 when absent).
    pub total_count: u64,
}

impl CommentPage {
    /// Create a page from rows and a reported total.
    pub fn new(comments: Vec<Comment>, total_count: u64) -> Self {
        Self {
            comments,
            total_count,
        }
    }
}
