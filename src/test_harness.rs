//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with an in-memory comments API so tests can
//! drive the whole key → reducer → request → response → render path.

use crate::client::{CommentSource, FetchResult};
use crate::controller::QueryController;
use crate::model::{Comment, CommentPage, FetchError};
use crate::state::{AppState, CommentQuery, ViewEvent, ViewState};
use crate::view::TuiApp;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Email shared by every fifth fixture comment.
pub const SHARED_EMAIL: &str = "shared@x.com";

/// Longest a test waits for outstanding requests.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory stand-in for the comments API.
///
/// Mirrors the real server: exact `email` match, `[_start, _end)` slicing,
/// and a total count only on ranged requests.
#[derive(Debug, Default)]
pub struct FixtureSource {
    comments: Vec<Comment>,
    seen: Mutex<Vec<CommentQuery>>,
    failing: Mutex<bool>,
}

impl FixtureSource {
    /// `count` comments with ids `1..=count`.
    pub fn with_comments(count: u64) -> Self {
        let comments = (1..=count)
            .map(|id| {
                let email = if id % 5 == 0 {
                    SHARED_EMAIL.to_string()
                } else {
                    format!("user{id}@x.com")
                };
                let mut comment =
                    Comment::new(id, format!("name {id}"), email, format!("body {id}\nmore"));
                comment.post_id = Some(id.div_ceil(5));
                comment
            })
            .collect();
        Self {
            comments,
            ..Self::default()
        }
    }

    /// Make every later request fail with a 500.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Every query received so far, in arrival order.
    pub fn seen(&self) -> Vec<CommentQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSource for FixtureSource {
    async fn fetch(&self, query: &CommentQuery) -> FetchResult<CommentPage> {
        self.seen.lock().unwrap().push(query.clone());
        if *self.failing.lock().unwrap() {
            return Err(FetchError::Status { status: 500 });
        }

        let matching: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|c| query.email.as_ref().is_none_or(|e| c.email == e.as_str()))
            .collect();

        let Some(range) = query.range else {
            let rows = matching.into_iter().cloned().collect();
            return Ok(CommentPage::new(rows, 0));
        };

        let total = matching.len() as u64;
        let rows = matching
            .into_iter()
            .skip(range.start() as usize)
            .take(range.len() as usize)
            .cloned()
            .collect();
        Ok(CommentPage::new(rows, total))
    }
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    // Declared before the runtime so the app (and its controller) drop first.
    app: TuiApp<TestBackend>,
    source: Arc<FixtureSource>,
    _runtime: tokio::runtime::Runtime,
    running: bool,
}

impl AcceptanceTestHarness {
    /// 500 fixture comments, default view, 120x30 terminal.
    pub fn new() -> Self {
        Self::with_view(FixtureSource::with_comments(500), ViewState::default(), 120, 30)
    }

    /// Custom fixture, starting view and terminal size.
    ///
    /// The initial load is issued but not awaited; call [`Self::settle`].
    pub fn with_view(source: FixtureSource, view: ViewState, width: u16, height: u16) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("test runtime");
        let source = Arc::new(source);
        let controller = QueryController::new(source.clone(), runtime.handle().clone());
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");

        let mut app = TuiApp::new_for_test(terminal, view, controller);
        app.dispatch_test(ViewEvent::Init);

        Self {
            app,
            source,
            _runtime: runtime,
            running: true,
        }
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }
        if self.app.handle_key_test(KeyEvent::new(key, mods)) {
            self.running = false;
        }
        !self.running
    }

    /// Type each character of `text` as a key press.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Wait until no request is in flight, then apply every completion.
    pub fn settle(&mut self) {
        let deadline = Instant::now() + SETTLE_TIMEOUT;
        while self.app.controller().in_flight() > 0 {
            assert!(Instant::now() < deadline, "requests did not finish in time");
            std::thread::sleep(Duration::from_millis(5));
        }
        self.app.drain_completions_test();
    }

    /// Render and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("render");
        crate::view::helpers::buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// The fake API.
    pub fn source(&self) -> &FixtureSource {
        &self.source
    }

    /// Whether the app has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
