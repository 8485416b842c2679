//! Explicit session and preview state.
//!
//! Callers own a [`SessionState`] and a [`PreviewState`] and pass them by
//! reference; nothing here is global.

use crate::error::Result;
use crate::ingestor::Ingestor;
use crate::source::Source;
use crate::table::Table;
use std::thread::{self, JoinHandle};

/// The dataset currently attached to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDataset {
    pub id: String,
    pub title: String,
}

impl ActiveDataset {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Session-wide state: the active dataset and the navigation refresh key.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    active: Option<ActiveDataset>,
    refresh_key: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active_dataset(&self) -> Option<&ActiveDataset> {
        self.active.as_ref()
    }

    pub fn set_active_dataset(&mut self, dataset: Option<ActiveDataset>) {
        self.active = dataset;
    }

    /// Changes whenever the dataset listing should be reloaded.
    #[inline]
    pub fn refresh_key(&self) -> u64 {
        self.refresh_key
    }

    /// Ask listeners of the refresh key to reload.
    pub fn refresh_navbar(&mut self) {
        self.refresh_key = self.refresh_key.wrapping_add(1);
    }

    /// Adding a dataset while one is active replaces it, so the user has
    /// to confirm first.
    pub fn needs_replace_confirmation(&self) -> bool {
        self.active.is_some()
    }
}

/// Identifies one preview attempt. Later attempts compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What happened to a completed preview attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The table replaced the previous preview.
    Applied,
    /// The attempt failed; the preview was cleared and the message stored.
    Failed(String),
    /// A newer attempt was started since; the result was dropped.
    Stale,
}

/// Preview state for one upload form.
///
/// Each attempt takes a token from [`begin`](Self::begin). Only the
/// completion carrying the newest token is applied, so a slow URL fetch
/// cannot overwrite the preview of a later selection.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    latest: u64,
    table: Option<Table>,
    error: Option<String>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt and clear any error from the previous one.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.error = None;
        RequestToken(self.latest)
    }

    /// Apply the result of the attempt identified by `token`.
    pub fn complete(&mut self, token: RequestToken, result: Result<Table>) -> PreviewOutcome {
        if token.0 != self.latest {
            tracing::warn!(
                token = token.0,
                latest = self.latest,
                "discarding stale preview result"
            );
            return PreviewOutcome::Stale;
        }

        match result {
            Ok(table) => {
                self.table = Some(table);
                self.error = None;
                PreviewOutcome::Applied
            }
            Err(err) => {
                let message = err.to_string();
                self.table = None;
                self.error = Some(message.clone());
                PreviewOutcome::Failed(message)
            }
        }
    }

    /// Drop the preview and error, and invalidate in-flight attempts.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.table = None;
        self.error = None;
    }

    #[inline]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A confirmed upload needs a preview to confirm.
    pub fn can_submit(&self) -> bool {
        self.table.is_some()
    }

    /// Take the preview after a successful submit, leaving the state empty.
    pub fn take(&mut self) -> Option<Table> {
        self.error = None;
        self.table.take()
    }
}

/// Parse `source` on a worker thread and hand the result to `on_done`
/// together with `token`.
///
/// There is no cancellation; pair with [`PreviewState::complete`] to drop
/// results that arrive late.
pub fn spawn_preview<F>(
    ingestor: Ingestor,
    source: Source,
    token: RequestToken,
    on_done: F,
) -> JoinHandle<()>
where
    F: FnOnce(RequestToken, Result<Table>) + Send + 'static,
{
    thread::spawn(move || {
        let result = ingestor.parse(&source);
        on_done(token, result);
    })
}
