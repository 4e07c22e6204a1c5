//! Incremental search over loaded history.
//!
//! [`SearchSession`] ties together the query text, the debounced ranking
//! pass, the ranked match list, the highlight cursor and the status line.
//! The UI forwards edits and navigation here and renders whatever the
//! session exposes.
//!
//! # Lifecycle
//!
//! - `Idle`: nothing ranked, query blank
//! - `Debouncing`: query changed, ranking pending
//! - `Ranked`: a ranking pass produced the current list (possibly empty)
//! - `Cancelled`: terminal, all further input is ignored

mod cursor;
mod debounce;
mod ranker;


use tokio::time::Instant;
use tracing::{debug, info};

use crate::clipboard::Clipboard;

pub use cursor::{Cursor, Direction, MIN_INDEX};
pub use debounce::{Debounce, sleep_until};
pub use ranker::{Match, MatchRanker, MatchStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Debouncing,
    Ranked,
    Cancelled,
}

pub struct SearchSession {
    entries: Vec<String>,
    ranker: MatchRanker,
    clipboard: Box<dyn Clipboard>,

    query: String,
    matches: Vec<Match>,
    cursor: Cursor,
    status: String,

    debounce: Debounce,
    state: SessionState,
    /// Number of ranking passes run so far.
    rank_passes: u64,
}

impl SearchSession {
    pub fn new(
        entries: Vec<String>,
        ranker: MatchRanker,
        debounce: Debounce,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            entries,
            ranker,
            clipboard,
            query: String::new(),
            matches: Vec::new(),
            cursor: Cursor::inactive(),
            status: String::new(),
            debounce,
            state: SessionState::Idle,
            rank_passes: 0,
        }
    }

    // ---- queries ----

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn rank_passes(&self) -> u64 {
        self.rank_passes
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SessionState::Cancelled
    }

    /// When the pending ranking pass is due, if one is pending.
    pub fn flush_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn selected(&self) -> Option<&Match> {
        self.cursor.index().and_then(|i| self.matches.get(i))
    }

    // ---- operations ----

    /// Replace the query text. Ranking is deferred until the debounce
    /// period passes without another edit.
    pub fn set_query(&mut self, text: impl Into<String>) {
        if self.is_cancelled() {
            return;
        }
        self.query = text.into();
        self.status.clear();
        self.debounce.schedule();
        self.state = SessionState::Debouncing;
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = self.query.clone();
        text.push(c);
        self.set_query(text);
    }

    pub fn pop_char(&mut self) {
        if self.query.is_empty() {
            return;
        }
        let mut text = self.query.clone();
        text.pop();
        self.set_query(text);
    }

    pub fn clear_query(&mut self) {
        if self.query.is_empty() {
            return;
        }
        self.set_query(String::new());
    }

    /// Delete back to the start of the previous word.
    pub fn delete_word(&mut self) {
        if self.query.is_empty() {
            return;
        }
        let trimmed = self.query.trim_end();
        let keep = trimmed
            .rfind(char::is_whitespace)
            .map(|i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        let text = self.query[..keep].to_string();
        self.set_query(text);
    }

    /// Run the pending ranking pass now.
    pub fn flush_query(&mut self) {
        if self.is_cancelled() {
            return;
        }
        self.debounce.cancel();
        // A selection made against the previous list no longer applies
        self.status.clear();

        if self.query.trim().is_empty() {
            self.matches = Vec::new();
            self.cursor = Cursor::inactive();
            self.state = SessionState::Idle;
            return;
        }

        self.matches = self.ranker.rank(&self.entries, &self.query);
        self.cursor.on_list_replaced(self.matches.len());
        self.rank_passes += 1;
        self.state = SessionState::Ranked;
        debug!(
            "Ranked {:?} against {} entries: {} matches",
            self.query,
            self.entries.len(),
            self.matches.len()
        );
    }

    /// Flush if the debounce deadline has passed. Returns whether it did.
    pub fn flush_if_due(&mut self) -> bool {
        if self.debounce.take_due() {
            self.flush_query();
            true
        } else {
            false
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        if self.matches.is_empty() || self.is_cancelled() {
            return;
        }
        self.cursor.step(direction, self.matches.len());
    }

    /// Copy the highlighted entry and remember it as the status.
    pub fn select_current(&mut self) {
        if self.is_cancelled() {
            return;
        }
        self.cursor.clamp(self.matches.len());
        let Some(selected) = self.selected().map(|m| m.text.clone()) else {
            return;
        };
        info!("Selected {:?}", selected);
        self.clipboard.copy(&selected);
        self.status = selected;
    }

    /// End the session. Any pending ranking pass is dropped.
    pub fn cancel(&mut self) {
        self.debounce.cancel();
        self.state = SessionState::Cancelled;
    }
}
