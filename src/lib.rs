//! hist-finder - interactive search over shell history
//!
//! This library provides the pieces behind the `hist-finder` binary:
//! - History loading from zsh-style history files
//! - An incremental search session with debounced ranking and a wrapping cursor
//! - Clipboard backends for the selected command
//! - The ratatui screen and the event loop driving it
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use hist_finder::clipboard::ClipboardConfig;
//! use hist_finder::search::{Debounce, Direction, MatchRanker, MatchStrategy, SearchSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     let entries = hist_finder::history::parse_history(": 1:0;ls -la\n: 2:0;git status\n");
//!     let mut session = SearchSession::new(
//!         entries,
//!         MatchRanker::new(MatchStrategy::Fuzzy, 32),
//!         Debounce::new(Duration::from_millis(300)),
//!         ClipboardConfig::default().build(),
//!     );
//!
//!     session.set_query("git");
//!     hist_finder::search::sleep_until(session.flush_deadline()).await;
//!     session.flush_if_due();
//!
//!     session.move_cursor(Direction::Down);
//!     session.select_current();
//!     println!("copied: {}", session.status());
//! }
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod event;
pub mod history;
pub mod search;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use config::Config;
pub use search::{SearchSession, SessionState};
