//! Terminal input events.
//!
//! Crossterm's `read()` blocks, so input is read on a dedicated thread and
//! forwarded over a channel. The main loop can then `select!` between input
//! and the search debounce deadline without ever blocking.
//!
//! # Submodules
//!
//! - `search`: maps key presses onto search session operations

pub mod search;

use std::thread;

use tokio::sync::mpsc::{self, Receiver};
use std::io::Result;

/// User input from the terminal: keys, resizes, paste, focus.
pub type UserEvent = crossterm::event::Event;

/// Start reading terminal input on a background thread.
///
/// The thread stops once the receiver is dropped and the next send fails.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}
