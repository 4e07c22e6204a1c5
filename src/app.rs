//! Application state and main loop.
//!
//! The `App` owns the search session, the render state and the input
//! stream. Its loop waits on whichever comes first: a terminal event or the
//! session's pending debounce deadline.

use crate::event::{self, UserEvent, init_user_event};
use crate::search::{self, SearchSession};
use crate::ui::{ScreenState, SearchScreen};

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::Receiver;
use tracing::info;

pub struct App {
    session: SearchSession,
    screen: ScreenState,
    user_events: Receiver<std::io::Result<UserEvent>>,
}

impl App {
    pub fn new(session: SearchSession) -> Self {
        Self::with_events(session, init_user_event())
    }

    /// Build with an explicit event source instead of the terminal.
    pub fn with_events(session: SearchSession, user_events: Receiver<std::io::Result<UserEvent>>) -> Self {
        Self {
            session,
            screen: ScreenState::default(),
            user_events,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.draw(terminal)?;
        while !self.session.is_cancelled() {
            self.step().await?;
            if self.session.is_cancelled() {
                break;
            }
            self.draw(terminal)?;
        }
        info!("Session cancelled, exiting");
        Ok(())
    }

    /// Wait for and process one input event or debounce expiry.
    pub async fn step(&mut self) -> Result<()> {
        let deadline = self.session.flush_deadline();
        tokio::select! {
            res = self.user_events.recv() => {
                let usr_evt = res.with_context(|| anyhow::anyhow!("User event stream is ended."))?;
                self.handle_user_event(usr_evt?);
            }
            _ = search::sleep_until(deadline) => {
                self.session.flush_if_due();
            }
        }
        Ok(())
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_stateful_widget(SearchScreen::new(&self.session), area, &mut self.screen);
            if let Some(position) = self.screen.cursor {
                frame.set_cursor_position(position);
            }
        })?;
        Ok(())
    }

    fn handle_user_event(&mut self, user_evt: UserEvent) {
        match user_evt {
            UserEvent::Key(key_evt) => event::search::handle_key_event(&mut self.session, key_evt),
            UserEvent::Paste(text) => event::search::handle_paste(&mut self.session, &text),
            // Resize just needs the redraw that follows every event
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::search::{Debounce, MatchRanker, MatchStrategy};

    fn key(code: KeyCode) -> std::io::Result<UserEvent> {
        Ok(UserEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn app() -> (App, mpsc::Sender<std::io::Result<UserEvent>>, RecordingClipboard) {
        let clipboard = RecordingClipboard::default();
        let session = SearchSession::new(
            vec!["git status".to_string(), "ls -la".to_string(), "git log".to_string()],
            MatchRanker::new(MatchStrategy::Substring, 32),
            Debounce::new(Duration::from_millis(300)),
            Box::new(clipboard.clone()),
        );
        let (tx, rx) = mpsc::channel(16);
        (App::with_events(session, rx), tx, clipboard)
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_ranks_after_quiet_period() {
        let (mut app, tx, clipboard) = app();
        for c in "git".chars() {
            tx.send(key(KeyCode::Char(c))).await.unwrap();
            app.step().await.unwrap();
        }
        assert_eq!(app.session().rank_passes(), 0);

        // Nothing queued: the next step is the debounce firing
        app.step().await.unwrap();
        assert_eq!(app.session().rank_passes(), 1);
        assert_eq!(app.session().matches().len(), 2);

        tx.send(key(KeyCode::Down)).await.unwrap();
        tx.send(key(KeyCode::Enter)).await.unwrap();
        app.step().await.unwrap();
        app.step().await.unwrap();
        assert_eq!(clipboard.copies(), vec!["git log".to_string()]);
        assert_eq!(app.session().status(), "git log");
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_ends_session() {
        let (mut app, tx, _) = app();
        tx.send(key(KeyCode::Char('g'))).await.unwrap();
        tx.send(key(KeyCode::Esc)).await.unwrap();
        app.step().await.unwrap();
        app.step().await.unwrap();
        assert!(app.session().is_cancelled());
        assert_eq!(app.session().flush_deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_event_stream_is_error() {
        let (mut app, tx, _) = app();
        drop(tx);
        assert!(app.step().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_error_propagates() {
        let (mut app, tx, _) = app();
        tx.send(Err(std::io::Error::other("tty gone"))).await.unwrap();
        assert!(app.step().await.is_err());
    }
}
