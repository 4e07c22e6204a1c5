//! Key event handling for the search screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::search::{Direction, SearchSession};

/// Apply a key press to the session.
///
/// Esc and Ctrl+C cancel, arrows (or Ctrl+P / Ctrl+N) move the highlight,
/// Enter selects, and everything printable edits the query.
pub fn handle_key_event(session: &mut SearchSession, key_evt: KeyEvent) {
    if !matches!(key_evt.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return;
    }
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL);

    match key_evt.code {
        KeyCode::Esc => session.cancel(),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => session.cancel(),

        KeyCode::Up => session.move_cursor(Direction::Up),
        KeyCode::Down => session.move_cursor(Direction::Down),
        KeyCode::Char('p') if ctrl => session.move_cursor(Direction::Up),
        KeyCode::Char('n') if ctrl => session.move_cursor(Direction::Down),

        KeyCode::Enter => session.select_current(),

        KeyCode::Char('u') if ctrl => session.clear_query(),
        KeyCode::Char('w') if ctrl => session.delete_word(),
        KeyCode::Backspace => session.pop_char(),

        // Other control chords are not text
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => session.push_char(c),

        _ => {}
    }
}

/// Append pasted text to the query, flattened to a single line.
pub fn handle_paste(session: &mut SearchSession, text: &str) {
    let line: String = text.chars().filter(|c| !c.is_control()).collect();
    if line.is_empty() {
        return;
    }
    session.set_query(format!("{}{}", session.query(), line));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::search::{Debounce, MatchRanker, MatchStrategy, SessionState};

    fn session() -> (SearchSession, RecordingClipboard) {
        let clipboard = RecordingClipboard::default();
        let session = SearchSession::new(
            vec!["git status".to_string(), "git log".to_string(), "ls".to_string()],
            MatchRanker::new(MatchStrategy::Substring, 32),
            Debounce::new(Duration::from_millis(300)),
            Box::new(clipboard.clone()),
        );
        (session, clipboard)
    }

    fn press(session: &mut SearchSession, code: KeyCode) {
        handle_key_event(session, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(session: &mut SearchSession, c: char) {
        handle_key_event(session, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(session: &mut SearchSession, text: &str) {
        for c in text.chars() {
            press(session, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_edits_query() {
        let (mut session, _) = session();
        type_text(&mut session, "gti");
        press(&mut session, KeyCode::Backspace);
        press(&mut session, KeyCode::Backspace);
        type_text(&mut session, "it");
        assert_eq!(session.query(), "git");
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_and_select() {
        let (mut session, clipboard) = session();
        type_text(&mut session, "git");
        session.flush_query();

        press(&mut session, KeyCode::Down);
        press(&mut session, KeyCode::Enter);
        assert_eq!(session.status(), "git log");
        assert_eq!(clipboard.copies(), vec!["git log".to_string()]);

        ctrl(&mut session, 'p');
        assert_eq!(session.cursor(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_cancels() {
        let (mut session, _) = session();
        type_text(&mut session, "gi");
        press(&mut session, KeyCode::Esc);
        assert_eq!(session.state(), SessionState::Cancelled);
        assert_eq!(session.flush_deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_c_cancels() {
        let (mut session, _) = session();
        ctrl(&mut session, 'c');
        assert!(session.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_control_chords_do_not_insert_text() {
        let (mut session, _) = session();
        type_text(&mut session, "git log");
        ctrl(&mut session, 'w');
        assert_eq!(session.query(), "git ");
        ctrl(&mut session, 'x');
        assert_eq!(session.query(), "git ");
        ctrl(&mut session, 'u');
        assert_eq!(session.query(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_events_ignored() {
        let (mut session, _) = session();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut session, key);
        assert_eq!(session.query(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_paste_flattens_newlines() {
        let (mut session, _) = session();
        type_text(&mut session, "git ");
        handle_paste(&mut session, "log\n");
        assert_eq!(session.query(), "git log");
    }
}
