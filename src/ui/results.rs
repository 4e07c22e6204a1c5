//! Ranked result list with match highlighting.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget};

use crate::search::{Match, SearchSession, SessionState};

pub struct ResultList<'a> {
    session: &'a SearchSession,
}

impl<'a> ResultList<'a> {
    pub fn new(session: &'a SearchSession) -> Self {
        Self { session }
    }
}

impl StatefulWidget for ResultList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut block = Block::new().borders(Borders::ALL).border_type(BorderType::Rounded);
        if self.session.state() == SessionState::Debouncing {
            block = block.title(" searching… ");
        }

        let items: Vec<ListItem> = self
            .session
            .matches()
            .iter()
            .map(|m| ListItem::new(highlight_line(m)))
            .collect();

        // List keeps the selected row inside the visible height
        List::new(items)
            .block(block)
            .style(Style::new().fg(Color::Green))
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .render(area, buf, state);
    }
}

/// Split an entry into spans, emphasizing the chars that matched.
fn highlight_line(m: &Match) -> Line<'static> {
    let emphasis = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;
    let mut positions = m.positions.iter().peekable();

    for (i, c) in m.text.chars().enumerate() {
        let matched = positions.next_if(|&&p| p == i).is_some();
        if matched != run_matched && !run.is_empty() {
            spans.push(styled(std::mem::take(&mut run), run_matched, emphasis));
        }
        run_matched = matched;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(styled(run, run_matched, emphasis));
    }
    Line::from(spans)
}

fn styled(text: String, matched: bool, emphasis: Style) -> Span<'static> {
    if matched {
        Span::styled(text, emphasis)
    } else {
        Span::raw(text)
    }
}
