//! Rendering of the search screen.
//!
//! Three stacked boxes inside a rounded frame: the query input, the ranked
//! result list and the status line. The terminal cursor is parked at the end
//! of the query so typing feels like a normal prompt.

mod results;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, ListState, Paragraph, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use crate::search::SearchSession;

pub use results::ResultList;

const QUERY_PROMPT: &str = "search: ";
const STATUS_PROMPT: &str = "status:";

/// Render state kept between frames.
#[derive(Debug, Default)]
pub struct ScreenState {
    /// Scroll offset and highlight of the result list.
    pub list: ListState,
    /// Where the terminal cursor should sit after drawing.
    pub cursor: Option<Position>,
}

pub struct SearchScreen<'a> {
    session: &'a SearchSession,
}

impl<'a> SearchScreen<'a> {
    pub fn new(session: &'a SearchSession) -> Self {
        Self { session }
    }
}

fn rounded() -> Block<'static> {
    Block::new().borders(Borders::ALL).border_type(BorderType::Rounded)
}

impl StatefulWidget for SearchScreen<'_> {
    type State = ScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let session = self.session;

        let counts = format!(" {}/{} ", session.matches().len(), session.entry_count());
        let outer = rounded()
            .title(Line::from(" hist-finder ".bold()))
            .title(Line::from(counts).right_aligned());
        let inner = outer.inner(area);
        outer.render(area, buf);

        let [input_area, list_area, status_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
            .areas(inner);

        // Query input
        let input_block = rounded();
        let input_inner = input_block.inner(input_area);
        Paragraph::new(Line::from(vec![Span::raw(QUERY_PROMPT), Span::raw(session.query())]))
            .block(input_block)
            .render(input_area, buf);

        state.cursor = if input_inner.width > 0 && input_inner.height > 0 {
            let offset = (QUERY_PROMPT.width() + session.query().width()) as u16;
            let max_x = input_inner.x + input_inner.width - 1;
            Some(Position::new(input_inner.x.saturating_add(offset).min(max_x), input_inner.y))
        } else {
            None
        };

        // Results
        state.list.select(session.cursor());
        ResultList::new(session).render(list_area, buf, &mut state.list);

        // Status line
        Paragraph::new(Line::from(vec![Span::raw(STATUS_PROMPT), Span::raw(session.status())]))
            .block(rounded())
            .render(status_area, buf);
    }
}
