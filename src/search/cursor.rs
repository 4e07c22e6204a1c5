//! Highlight cursor over the ranked match list.
//!
//! The cursor is either inactive (empty list) or a valid index into the
//! current list. Movement wraps around at both ends; replacing the list
//! always resets to [`MIN_INDEX`].

/// Index of the first row of a match list.
pub const MIN_INDEX: usize = 0;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Highlighted row in the match list, or `None` while the list is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: Option<usize>,
}

impl Cursor {
    /// Cursor for a freshly produced list of `len` rows.
    pub fn initial(len: usize) -> Self {
        if len == 0 {
            Self::inactive()
        } else {
            Self { index: Some(MIN_INDEX) }
        }
    }

    pub fn inactive() -> Self {
        Self { index: None }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Reset after the list was replaced. The previous position means
    /// nothing against a newly ranked list.
    pub fn on_list_replaced(&mut self, new_len: usize) {
        *self = Self::initial(new_len);
    }

    /// Move one row up, wrapping from the first row to the last.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        let current = self.valid_or_min(len);
        let span = len - MIN_INDEX;
        let offset = (current - MIN_INDEX + span - 1) % span;
        self.index = Some(MIN_INDEX + offset);
    }

    /// Move one row down, wrapping from the last row to the first.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        let current = self.valid_or_min(len);
        let span = len - MIN_INDEX;
        let offset = (current - MIN_INDEX + 1) % span;
        self.index = Some(MIN_INDEX + offset);
    }

    pub fn step(&mut self, direction: Direction, len: usize) {
        match direction {
            Direction::Up => self.move_up(len),
            Direction::Down => self.move_down(len),
        }
    }

    /// Pull a stale index back inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.index = match self.index {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }

    fn valid_or_min(&self, len: usize) -> usize {
        match self.index {
            Some(i) if i < len => i,
            _ => MIN_INDEX,
        }
    }
}
