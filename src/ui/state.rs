use crate::{search::SearchState, ui::message::Direction};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search: SearchState,
    pub ui: UiState,
    /// Last preview failure. Kept apart from the search error so playback
    /// never changes what a search outcome shows.
    pub playback_error: Option<String>,
}

impl AppState {
    pub fn has_error(&self) -> bool {
        self.search.error().is_some() || self.playback_error.is_some()
    }

    /// Dismisses the search error first, then the playback error.
    pub fn dismiss_error(&mut self) -> bool {
        self.search.dismiss_error() || self.playback_error.take().is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub grid: GridState,
    pub queue_selected: usize,
    pub tick: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SearchInput,
    Results,
    Queue,
}

impl Focus {
    pub fn next(self, has_queue: bool) -> Self {
        match self {
            Focus::SearchInput => Focus::Results,
            Focus::Results if has_queue => Focus::Queue,
            Focus::Results | Focus::Queue => Focus::SearchInput,
        }
    }
}

/// Selection and scroll position of the result card grid. The column count
/// follows the rendered width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    selected: usize,
    columns: usize,
    offset_row: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            columns: 1,
            offset_row: 0,
        }
    }
}

impl GridState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn offset_row(&self) -> usize {
        self.offset_row
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset_row = 0;
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_by(&mut self, direction: Direction, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }

        let last = len - 1;
        self.selected = match direction {
            Direction::Left => self.selected.saturating_sub(1),
            Direction::Right => (self.selected + 1).min(last),
            Direction::Up => self.selected.checked_sub(self.columns).unwrap_or(self.selected),
            Direction::Down => {
                if self.selected + self.columns <= last {
                    self.selected + self.columns
                } else if self.selected / self.columns < last / self.columns {
                    last
                } else {
                    self.selected
                }
            }
        };
    }

    /// Adjusts the first visible row so the selection stays on screen.
    pub fn scroll_into_view(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        let row = self.selected / self.columns;
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + visible_rows {
            self.offset_row = row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize) -> GridState {
        let mut grid = GridState::default();
        grid.set_columns(columns);
        grid
    }

    #[test]
    fn moves_across_rows_and_columns() {
        let mut g = grid(3);
        g.move_by(Direction::Right, 7);
        g.move_by(Direction::Down, 7);
        assert_eq!(g.selected(), 4);

        g.move_by(Direction::Down, 7);
        assert_eq!(g.selected(), 6);

        g.move_by(Direction::Down, 7);
        assert_eq!(g.selected(), 6);

        g.move_by(Direction::Up, 7);
        assert_eq!(g.selected(), 3);
        g.move_by(Direction::Up, 7);
        g.move_by(Direction::Up, 7);
        assert_eq!(g.selected(), 0);

        g.move_by(Direction::Left, 7);
        assert_eq!(g.selected(), 0);
    }

    #[test]
    fn empty_grid_stays_at_origin() {
        let mut g = grid(4);
        g.move_by(Direction::Down, 0);
        assert_eq!(g.selected(), 0);
    }

    #[test]
    fn scrolls_selection_into_view() {
        let mut g = grid(2);
        for _ in 0..3 {
            g.move_by(Direction::Down, 10);
        }
        assert_eq!(g.selected(), 6);

        g.scroll_into_view(2);
        assert_eq!(g.offset_row(), 2);

        g.move_by(Direction::Up, 10);
        g.move_by(Direction::Up, 10);
        g.scroll_into_view(2);
        assert_eq!(g.offset_row(), 1);
    }

    #[test]
    fn playback_failure_does_not_touch_search_outcome() {
        let mut state = AppState::default();
        state.search.submit("beatles").unwrap();
        state.playback_error = Some("No se pudo descargar la vista previa".into());
        state.search.complete(Ok(vec![]));

        assert!(state.search.error().is_none());
        assert!(state.search.show_no_results());
        assert!(state.has_error());

        assert!(state.dismiss_error());
        assert!(!state.has_error());
        assert!(!state.dismiss_error());
    }

    #[test]
    fn focus_cycle_skips_hidden_queue() {
        assert_eq!(Focus::Results.next(false), Focus::SearchInput);
        assert_eq!(Focus::Results.next(true), Focus::Queue);
        assert_eq!(Focus::Queue.next(true), Focus::SearchInput);
        assert_eq!(Focus::SearchInput.next(false), Focus::Results);
    }
}
