use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub const PLACEHOLDER: &str = "Buscar";

pub struct SearchBar<'a> {
    input: &'a str,
    is_loading: bool,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a str, is_loading: bool, focused: bool) -> Self {
        Self {
            input,
            is_loading,
            focused,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_color = if self.focused && !self.is_loading {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };

        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(border_color))
            .title(" tunesearch ".bold())
    }

    /// Where the terminal cursor goes while the box accepts input. Long input
    /// keeps the cursor pinned to the right edge.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.is_loading {
            return None;
        }

        let inner = self.block().inner(area);
        if inner.is_empty() {
            return None;
        }

        let offset = (self.input.width() as u16).min(inner.width.saturating_sub(1));
        Some(Position::new(inner.x + offset, inner.y))
    }
}

/// Longest suffix of `input` that fits in `max_width` columns.
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut tail = input;
    while tail.width() > max_width {
        let mut chars = tail.chars();
        chars.next();
        tail = chars.as_str();
    }
    tail
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);

        let line = if self.input.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::new().fg(colors::NEUTRAL).add_modifier(Modifier::ITALIC),
            ))
        } else {
            let visible = visible_tail(self.input, inner.width.saturating_sub(1) as usize);
            Line::from(visible)
        };

        let style = if self.is_loading {
            Style::new().fg(colors::NEUTRAL).add_modifier(Modifier::DIM)
        } else {
            Style::new().fg(colors::MUTED)
        };

        Paragraph::new(line).style(style).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_input_only_when_editable() {
        let area = Rect::new(0, 0, 20, 3);

        let bar = SearchBar::new("abc", false, true);
        assert_eq!(bar.cursor(area), Some(Position::new(4, 1)));

        assert_eq!(SearchBar::new("abc", true, true).cursor(area), None);
        assert_eq!(SearchBar::new("abc", false, false).cursor(area), None);
    }

    #[test]
    fn long_input_keeps_the_tail_in_view() {
        assert_eq!(visible_tail("abcdef", 4), "cdef");
        assert_eq!(visible_tail("abc", 4), "abc");
        assert_eq!(visible_tail("東京タワー", 6), "タワー");
        assert_eq!(visible_tail("a東京", 3), "京");
        assert_eq!(visible_tail("東京", 0), "");
    }

    #[test]
    fn wide_input_renders_last_characters() {
        let area = Rect::new(0, 0, 9, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new("東京タワー", false, true).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "タ");
        assert_eq!(buf[(3, 1)].symbol(), "ワ");
        assert_eq!(buf[(5, 1)].symbol(), "ー");
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new("", false, true).render(area, &mut buf);

        let row: String = (1..7).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, PLACEHOLDER);
    }
}
