use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::{
    model::SearchResult,
    util::{colors, format::truncate},
};

pub const QUEUE_TITLE: &str = " A CONTINUACIÓN ";

/// Upcoming queue entries. The entry matching the current track is
/// highlighted by id.
pub struct QueuePanel<'a> {
    items: &'a [SearchResult],
    current_id: Option<u64>,
    selected: usize,
    focused: bool,
}

impl<'a> QueuePanel<'a> {
    pub fn new(items: &'a [SearchResult], current_id: Option<u64>) -> Self {
        Self {
            items,
            current_id,
            selected: 0,
            focused: false,
        }
    }

    pub fn selection(mut self, selected: usize, focused: bool) -> Self {
        self.selected = selected;
        self.focused = focused;
        self
    }
}

impl Widget for QueuePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::SURFACE
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(border_color))
            .title(QUEUE_TITLE);
        let width = block.inner(area).width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_current = self.current_id == Some(item.track_id);
                let style = if is_current {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::MUTED)
                };

                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{:>2}. {}", i + 1, truncate(item.title(), width)),
                        style,
                    )),
                    Line::from(Span::styled(
                        format!("    {}", truncate(item.artist(), width)),
                        Style::default().fg(colors::NEUTRAL),
                    )),
                ])
            })
            .collect();

        let mut list = List::new(items).block(block);
        let mut state = ListState::default();
        if self.focused {
            list = list.highlight_style(Style::new().bg(colors::SURFACE));
            state.select(Some(self.selected));
        }

        StatefulWidget::render(list, area, buf, &mut state);
    }
}
