use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::{
    model::SearchResult,
    ui::{state::GridState, util::get_active_track_icon},
    util::{colors, format::truncate},
};

pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 6;

pub const PLAY_LABEL: &str = "▶ Reproducir";
pub const PLAYING_LABEL: &str = "Reproduciendo";
pub const UNAVAILABLE_LABEL: &str = "No disponible";
pub const QUEUED_LABEL: &str = "en cola";

pub struct ResultGrid<'a> {
    results: &'a [SearchResult],
    queue: &'a [SearchResult],
    current_id: Option<u64>,
    is_playing: bool,
    focused: bool,
    tick: usize,
}

impl<'a> ResultGrid<'a> {
    pub fn new(results: &'a [SearchResult], queue: &'a [SearchResult]) -> Self {
        Self {
            results,
            queue,
            current_id: None,
            is_playing: false,
            focused: false,
            tick: 0,
        }
    }

    pub fn current(mut self, current_id: Option<u64>, is_playing: bool) -> Self {
        self.current_id = current_id;
        self.is_playing = is_playing;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    fn action_line(&self, item: &SearchResult) -> Line<'static> {
        let mut spans = if self.current_id == Some(item.track_id) {
            let icon = get_active_track_icon(self.is_playing, self.tick);
            vec![Span::styled(
                format!("{icon} {PLAYING_LABEL}"),
                Style::new().fg(colors::PRIMARY).bold(),
            )]
        } else if item.has_preview() {
            vec![Span::styled(PLAY_LABEL, Style::new().fg(colors::MUTED))]
        } else {
            vec![Span::styled(
                UNAVAILABLE_LABEL,
                Style::new().fg(colors::NEUTRAL).italic(),
            )]
        };

        if self.queue.iter().any(|q| q.track_id == item.track_id) {
            spans.push(Span::styled(
                format!(" · {QUEUED_LABEL}"),
                Style::new().fg(colors::SECONDARY),
            ));
        }

        Line::from(spans)
    }

    fn render_card(&self, item: &SearchResult, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected && self.focused {
            Style::new().fg(colors::PRIMARY)
        } else if selected {
            Style::new().fg(colors::MUTED)
        } else {
            Style::new().fg(colors::SURFACE)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style);
        let width = block.inner(area).width as usize;

        let album = item.collection_name.as_deref().unwrap_or_default();
        let duration = item.duration_label();
        let meta_width = width.saturating_sub(duration.chars().count() + 3);
        let meta = if album.is_empty() {
            duration
        } else {
            format!("{} · {}", truncate(album, meta_width), duration)
        };

        let lines = vec![
            Line::from(truncate(item.title(), width).add_modifier(Modifier::BOLD)),
            Line::from(truncate(item.artist(), width).fg(colors::MUTED)),
            Line::from(meta.fg(colors::NEUTRAL)),
            self.action_line(item),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl StatefulWidget for ResultGrid<'_> {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut GridState) {
        if area.is_empty() || self.results.is_empty() {
            return;
        }

        let columns = (area.width / CARD_WIDTH).max(1);
        let visible_rows = (area.height / CARD_HEIGHT).max(1);
        state.set_columns(columns as usize);
        state.clamp(self.results.len());
        state.scroll_into_view(visible_rows as usize);

        let card_width = area.width / columns;
        let first = state.offset_row() * state.columns();

        for (i, item) in self.results.iter().enumerate().skip(first) {
            let slot = i - first;
            let row = (slot / state.columns()) as u16;
            let col = (slot % state.columns()) as u16;
            if row >= visible_rows {
                break;
            }

            let card = Rect::new(
                area.x + col * card_width,
                area.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            );
            self.render_card(item, i == state.selected(), card, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, preview: bool) -> SearchResult {
        SearchResult {
            track_name: Some(format!("Tema {id}")),
            preview_url: preview.then(|| format!("https://audio.example/{id}.m4a")),
            ..SearchResult::new(id)
        }
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn columns_follow_width() {
        let results = vec![item(1, true), item(2, false), item(3, true)];
        let area = Rect::new(0, 0, CARD_WIDTH * 2, CARD_HEIGHT * 2);
        let mut buf = Buffer::empty(area);
        let mut state = GridState::default();

        ResultGrid::new(&results, &[]).render(area, &mut buf, &mut state);

        assert_eq!(state.columns(), 2);
        let rendered = text(&buf);
        assert!(rendered.contains("Tema 3"));
        assert!(rendered.contains(UNAVAILABLE_LABEL));
    }

    #[test]
    fn marks_current_and_queued_cards() {
        let results = vec![item(1, true), item(2, true)];
        let queue = vec![item(2, true)];
        let area = Rect::new(0, 0, CARD_WIDTH * 2, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut state = GridState::default();

        ResultGrid::new(&results, &queue)
            .current(Some(1), true)
            .render(area, &mut buf, &mut state);

        let rendered = text(&buf);
        assert!(rendered.contains(PLAYING_LABEL));
        assert!(rendered.contains(QUEUED_LABEL));
    }
}
