use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

use crate::{
    ui::{
        app::App,
        components::{
            banner::Banner, player::PlayerWidget, queue_panel::QueuePanel,
            result_grid::ResultGrid, search_bar::SearchBar,
        },
        state::Focus,
    },
    util::colors,
};

const HEADER_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 2;
const PLAYER_HEIGHT: u16 = 4;
const QUEUE_WIDTH: u16 = 40;

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let has_player = self.app.audio_system.current_track().is_some();
        let has_queue = !self.app.audio_system.queue().is_empty();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(if has_player { PLAYER_HEIGHT } else { 0 }),
            ])
            .split(area);

        let header_area = chunks[0];
        let body_area = chunks[1];
        let player_area = chunks[2];

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(if has_queue { QUEUE_WIDTH } else { 0 }),
            ])
            .split(body_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(BANNER_HEIGHT), Constraint::Min(0)])
            .split(body_chunks[0]);

        let state = &mut self.app.state;
        let search = &state.search;
        let ui = &mut state.ui;

        let search_bar = SearchBar::new(
            search.input(),
            search.is_loading(),
            ui.focus == Focus::SearchInput,
        );
        let cursor = search_bar.cursor(header_area);
        f.render_widget(search_bar, header_area);
        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }

        f.render_widget(Banner::new(search, ui.tick), main_chunks[0]);

        let audio = &self.app.audio_system;
        let current_id = audio.current_track().map(|t| t.track_id);

        f.render_stateful_widget(
            ResultGrid::new(search.results(), audio.queue())
                .current(current_id, audio.is_playing())
                .focused(ui.focus == Focus::Results)
                .tick(ui.tick),
            main_chunks[1],
            &mut ui.grid,
        );

        if has_queue {
            let upcoming = audio.upcoming();
            ui.queue_selected = ui.queue_selected.min(upcoming.len().saturating_sub(1));
            f.render_widget(
                QueuePanel::new(upcoming, current_id)
                    .selection(ui.queue_selected, ui.focus == Focus::Queue),
                body_chunks[1],
            );
        } else if ui.focus == Focus::Queue {
            ui.focus = Focus::Results;
        }

        if let Some(track) = audio.current_track() {
            let playback = audio.playback_state();
            f.render_widget(
                PlayerWidget::new(track, &playback, audio.progress(), audio.volume())
                    .error(state.playback_error.as_deref()),
                player_area,
            );
        }
    }
}
