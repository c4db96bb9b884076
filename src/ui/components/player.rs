use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::{self, border},
    text::{Line, Span, ToSpan},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{
    audio::state::PlaybackState,
    model::CurrentTrack,
    ui::components::gauge::ProgressGauge,
    util::{
        colors,
        format::{format_millis, truncate},
    },
};

pub struct PlayerWidget<'a> {
    track: &'a CurrentTrack,
    state: &'a PlaybackState,
    progress: (u64, u64),
    volume: u8,
    error: Option<&'a str>,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(
        track: &'a CurrentTrack,
        state: &'a PlaybackState,
        progress: (u64, u64),
        volume: u8,
    ) -> Self {
        Self {
            track,
            state,
            progress,
            volume,
            error: None,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn state_icon(&self) -> &'static str {
        match self.state {
            PlaybackState::Playing(_) => "▶",
            PlaybackState::Paused(_) => "⏸",
            PlaybackState::Buffering(_) => "…",
            PlaybackState::Stopped => "■",
            PlaybackState::Error(_) => "!",
        }
    }

    fn ratio(&self) -> f64 {
        let (position, duration) = self.progress;
        if duration == 0 {
            0.0
        } else {
            (position as f64 / duration as f64).min(1.0)
        }
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Percentage(45),
                Constraint::Length(12),
            ])
            .split(area);

        let info_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        let info_width = info_block.inner(layout[0]).width as usize;

        let mut subtitle = self.track.artist.clone();
        if let Some(album) = self.track.collection_name.as_deref().filter(|a| !a.is_empty()) {
            subtitle = format!("{subtitle} · {album}");
        }

        Paragraph::new(vec![
            Line::from(vec![
                format!("{} ", self.state_icon()).fg(colors::PRIMARY),
                truncate(&self.track.name, info_width.saturating_sub(2)).bold(),
            ]),
            match self.error {
                Some(error) => Line::from(
                    truncate(&format!("Error: {error}"), info_width).fg(colors::ERROR),
                ),
                None => Line::from(truncate(&subtitle, info_width).fg(colors::MUTED)),
            },
        ])
        .block(info_block)
        .render(layout[0], buf);

        let (position, duration) = self.progress;
        let label = format!("{} / {}", format_millis(position), format_millis(duration));

        ProgressGauge::default()
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT)
                    .border_set(border::Set {
                        top_right: symbols::line::ROUNDED.horizontal_down,
                        bottom_right: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    }),
            )
            .ratio(self.ratio())
            .label(label.to_span().fg(Color::White))
            .played_style(Style::default().fg(colors::PRIMARY).bg(colors::SECONDARY))
            .remaining_style(Style::default().fg(colors::BACKGROUND).bg(colors::BACKGROUND))
            .use_unicode(true)
            .render(layout[1], buf);

        let volume_text = if self.volume == 0 {
            Span::styled("mute", Style::new().fg(colors::NEUTRAL))
        } else {
            Span::raw(format!("{}%", self.volume))
        };

        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT)
                    .border_set(border::ROUNDED),
            )
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(f64::from(self.volume.min(100)) / 100.0)
            .label(volume_text)
            .render(layout[2], buf);
    }
}
