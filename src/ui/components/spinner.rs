use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    tick: usize,
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new(tick: usize) -> Self {
        Self {
            tick,
            style: Style::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn symbol(&self) -> &'static str {
        FRAMES[(self.tick / 2) % FRAMES.len()]
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let text = match &self.label {
            Some(label) => format!("{} {}", self.symbol(), label),
            None => self.symbol().to_string(),
        };

        let x = area.x + area.width.saturating_sub(text.width() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, text, area.width as usize, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_advances_every_other_tick() {
        assert_eq!(Spinner::new(0).symbol(), Spinner::new(1).symbol());
        assert_ne!(Spinner::new(1).symbol(), Spinner::new(2).symbol());
        assert_eq!(Spinner::new(0).symbol(), Spinner::new(20).symbol());
    }
}
