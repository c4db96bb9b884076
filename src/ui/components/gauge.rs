use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Block, Widget},
};

/// Single-ratio bar with sub-cell precision and a label punched through the
/// middle row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgressGauge<'a> {
    block: Option<Block<'a>>,
    ratio: f64,
    label: Option<Span<'a>>,
    use_unicode: bool,
    played_style: Style,
    remaining_style: Style,
}

impl<'a> ProgressGauge<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn label<T>(mut self, label: T) -> Self
    where
        T: Into<Span<'a>>,
    {
        self.label = Some(label.into());
        self
    }

    pub const fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }

    pub fn played_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.played_style = style.into();
        self
    }

    pub fn remaining_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.remaining_style = style.into();
        self
    }
}

fn get_unicode_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for ProgressGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(ref block) = self.block {
            block.render(area, buf);
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        if inner.is_empty() {
            return;
        }

        let played_pos = inner.width as f64 * self.ratio;
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| Span::raw(format!("{}%", (self.ratio * 100.0).round() as u16)));
        let label_width = (label.width() as u16).min(inner.width);
        let label_col = inner.left() + (inner.width - label_width) / 2;
        let label_row = inner.top() + inner.height / 2;

        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                let pos = (x - inner.left()) as f64;

                let (mut symbol, mut style) = if pos < played_pos {
                    let symbol = if self.use_unicode && pos + 1.0 > played_pos {
                        get_unicode_block(played_pos - pos)
                    } else {
                        symbols::block::FULL
                    };
                    (symbol, self.played_style)
                } else {
                    (" ", self.remaining_style)
                };

                if y == label_row && x >= label_col && x < label_col + label_width {
                    symbol = " ";
                    style = style.bg(style.fg.unwrap_or_default());
                }

                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(style.fg.unwrap_or_default())
                    .set_bg(style.bg.unwrap_or_default());
            }
        }

        buf.set_span(label_col, label_row, &label, label_width);
    }
}
