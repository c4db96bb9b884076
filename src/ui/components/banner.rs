use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{search::SearchState, ui::components::spinner::Spinner, util::colors};

pub const WELCOME: &str = "Busque la cancion pa que baile";
pub const LOADING: &str = "Buscando...";
pub const NO_RESULTS: &str = "No se encontraron resultados";
pub const NO_RESULTS_HINT: &str = "Intenta con otro término de búsqueda.";

/// Status line above the result grid. Exactly one message is shown, in this
/// priority: error, loading, no results, result count, welcome.
pub struct Banner<'a> {
    search: &'a SearchState,
    tick: usize,
}

impl<'a> Banner<'a> {
    pub fn new(search: &'a SearchState, tick: usize) -> Self {
        Self { search, tick }
    }
}

pub fn result_count_label(count: usize) -> String {
    format!("{count} Resultados encontrados")
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if let Some(error) = self.search.error() {
            let lines = vec![
                Line::from(vec![
                    Span::styled("Error: ", Style::new().fg(colors::ERROR).bold()),
                    Span::styled(error.to_string(), Style::new().fg(colors::ERROR)),
                ]),
                Line::from(Span::styled(
                    "Esc para cerrar",
                    Style::new().fg(colors::NEUTRAL),
                )),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        if self.search.is_loading() {
            Spinner::new(self.tick)
                .with_style(Style::new().fg(colors::PRIMARY))
                .with_label(LOADING)
                .render(area, buf);
            return;
        }

        let lines = if self.search.show_no_results() {
            vec![
                Line::from(NO_RESULTS.fg(colors::MUTED).bold()),
                Line::from(NO_RESULTS_HINT.fg(colors::NEUTRAL)),
            ]
        } else if self.search.has_searched() {
            vec![Line::from(
                result_count_label(self.search.results().len())
                    .fg(colors::MUTED)
                    .add_modifier(Modifier::BOLD),
            )]
        } else {
            vec![Line::from(WELCOME.fg(colors::PRIMARY).bold())]
        };

        Paragraph::new(lines).centered().render(area, buf);
    }
}
