use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::{
    audio::system::AudioSystem,
    config::Config,
    event::events::Event,
    http::ApiService,
    model::SearchResult,
    search::SearchError,
    util::task::TaskManager,
};

use super::{
    layout::AppLayout,
    message::{AppMessage, Direction},
    state::{AppState, Focus},
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<ApiService>,
    pub audio_system: AudioSystem,
    pub state: AppState,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(config.api.clone())?);
        let audio_system = AudioSystem::new(event_tx.clone(), api.clone(), &config.audio)?;

        Ok(Self::with_parts(api, audio_system, event_tx, event_rx))
    }

    pub fn with_parts(
        api: Arc<ApiService>,
        audio_system: AudioSystem,
        event_tx: Sender<Event>,
        event_rx: Receiver<Event>,
    ) -> Self {
        Self {
            event_rx,
            event_tx,
            api,
            audio_system,
            state: AppState::default(),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.paste(true);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        self.audio_system.stop().await;
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::SubmitSearch => self.submit_search(),
            AppMessage::InputChar(c) => self.state.search.push_char(c),
            AppMessage::InputBackspace => self.state.search.pop_char(),
            AppMessage::ClearInput => self.state.search.clear_input(),
            AppMessage::Paste(text) => {
                self.state.ui.focus = Focus::SearchInput;
                self.state.search.insert_str(&text);
            }
            AppMessage::DismissError => {
                self.state.dismiss_error();
            }
            AppMessage::FocusSearch => self.state.ui.focus = Focus::SearchInput,
            AppMessage::FocusResults => self.state.ui.focus = Focus::Results,
            AppMessage::CycleFocus => {
                let has_queue = !self.audio_system.queue().is_empty();
                self.state.ui.focus = self.state.ui.focus.next(has_queue);
            }
            AppMessage::Move(direction) => match self.state.ui.focus {
                Focus::Queue => {
                    let len = self.audio_system.upcoming().len();
                    let selected = &mut self.state.ui.queue_selected;
                    *selected = match direction {
                        Direction::Up => selected.saturating_sub(1),
                        Direction::Down => {
                            (*selected + 1).min(len.saturating_sub(1))
                        }
                        _ => *selected,
                    };
                }
                _ => {
                    let len = self.state.search.results().len();
                    self.state.ui.grid.move_by(direction, len);
                }
            },
            AppMessage::PlaySelected => {
                if let Some(item) = self.selected_item() {
                    self.audio_system.play(&item).await;
                }
            }
            AppMessage::AddSelectedToQueue => {
                if self.state.ui.focus == Focus::Results
                    && let Some(item) = self.selected_item()
                {
                    let added = self.audio_system.add_to_queue(&item);
                    debug!(track_id = item.track_id, added, "Add to queue");
                }
            }
            AppMessage::NextTrack => self.audio_system.play_next().await,
            AppMessage::PreviousTrack => self.audio_system.play_previous().await,
            AppMessage::TogglePlayPause => self.audio_system.play_pause().await,
            AppMessage::VolumeUp => self.audio_system.volume_up().await,
            AppMessage::VolumeDown => self.audio_system.volume_down().await,
            AppMessage::ToggleMute => self.audio_system.toggle_mute(),
        }
    }

    fn submit_search(&mut self) {
        match self.state.search.submit_input() {
            Ok(term) => {
                self.audio_system.clear_queue();
                self.state.ui.grid.reset();
                self.state.ui.queue_selected = 0;

                let api = self.api.clone();
                let tx = self.event_tx.clone();
                info!(term = %term, "Search submitted");

                self.task_manager.spawn(
                    "search",
                    tokio::spawn(async move {
                        let outcome = api.search(&term).await.map_err(|e| {
                            warn!(error = ?e, "Search failed");
                            SearchError::from(e)
                        });
                        let _ = tx.send(Event::SearchFinished(outcome));
                    }),
                );
            }
            Err(SearchError::InFlight) => {}
            Err(e) => debug!(error = %e, "Search rejected"),
        }
    }

    fn selected_item(&self) -> Option<SearchResult> {
        match self.state.ui.focus {
            Focus::Queue => self
                .audio_system
                .upcoming()
                .get(self.state.ui.queue_selected)
                .cloned(),
            Focus::Results => self
                .state
                .search
                .results()
                .get(self.state.ui.grid.selected())
                .cloned(),
            Focus::SearchInput => None,
        }
    }
}
