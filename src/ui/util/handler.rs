use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await
            && Self::handle_event(app, evt, tui).await?
        {
            should_render = true;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Paste(text) => app.update(AppMessage::Paste(text)).await,
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key, &app.state) {
                    app.update(msg).await;
                }
            }
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                app.state.ui.tick = app.state.ui.tick.wrapping_add(1);
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::SearchFinished(outcome) => {
                let results = app.state.search.complete(outcome);
                app.audio_system.load_results(results);
                app.state.ui.grid.reset();
                app.state.ui.queue_selected = 0;

                if app.state.search.error().is_none() {
                    info!(count = app.state.search.results().len(), "Search finished");
                }
            }
            Event::TrackStarted(track) => {
                debug!(track_id = track.track_id, name = %track.name, "Track started");
                app.state.playback_error = None;
            }
            Event::TrackEnded => debug!("Track ended"),
            Event::PlaybackFailed(message) => {
                warn!(error = %message, "Playback failed");
                app.state.playback_error = Some(message);
            }
        }
    }
}
