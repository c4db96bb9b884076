use async_trait::async_trait;
use flume::Sender;
use rodio::{Decoder, Source};
use std::{
    io::Cursor,
    sync::{
        Arc, Mutex as SyncMutex, RwLock,
        atomic::{AtomicBool, AtomicU8, Ordering},
    },
    time::Duration,
};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    audio::{
        commands::AudioCommand, error::AudioError, playback::PlaybackEngine,
        progress::TrackProgress, state::PlaybackState, traits::PlaybackControl,
    },
    event::events::Event,
    http::ApiService,
    model::CurrentTrack,
};

const MONITOR_INTERVAL: Duration = Duration::from_millis(200);

/// Bumped on every stop. A preview load only reaches the sink while the
/// generation it started under is still current, and the check and the
/// append happen under the same lock as the stop.
#[derive(Debug, Default)]
struct LoadGeneration(SyncMutex<u64>);

impl LoadGeneration {
    fn advance(&self, on_advance: impl FnOnce()) -> u64 {
        match self.0.lock() {
            Ok(mut generation) => {
                *generation += 1;
                on_advance();
                *generation
            }
            Err(_) => {
                on_advance();
                0
            }
        }
    }

    fn run_if_current(&self, generation: u64, f: impl FnOnce()) -> bool {
        match self.0.lock() {
            Ok(current) if *current == generation => {
                f();
                true
            }
            _ => false,
        }
    }
}

/// Downloads previews through the API client and feeds them to the output
/// device. Every `PlayTrack` replaces whatever was loaded before.
pub struct AudioController {
    engine: Arc<PlaybackEngine>,
    api: Arc<ApiService>,
    state: Arc<RwLock<PlaybackState>>,
    event_tx: Sender<Event>,
    track_progress: Arc<TrackProgress>,
    current_playback_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    generation: Arc<LoadGeneration>,
    volume: Arc<AtomicU8>,
    is_muted: Arc<AtomicBool>,
}

impl AudioController {
    pub fn new(
        engine: PlaybackEngine,
        api: Arc<ApiService>,
        event_tx: Sender<Event>,
        volume: u8,
    ) -> Self {
        let controller = Self {
            engine: Arc::new(engine),
            api,
            state: Arc::new(RwLock::new(PlaybackState::Stopped)),
            event_tx,
            track_progress: Arc::new(TrackProgress::new()),
            current_playback_task: Arc::new(Mutex::new(None)),
            generation: Arc::new(LoadGeneration::default()),
            volume: Arc::new(AtomicU8::new(volume.min(100))),
            is_muted: Arc::new(AtomicBool::new(false)),
        };

        controller.apply_volume();
        controller.start_monitor();
        controller
    }

    fn start_monitor(&self) {
        let engine = self.engine.clone();
        let progress = self.track_progress.clone();
        let state = self.state.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(MONITOR_INTERVAL).await;

                let is_playing = state.read().map(|s| s.is_playing()).unwrap_or(false);
                if !is_playing {
                    continue;
                }

                progress.set_position(engine.get_pos());

                if engine.is_empty() {
                    if let Ok(mut guard) = state.write() {
                        *guard = PlaybackState::Stopped;
                    }
                    let _ = event_tx.send(Event::TrackEnded);
                }
            }
        });
    }

    async fn play_track(&self, track: CurrentTrack) {
        let generation = self.stop().await;
        self.set_state(PlaybackState::Buffering(track.clone()));

        let engine = self.engine.clone();
        let api = self.api.clone();
        let progress = self.track_progress.clone();
        let event_tx = self.event_tx.clone();
        let state = self.state.clone();
        let current = self.generation.clone();

        let task = tokio::spawn(async move {
            match load_preview(&api, &track.url).await {
                Ok(source) => {
                    let started = current.run_if_current(generation, || {
                        if let Some(duration) = source.total_duration() {
                            progress.set_duration(duration);
                        }
                        engine.play_source(source);

                        if let Ok(mut guard) = state.write() {
                            *guard = PlaybackState::Playing(track.clone());
                        }
                    });
                    if !started {
                        debug!(track_id = track.track_id, "Discarding superseded preview");
                        return;
                    }

                    info!(track_id = track.track_id, name = %track.name, "Preview started");
                    let _ = event_tx.send(Event::TrackStarted(track));
                }
                Err(e) => {
                    let reported = current.run_if_current(generation, || {
                        if let Ok(mut guard) = state.write() {
                            *guard = PlaybackState::Error(e.to_string());
                        }
                    });
                    if !reported {
                        return;
                    }

                    warn!(track_id = track.track_id, error = %e, "Preview failed");
                    let _ = event_tx.send(Event::PlaybackFailed(e.to_string()));
                }
            }
        });

        let mut task_guard = self.current_playback_task.lock().await;
        *task_guard = Some(task);
    }

    /// Empties the sink and invalidates any load still in flight. Returns the
    /// generation the next load runs under.
    async fn stop(&self) -> u64 {
        let mut task_guard = self.current_playback_task.lock().await;
        if let Some(task) = task_guard.take() {
            task.abort();
        }
        let generation = self.generation.advance(|| {
            self.engine.stop();
            self.track_progress.reset();
        });
        self.set_state(PlaybackState::Stopped);
        generation
    }

    fn pause(&self) {
        self.engine.pause();
        if let Ok(mut state) = self.state.write()
            && let PlaybackState::Playing(track) = &*state
        {
            *state = PlaybackState::Paused(track.clone());
        }
    }

    fn resume(&self) {
        self.engine.play();
        if let Ok(mut state) = self.state.write()
            && let PlaybackState::Paused(track) = &*state
        {
            *state = PlaybackState::Playing(track.clone());
        }
    }

    fn set_state(&self, new_state: PlaybackState) {
        if let Ok(mut state) = self.state.write() {
            *state = new_state;
        }
    }

    fn set_volume(&self, volume: u8) {
        self.volume.store(volume.min(100), Ordering::Relaxed);
        self.is_muted.store(false, Ordering::Relaxed);
        self.apply_volume();
    }

    fn apply_volume(&self) {
        let volume = if self.is_muted.load(Ordering::Relaxed) {
            0.0
        } else {
            self.volume.load(Ordering::Relaxed) as f32 / 100.0
        };
        self.engine.set_volume(volume);
    }
}

async fn load_preview(
    api: &ApiService,
    url: &str,
) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let bytes = api
        .fetch_preview(url)
        .await
        .map_err(|e| AudioError::FetchError(e.to_string()))?;
    debug!(url, len = bytes.len(), "Preview downloaded");

    let hint = preview_hint(url);
    let byte_len = bytes.len() as u64;
    tokio::task::spawn_blocking(move || {
        Decoder::builder()
            .with_data(Cursor::new(bytes))
            .with_hint(hint)
            .with_byte_len(byte_len)
            .with_gapless(true)
            .build()
    })
    .await
    .map_err(|e| AudioError::DecodingError(e.to_string()))?
    .map_err(|e| AudioError::DecodingError(e.to_string()))
}

/// Container hint from the clip's file extension. Catalog previews are AAC
/// in an MPEG-4 container unless the locator says otherwise.
fn preview_hint(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "mp3" => "mp3",
        Some(ext) if ext == "flac" => "flac",
        Some(ext) if ext == "aac" => "aac",
        _ => "m4a",
    }
}

#[async_trait]
impl PlaybackControl for AudioController {
    async fn handle_command(&self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::PlayTrack(track) => self.play_track(track).await,
            AudioCommand::Pause => self.pause(),
            AudioCommand::Resume => self.resume(),
            AudioCommand::Stop => {
                self.stop().await;
            }
            AudioCommand::SetVolume(volume) => self.set_volume(volume),
        }
    }

    fn state(&self) -> PlaybackState {
        self.state
            .read()
            .map(|s| s.clone())
            .unwrap_or(PlaybackState::Stopped)
    }

    fn volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    fn is_muted(&self) -> bool {
        self.is_muted.load(Ordering::Relaxed)
    }

    fn toggle_mute(&self) {
        let muted = self.is_muted.load(Ordering::Relaxed);
        self.is_muted.store(!muted, Ordering::Relaxed);
        self.apply_volume();
    }

    fn progress(&self) -> (u64, u64) {
        self.track_progress.get_progress()
    }
}
