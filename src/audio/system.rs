use crate::{
    audio::{
        commands::AudioCommand, config::AudioConfig, controller::AudioController,
        playback::PlaybackEngine, queue::QueueManager, state::PlaybackState,
        traits::PlaybackControl,
    },
    event::events::Event,
    http::ApiService,
    model::{CurrentTrack, SearchResult},
};
use flume::Sender;
use std::sync::Arc;
use tracing::debug;

/// Queue cursor bound to an output backend: every change of the current
/// track is handed to the backend for autoplay.
pub struct AudioSystem {
    controller: Box<dyn PlaybackControl>,
    queue: QueueManager,
    volume_step: u8,
}

impl AudioSystem {
    pub fn new(
        event_tx: Sender<Event>,
        api: Arc<ApiService>,
        config: &AudioConfig,
    ) -> color_eyre::Result<Self> {
        let engine = PlaybackEngine::new(config)?;
        let controller = AudioController::new(engine, api, event_tx, config.volume);

        Ok(Self::with_controller(Box::new(controller), config))
    }

    pub fn with_controller(controller: Box<dyn PlaybackControl>, config: &AudioConfig) -> Self {
        Self {
            controller,
            queue: QueueManager::new(),
            volume_step: config.volume_step,
        }
    }

    pub fn load_results(&mut self, results: &[SearchResult]) {
        self.queue.rebuild(results);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub async fn play(&mut self, item: &SearchResult) {
        match self.queue.select(item) {
            Some(track) => self.start(track).await,
            None => debug!(track_id = item.track_id, "No preview, ignoring play"),
        }
    }

    pub fn add_to_queue(&mut self, item: &SearchResult) -> bool {
        self.queue.add(item)
    }

    pub async fn play_next(&mut self) {
        if let Some(track) = self.queue.next() {
            self.start(track).await;
        }
    }

    pub async fn play_previous(&mut self) {
        if let Some(track) = self.queue.previous() {
            self.start(track).await;
        }
    }

    async fn start(&mut self, track: CurrentTrack) {
        self.controller
            .handle_command(AudioCommand::PlayTrack(track))
            .await;
    }

    pub async fn play_pause(&mut self) {
        match self.controller.state() {
            PlaybackState::Playing(_) => self.controller.handle_command(AudioCommand::Pause).await,
            PlaybackState::Paused(_) => self.controller.handle_command(AudioCommand::Resume).await,
            PlaybackState::Stopped | PlaybackState::Error(_) => {
                if let Some(track) = self.queue.current_track().cloned() {
                    self.start(track).await;
                }
            }
            PlaybackState::Buffering(_) => {}
        }
    }

    pub async fn stop(&mut self) {
        self.controller.handle_command(AudioCommand::Stop).await;
    }

    pub async fn volume_up(&mut self) {
        let volume = self.controller.volume().saturating_add(self.volume_step);
        self.controller
            .handle_command(AudioCommand::SetVolume(volume.min(100)))
            .await;
    }

    pub async fn volume_down(&mut self) {
        let volume = self.controller.volume().saturating_sub(self.volume_step);
        self.controller
            .handle_command(AudioCommand::SetVolume(volume))
            .await;
    }

    pub fn toggle_mute(&mut self) {
        self.controller.toggle_mute();
    }

    pub fn current_track(&self) -> Option<&CurrentTrack> {
        self.queue.current_track()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.state().is_playing()
    }

    pub fn volume(&self) -> u8 {
        if self.controller.is_muted() {
            0
        } else {
            self.controller.volume()
        }
    }

    pub fn progress(&self) -> (u64, u64) {
        self.controller.progress()
    }

    pub fn queue(&self) -> &[SearchResult] {
        self.queue.queue()
    }

    pub fn upcoming(&self) -> &[SearchResult] {
        self.queue.upcoming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{
        Mutex,
        atomic::{AtomicBool, AtomicU8, Ordering},
    };

    /// Records commands instead of producing sound.
    #[derive(Default)]
    struct FakeControl {
        commands: Arc<Mutex<Vec<AudioCommand>>>,
        state: Mutex<Option<PlaybackState>>,
        volume: AtomicU8,
        muted: AtomicBool,
    }

    impl FakeControl {
        fn new() -> (Self, Arc<Mutex<Vec<AudioCommand>>>) {
            let fake = Self {
                volume: AtomicU8::new(50),
                ..Self::default()
            };
            let commands = fake.commands.clone();
            (fake, commands)
        }
    }

    #[async_trait]
    impl PlaybackControl for FakeControl {
        async fn handle_command(&self, cmd: AudioCommand) {
            let next = match &cmd {
                AudioCommand::PlayTrack(t) => Some(PlaybackState::Playing(t.clone())),
                AudioCommand::Pause => self.state().track().cloned().map(PlaybackState::Paused),
                AudioCommand::Resume => self.state().track().cloned().map(PlaybackState::Playing),
                AudioCommand::Stop => Some(PlaybackState::Stopped),
                AudioCommand::SetVolume(v) => {
                    self.volume.store(*v, Ordering::Relaxed);
                    None
                }
            };
            if let Some(next) = next {
                *self.state.lock().unwrap() = Some(next);
            }
            self.commands.lock().unwrap().push(cmd);
        }

        fn state(&self) -> PlaybackState {
            self.state
                .lock()
                .unwrap()
                .clone()
                .unwrap_or(PlaybackState::Stopped)
        }

        fn volume(&self) -> u8 {
            self.volume.load(Ordering::Relaxed)
        }

        fn is_muted(&self) -> bool {
            self.muted.load(Ordering::Relaxed)
        }

        fn toggle_mute(&self) {
            self.muted.fetch_xor(true, Ordering::Relaxed);
        }

        fn progress(&self) -> (u64, u64) {
            (0, 30_000)
        }
    }

    fn playable(id: u64) -> SearchResult {
        let mut item = SearchResult::new(id);
        item.preview_url = Some(format!("https://audio/{id}.m4a"));
        item
    }

    fn played_urls(commands: &Mutex<Vec<AudioCommand>>) -> Vec<String> {
        commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                AudioCommand::PlayTrack(t) => Some(t.url.clone()),
                _ => None,
            })
            .collect()
    }

    fn system() -> (AudioSystem, Arc<Mutex<Vec<AudioCommand>>>) {
        let (fake, commands) = FakeControl::new();
        let system = AudioSystem::with_controller(Box::new(fake), &AudioConfig::default());
        (system, commands)
    }

    #[tokio::test]
    async fn play_hands_preview_to_backend() {
        let (mut system, commands) = system();

        system.play(&SearchResult::new(1)).await;
        assert!(played_urls(&commands).is_empty());
        assert!(system.current_track().is_none());

        system.play(&playable(2)).await;
        assert_eq!(played_urls(&commands), vec!["https://audio/2.m4a"]);
        assert!(system.is_playing());
    }

    #[tokio::test]
    async fn next_at_queue_end_does_not_restart_playback() {
        let (mut system, commands) = system();
        system.load_results(&[playable(1), playable(2)]);

        system.play(&playable(2)).await;
        system.play_next().await;
        assert_eq!(played_urls(&commands), vec!["https://audio/2.m4a"]);

        system.play_previous().await;
        assert_eq!(
            played_urls(&commands),
            vec!["https://audio/2.m4a", "https://audio/1.m4a"]
        );
    }

    #[tokio::test]
    async fn play_pause_toggles_and_restarts_stopped_track() {
        let (mut system, commands) = system();
        system.play_pause().await;
        assert!(commands.lock().unwrap().is_empty());

        system.play(&playable(1)).await;
        system.play_pause().await;
        assert!(matches!(system.playback_state(), PlaybackState::Paused(_)));
        system.play_pause().await;
        assert!(system.is_playing());

        system.stop().await;
        system.play_pause().await;
        assert_eq!(played_urls(&commands).len(), 2);
    }

    #[tokio::test]
    async fn volume_steps_are_clamped() {
        let (mut system, _) = system();
        for _ in 0..20 {
            system.volume_up().await;
        }
        assert_eq!(system.volume(), 100);

        system.toggle_mute();
        assert_eq!(system.volume(), 0);
        system.toggle_mute();

        for _ in 0..30 {
            system.volume_down().await;
        }
        assert_eq!(system.volume(), 0);
    }
}
