use async_trait::async_trait;

use super::{commands::AudioCommand, state::PlaybackState};

/// Output side of the player. The queue logic drives any backend through
/// commands and only reads back state.
#[async_trait]
pub trait PlaybackControl: Send + Sync {
    async fn handle_command(&self, cmd: AudioCommand);
    fn state(&self) -> PlaybackState;
    fn volume(&self) -> u8;
    fn is_muted(&self) -> bool;
    fn toggle_mute(&self);
    /// `(position_ms, duration_ms)` of the loaded preview.
    fn progress(&self) -> (u64, u64);
}
