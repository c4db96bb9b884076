pub mod handler;

const EQUALIZER_FRAMES: [&str; 6] = ["·", "•", "●", "●", "•", "·"];

/// Pulsing marker for the card of the track that is playing. Paused tracks
/// get a steady dot.
pub fn get_active_track_icon(is_playing: bool, tick: usize) -> &'static str {
    if is_playing {
        EQUALIZER_FRAMES[(tick / 2) % EQUALIZER_FRAMES.len()]
    } else {
        "•"
    }
}
