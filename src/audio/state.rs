use crate::model::CurrentTrack;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    Stopped,
    Buffering(CurrentTrack),
    Playing(CurrentTrack),
    Paused(CurrentTrack),
    Error(String),
}

impl PlaybackState {
    pub fn track(&self) -> Option<&CurrentTrack> {
        match self {
            PlaybackState::Buffering(t) | PlaybackState::Playing(t) | PlaybackState::Paused(t) => {
                Some(t)
            }
            PlaybackState::Stopped | PlaybackState::Error(_) => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }
}
