use crate::{
    model::{CurrentTrack, SearchResult},
    search::SearchError,
};

/// Results of background work, delivered to the event loop.
#[derive(Debug, Clone)]
pub enum Event {
    SearchFinished(Result<Vec<SearchResult>, SearchError>),
    TrackStarted(CurrentTrack),
    TrackEnded,
    PlaybackFailed(String),
}
