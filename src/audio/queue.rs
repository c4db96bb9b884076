use tracing::debug;

use crate::model::{CurrentTrack, SearchResult};

/// Number of queue entries shown in the "up next" panel.
pub const UPCOMING_LEN: usize = 10;

/// Previewable tracks in playback order plus the selected track.
///
/// Navigation only reads the queue; it is rebuilt from each new result set and
/// grows through `add`.
#[derive(Debug, Clone, Default)]
pub struct QueueManager {
    queue: Vec<SearchResult>,
    current_track: Option<CurrentTrack>,
}

impl QueueManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, results: &[SearchResult]) {
        self.queue = results
            .iter()
            .filter(|item| item.has_preview())
            .cloned()
            .collect();
        debug!(len = self.queue.len(), "Queue rebuilt from results");
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Makes `item` the current track. Items without a preview are ignored.
    pub fn select(&mut self, item: &SearchResult) -> Option<CurrentTrack> {
        let track = CurrentTrack::from_result(item)?;
        self.current_track = Some(track.clone());
        Some(track)
    }

    /// Appends `item` unless it has no preview or is already queued.
    pub fn add(&mut self, item: &SearchResult) -> bool {
        if !item.has_preview() || self.contains(item.track_id) {
            return false;
        }
        self.queue.push(item.clone());
        true
    }

    pub fn next(&mut self) -> Option<CurrentTrack> {
        if self.queue.is_empty() {
            return None;
        }

        let target = match self.current_track {
            Some(_) => match self.current_index() {
                Some(index) => self.queue.get(index + 1)?,
                None => self.queue.first()?,
            },
            None => self.queue.first()?,
        }
        .clone();

        self.select(&target)
    }

    pub fn previous(&mut self) -> Option<CurrentTrack> {
        if self.current_track.is_none() || self.queue.is_empty() {
            return None;
        }

        let target = match self.current_index() {
            Some(0) => return None,
            Some(index) => self.queue.get(index - 1)?,
            None => self.queue.last()?,
        }
        .clone();

        self.select(&target)
    }

    pub fn current_index(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.queue
            .iter()
            .position(|item| item.track_id == current.track_id)
    }

    pub fn contains(&self, track_id: u64) -> bool {
        self.queue.iter().any(|item| item.track_id == track_id)
    }

    pub fn queue(&self) -> &[SearchResult] {
        &self.queue
    }

    pub fn upcoming(&self) -> &[SearchResult] {
        &self.queue[..self.queue.len().min(UPCOMING_LEN)]
    }

    pub fn current_track(&self) -> Option<&CurrentTrack> {
        self.current_track.as_ref()
    }
}
