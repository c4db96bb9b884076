use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Default, Debug)]
pub struct TrackProgress {
    position_millis: AtomicU64,
    duration_millis: AtomicU64,
}

impl TrackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&self, position: Duration) {
        self.position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_duration(&self, duration: Duration) {
        self.duration_millis
            .store(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn get_progress(&self) -> (u64, u64) {
        (
            self.position_millis.load(Ordering::Relaxed),
            self.duration_millis.load(Ordering::Relaxed),
        )
    }

    /// Played fraction in `0.0..=1.0`, zero while the duration is unknown.
    pub fn ratio(&self) -> f64 {
        let (position, duration) = self.get_progress();
        if duration == 0 {
            0.0
        } else {
            (position as f64 / duration as f64).min(1.0)
        }
    }

    pub fn reset(&self) {
        self.set_position(Duration::ZERO);
        self.set_duration(Duration::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        let progress = TrackProgress::new();
        assert_eq!(progress.ratio(), 0.0);

        progress.set_duration(Duration::from_secs(30));
        progress.set_position(Duration::from_secs(15));
        assert_eq!(progress.ratio(), 0.5);

        progress.set_position(Duration::from_secs(31));
        assert_eq!(progress.ratio(), 1.0);

        progress.reset();
        assert_eq!(progress.get_progress(), (0, 0));
    }
}
