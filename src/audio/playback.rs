use crate::audio::{config::AudioConfig, error::AudioError, util::open_output};
use rodio::{OutputStream, Sink, Source};
use std::{sync::Arc, time::Duration};

pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new(config: &AudioConfig) -> Result<Self, AudioError> {
        let (stream, sink) = open_output(config)?;

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    pub fn play_source<S>(&self, source: S)
    where
        S: Source + Send + 'static,
    {
        self.sink.append(source);
        self.sink.play();
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn stop(&self) {
        self.sink.stop();
    }

    pub fn is_empty(&self) -> bool {
        self.sink.empty()
    }

    pub fn get_pos(&self) -> Duration {
        self.sink.get_pos()
    }
}
