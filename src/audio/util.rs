use rodio::{OutputStream, OutputStreamBuilder, Sink, cpal::BufferSize};

use crate::audio::{config::AudioConfig, error::AudioError};

/// Opens the default output device, falling back to any working
/// configuration when the requested buffer size is rejected.
pub fn open_output(config: &AudioConfig) -> Result<(OutputStream, Sink), AudioError> {
    let stream = OutputStreamBuilder::from_default_device()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?
        .with_buffer_size(BufferSize::Fixed(config.buffer_size_frames))
        .open_stream_or_fallback()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?;
    let sink = Sink::connect_new(stream.mixer());

    Ok((stream, sink))
}
