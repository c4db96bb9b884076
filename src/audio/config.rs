#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub volume: u8,
    pub volume_step: u8,
    pub buffer_size_frames: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            volume_step: 5,
            buffer_size_frames: 4096,
        }
    }
}
