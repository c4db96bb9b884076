use crate::model::CurrentTrack;

#[derive(Debug, Clone)]
pub enum AudioCommand {
    PlayTrack(CurrentTrack),
    Pause,
    Resume,
    Stop,
    SetVolume(u8),
}
