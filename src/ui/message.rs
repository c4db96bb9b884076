#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Search box
    SubmitSearch,
    InputChar(char),
    InputBackspace,
    ClearInput,
    Paste(String),
    DismissError,

    // Navigation
    FocusSearch,
    FocusResults,
    CycleFocus,
    Move(Direction),

    // Playback
    PlaySelected,
    AddSelectedToQueue,
    NextTrack,
    PreviousTrack,
    TogglePlayPause,
    VolumeUp,
    VolumeDown,
    ToggleMute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
