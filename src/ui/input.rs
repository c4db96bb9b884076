use crate::ui::{
    message::{AppMessage, Direction},
    state::{AppState, Focus},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Some(AppMessage::Quit);
        }

        match state.ui.focus {
            Focus::SearchInput => Self::handle_search_key(key, state),
            Focus::Results | Focus::Queue => Self::handle_browse_key(key),
        }
    }

    fn handle_search_key(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppMessage::ClearInput),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                Some(AppMessage::InputChar(c))
            }
            (KeyCode::Backspace, _) => Some(AppMessage::InputBackspace),
            (KeyCode::Enter, _) => Some(AppMessage::SubmitSearch),
            (KeyCode::Esc, _) if state.has_error() => Some(AppMessage::DismissError),
            (KeyCode::Esc, _) | (KeyCode::Down, _) => Some(AppMessage::FocusResults),
            (KeyCode::Tab, _) => Some(AppMessage::CycleFocus),
            _ => None,
        }
    }

    fn handle_browse_key(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => Some(AppMessage::FocusSearch),
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Tab => Some(AppMessage::CycleFocus),
            KeyCode::Esc => Some(AppMessage::DismissError),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::Move(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(AppMessage::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(AppMessage::Move(Direction::Right)),
            KeyCode::Enter => Some(AppMessage::PlaySelected),
            KeyCode::Char('a') => Some(AppMessage::AddSelectedToQueue),
            KeyCode::Char('n') => Some(AppMessage::NextTrack),
            KeyCode::Char('p') => Some(AppMessage::PreviousTrack),
            KeyCode::Char(' ') => Some(AppMessage::TogglePlayPause),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(AppMessage::VolumeUp),
            KeyCode::Char('-') => Some(AppMessage::VolumeDown),
            KeyCode::Char('m') => Some(AppMessage::ToggleMute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state(focus: Focus) -> AppState {
        let mut state = AppState::default();
        state.ui.focus = focus;
        state
    }

    #[test]
    fn typing_goes_to_the_search_box() {
        let s = state(Focus::SearchInput);
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), &s),
            Some(AppMessage::InputChar('q'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter), &s),
            Some(AppMessage::SubmitSearch)
        );
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), &s),
            Some(AppMessage::ClearInput)
        );
    }

    #[test]
    fn escape_dismisses_error_before_leaving_input() {
        let mut s = state(Focus::SearchInput);
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &s),
            Some(AppMessage::FocusResults)
        );

        s.search.submit("  ").unwrap_err();
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &s),
            Some(AppMessage::DismissError)
        );
    }

    #[test]
    fn browse_keys_drive_playback() {
        let s = state(Focus::Results);
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('n')), &s),
            Some(AppMessage::NextTrack)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('p')), &s),
            Some(AppMessage::PreviousTrack)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('a')), &s),
            Some(AppMessage::AddSelectedToQueue)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('j')), &s),
            Some(AppMessage::Move(Direction::Down))
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        for focus in [Focus::SearchInput, Focus::Results, Focus::Queue] {
            assert_eq!(
                InputHandler::handle_key(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    &state(focus)
                ),
                Some(AppMessage::Quit)
            );
        }
    }
}
