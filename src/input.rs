use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Down,
    Up,
    SwitchView,
    Refresh,
    OpenInBrowser,
    /// Index into Category::ALL.
    Category(usize),
    StartSearch,
    SearchChar(char),
    Backspace,
    SubmitSearch,
    CancelSearch,
    ClearSearch,
    None,
}

pub fn poll_action(input_mode: bool) -> Result<Action> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(KeyEvent { code, modifiers, .. }) => {
            if input_mode {
                return Ok(match (code, modifiers) {
                    (KeyCode::Esc, _) => Action::CancelSearch,
                    (KeyCode::Enter, _) => Action::SubmitSearch,
                    (KeyCode::Backspace, _) => Action::Backspace,
                    (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearSearch,
                    (KeyCode::Char(c), _) => Action::SearchChar(c),
                    _ => Action::None,
                });
            }

            Ok(match (code, modifiers) {
                (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Action::Quit,
                (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Action::Down,
                (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Action::Up,
                (KeyCode::Tab, _) => Action::SwitchView,
                (KeyCode::Char('r'), _) => Action::Refresh,
                (KeyCode::Char('o'), _) | (KeyCode::Enter, _) => Action::OpenInBrowser,
                (KeyCode::Char('/'), _) => Action::StartSearch,
                (KeyCode::Char(c @ '1'..='5'), _) => Action::Category(c as usize - '1' as usize),
                _ => Action::None,
            })
        }
        _ => Ok(Action::None),
    }
}
