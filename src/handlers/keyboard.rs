use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Action;

/// Map a key press to the action it triggers, if any
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Key release/repeat events arrive on some platforms; only presses count
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (_, KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char(' ' | 'p'), _) => Some(Action::TogglePlayPause),
        (KeyCode::Char('s'), _) => Some(Action::Stop),
        (KeyCode::Char('k') | KeyCode::Up, _) => Some(Action::IncreaseFocus),
        (KeyCode::Char('j') | KeyCode::Down, _) => Some(Action::DecreaseFocus),
        (KeyCode::Char('l') | KeyCode::Right, _) => Some(Action::IncreaseBreak),
        (KeyCode::Char('h') | KeyCode::Left, _) => Some(Action::DecreaseBreak),
        (KeyCode::Char('?'), _) => Some(Action::ToggleHelp),
        _ => None,
    }
}
