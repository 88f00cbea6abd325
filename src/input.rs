//! Keyboard → intent translation.
//!
//! Key events never touch the game state directly: they become an
//! `InputIntent`, which the loop applies through `compute::apply_input`
//! before advancing the frame.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    MoveLeft,
    MoveRight,
    Fire,
    Retry,
    None,
}

pub fn intent_for_key(code: KeyCode) -> InputIntent {
    match code {
        KeyCode::Left => InputIntent::MoveLeft,
        KeyCode::Right => InputIntent::MoveRight,
        KeyCode::Char(' ') => InputIntent::Fire,
        KeyCode::Enter => InputIntent::Retry,
        _ => InputIntent::None,
    }
}

/// Only presses (and OS auto-repeat) count; releases are ignored so a
/// keyboard-enhanced terminal doesn't double every action.
pub fn intent_for_event(event: &Event) -> InputIntent {
    match event {
        Event::Key(KeyEvent { code, kind, .. })
            if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
        {
            intent_for_key(*code)
        }
        _ => InputIntent::None,
    }
}
