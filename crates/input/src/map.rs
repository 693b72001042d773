//! Key mapping from terminal events to commands.
//!
//! The letter bindings are the original serial console codes ('a'/'f' steer,
//! 'r' rotates, 'n' restarts, 'd' halts); the arrow keys are host-side
//! conveniences that decode to the same closed command set. Unrecognized keys
//! map to `None` and are dropped at this boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use matrix_tetris_types::Command;

/// Map a key event to a game command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('f') | KeyCode::Char('F') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::RotateCw),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::RotateCcw),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Restart),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Stop),
        _ => None,
    }
}

/// Whether the key should quit the host program entirely.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
