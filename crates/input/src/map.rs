//! Key mapping from terminal events to engine commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to engine commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::West))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::East))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Move(Direction::North))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::South))
        }

        // Interact without moving; doubles as restart once killed.
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::GhostInteract),

        // Sound and level controls
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleSound),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NextLevel),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::PreviousLevel),

        // Debug keys, kept from the original
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::KillSelf),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::RespawnAtLastPosition),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ResetTimer),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
