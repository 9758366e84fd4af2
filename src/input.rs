use crate::board::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Translates a key press into a game command. Keys without a meaning
/// (and key releases) yield `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
        _ => None,
    }
}
