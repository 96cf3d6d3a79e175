use crate::direction::Direction;
use macroquad::input::{KeyCode, is_key_pressed};

/// Everything the player can ask for, from the keyboard or the buttons
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    DismissToast,
}

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Key-down events seen this frame, in a fixed order so the last arrow
/// pressed within one frame is deterministic.
pub fn poll_keyboard() -> Vec<Command> {
    let mut commands: Vec<Command> = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right]
        .into_iter()
        .filter(|key| is_key_pressed(*key))
        .filter_map(direction_for_key)
        .map(Command::Turn)
        .collect();
    if is_key_pressed(KeyCode::Escape) {
        commands.push(Command::DismissToast);
    }
    commands
}
