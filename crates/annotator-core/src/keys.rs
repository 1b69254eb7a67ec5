//! Keyboard bindings shared by the editor and the viewer.

use crate::navigation::GameNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Retreat,
    Advance,
    JumpToStart,
    JumpToEnd,
}

impl Command {
    /// Map a browser key name (or a terminal alias) to a navigation command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "ArrowLeft" | "left" | "h" => Some(Command::Retreat),
            "ArrowRight" | "right" | "l" => Some(Command::Advance),
            "ArrowUp" | "up" | "k" => Some(Command::JumpToStart),
            "ArrowDown" | "down" | "j" => Some(Command::JumpToEnd),
            _ => None,
        }
    }
}

impl GameNavigator {
    /// Run one navigation command. Returns whether the pointer moved.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Retreat => self.retreat(),
            Command::Advance => self.advance(),
            Command::JumpToStart => self.jump_to_start(),
            Command::JumpToEnd => self.jump_to_end(),
        }
    }
}
