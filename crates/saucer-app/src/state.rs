//! State shared between the input thread and the game loop thread.

use std::sync::{Arc, Mutex};

use saucer_core::commands::InputCommand;
use saucer_core::state::SceneSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A saucer command to forward to the simulation engine.
    Input(InputCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

impl LoopCommand {
    /// Map a line typed on the console. `quit` shuts down; anything unbound is `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let key = line.trim_end_matches(['\r', '\n']);
        if key.trim() == "quit" {
            return Some(Self::Shutdown);
        }
        InputCommand::from_key(key).map(Self::Input)
    }
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<SceneSnapshot>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_lines() {
        assert!(matches!(
            LoopCommand::from_line("left\n"),
            Some(LoopCommand::Input(InputCommand::MoveLeft))
        ));
        assert!(matches!(
            LoopCommand::from_line(" \n"),
            Some(LoopCommand::Input(InputCommand::ToggleBeam))
        ));
        assert!(matches!(
            LoopCommand::from_line("quit"),
            Some(LoopCommand::Shutdown)
        ));
        assert!(LoopCommand::from_line("jump").is_none());
        assert!(LoopCommand::from_line("").is_none());
    }

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = SharedSnapshot::default();
        assert!(shared.lock().unwrap().is_none());
    }
}
