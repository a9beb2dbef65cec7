//! Player input commands consumed by the simulation.
//!
//! Commands are queued and applied in arrival order at the next tick boundary.
//! Each one overwrites saucer state; nothing is buffered beyond that.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    /// Beam off, fly left at saucer speed.
    MoveLeft,
    /// Beam off, fly right at saucer speed.
    MoveRight,
    /// Beam off, climb at saucer speed.
    MoveUp,
    /// Beam off, descend at saucer speed.
    MoveDown,
    /// Stop, then flip the beam.
    ToggleBeam,
}

impl InputCommand {
    /// Map a key name to a command. Unrecognised keys map to `None` and are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "left" => Some(Self::MoveLeft),
            "right" => Some(Self::MoveRight),
            "up" => Some(Self::MoveUp),
            "down" => Some(Self::MoveDown),
            " " | "space" => Some(Self::ToggleBeam),
            _ => None,
        }
    }

    /// Unit direction for the movement commands, `None` for the beam toggle.
    pub fn heading(self) -> Option<(f64, f64)> {
        match self {
            Self::MoveLeft => Some((-1.0, 0.0)),
            Self::MoveRight => Some((1.0, 0.0)),
            Self::MoveUp => Some((0.0, 1.0)),
            Self::MoveDown => Some((0.0, -1.0)),
            Self::ToggleBeam => None,
        }
    }
}
