//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Observable movement state of a cow. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CowPhase {
    /// On the ground line, walking.
    #[default]
    Grounded,
    /// Above the ground line and descending.
    Falling,
    /// Held by the beam this tick.
    Levitated,
}
