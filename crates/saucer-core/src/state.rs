//! Scene snapshot: the complete visible state handed to the driver each tick.

use serde::{Deserialize, Serialize};

use crate::enums::CowPhase;
use crate::types::{Footprint, Position, SimTime, Velocity};

/// Complete scene state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub saucer: SaucerView,
    pub cows: Vec<CowView>,
    pub live_cows: usize,
    /// Cows purged after abduction since the simulation started.
    pub abducted_total: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaucerView {
    pub position: Position,
    pub velocity: Velocity,
    pub beam_active: bool,
    /// Present only while the beam is on.
    pub footprint: Option<Footprint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CowView {
    pub position: Position,
    pub direction: i32,
    pub walk_phase: u8,
    pub phase: CowPhase,
    pub pending_removal: bool,
}
