//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::{LIGHT_COUNT, LIGHT_MAX, LIGHT_STEP};

/// A cow on the field. Paired with a `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cow {
    /// Signed stride per tick. Magnitude 2..=4, sign is facing. Never changes after creation.
    pub direction: i32,
    /// Leg-pose counter in 0..WALK_CYCLE.
    pub walk_phase: u8,
    /// Grabbed by the beam; the next population update skips this cow and clears the flag.
    pub frozen: bool,
    /// Lifted past the cutoff; purged at the end of the next population update.
    pub pending_removal: bool,
}

/// Marks the flying saucer entity. Paired with `Position`, `Velocity`,
/// `TractorBeam` and `SaucerLights`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Saucer;

/// The saucer's tractor beam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TractorBeam {
    pub active: bool,
    /// Horizontal span at ground level, centered on the saucer.
    pub width: f64,
}

/// Brightness of the rim lights, 0..=255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaucerLights {
    pub levels: [u16; LIGHT_COUNT],
}

impl Default for SaucerLights {
    fn default() -> Self {
        let mut levels = [0; LIGHT_COUNT];
        for (i, level) in levels.iter_mut().enumerate() {
            *level = (i as u16 * LIGHT_STEP * 2) % LIGHT_MAX;
        }
        Self { levels }
    }
}
