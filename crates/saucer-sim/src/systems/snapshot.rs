//! Snapshot system: queries the world and builds a complete SceneSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use saucer_core::components::Cow;
use saucer_core::config::WorldConfig;
use saucer_core::enums::CowPhase;
use saucer_core::state::*;
use saucer_core::types::{Position, SimTime};

use crate::systems::saucer;

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    config: &WorldConfig,
    abducted_total: u32,
) -> SceneSnapshot {
    let cows = build_cows(world, config);

    SceneSnapshot {
        time: *time,
        saucer: build_saucer(world),
        live_cows: cows.len(),
        cows,
        abducted_total,
    }
}

/// Classify a cow's movement state.
pub fn cow_phase(cow: &Cow, pos: &Position, config: &WorldConfig) -> CowPhase {
    if cow.frozen {
        CowPhase::Levitated
    } else if pos.y > config.ground_y {
        CowPhase::Falling
    } else {
        CowPhase::Grounded
    }
}

/// Build CowView list, ordered by entity so snapshots compare stably.
fn build_cows(world: &World, config: &WorldConfig) -> Vec<CowView> {
    let mut cows: Vec<(u64, CowView)> = world
        .query::<(&Cow, &Position)>()
        .iter()
        .map(|(entity, (cow, pos))| {
            (
                entity.to_bits().get(),
                CowView {
                    position: *pos,
                    direction: cow.direction,
                    walk_phase: cow.walk_phase,
                    phase: cow_phase(cow, pos, config),
                    pending_removal: cow.pending_removal,
                },
            )
        })
        .collect();

    cows.sort_by_key(|(id, _)| *id);
    cows.into_iter().map(|(_, view)| view).collect()
}

/// Build SaucerView. The footprint is only reported while the beam is on.
pub fn build_saucer(world: &World) -> SaucerView {
    saucer::state(world)
        .map(|(position, velocity, beam)| SaucerView {
            position,
            velocity,
            beam_active: beam.active,
            footprint: beam
                .active
                .then(|| saucer::beam_footprint(&position, &beam)),
        })
        .unwrap_or_default()
}
