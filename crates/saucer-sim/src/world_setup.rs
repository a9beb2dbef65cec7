//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the saucer and cow entities with their component bundles.

use hecs::{Entity, World};

use saucer_core::components::*;
use saucer_core::config::WorldConfig;
use saucer_core::constants::{COW_MAX_STRIDE, COW_MIN_STRIDE};
use saucer_core::types::{Position, Velocity};

use crate::random::RandomSource;

/// Spawn the saucer at its start position, stationary, beam off.
pub fn spawn_saucer(world: &mut World, config: &WorldConfig) -> Entity {
    let (x, y) = config.saucer_start;
    world.spawn((
        Saucer,
        Position::new(x, y),
        Velocity::ZERO,
        TractorBeam {
            active: false,
            width: config.beam_width,
        },
        SaucerLights::default(),
    ))
}

/// Seed the field with `target_cows` grounded cows at random x in `0..=width`.
pub fn seed_herd(world: &mut World, rng: &mut dyn RandomSource, config: &WorldConfig) {
    for _ in 0..config.target_cows {
        let x = rng.int_inclusive(0, config.width as i32) as f64;
        spawn_cow(world, rng, Position::new(x, config.ground_y));
    }
}

/// Spawn a cow with a random stride and facing.
pub fn spawn_cow(world: &mut World, rng: &mut dyn RandomSource, position: Position) -> Entity {
    let direction = random_direction(rng);
    spawn_cow_facing(world, position, direction)
}

/// Spawn a cow with a fixed signed stride.
pub fn spawn_cow_facing(world: &mut World, position: Position, direction: i32) -> Entity {
    world.spawn((
        Cow {
            direction,
            walk_phase: 0,
            frozen: false,
            pending_removal: false,
        },
        position,
    ))
}

/// Stride magnitude in `COW_MIN_STRIDE..=COW_MAX_STRIDE`, negated on a coin flip.
fn random_direction(rng: &mut dyn RandomSource) -> i32 {
    let stride = rng.int_inclusive(COW_MIN_STRIDE, COW_MAX_STRIDE);
    if rng.coin() {
        -stride
    } else {
        stride
    }
}
