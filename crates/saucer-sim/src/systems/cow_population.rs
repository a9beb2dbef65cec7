//! Herd system: keeps the population topped up, moves every cow one tick,
//! and purges abducted cows.

use hecs::{Entity, World};
use log::debug;

use saucer_core::components::Cow;
use saucer_core::config::WorldConfig;
use saucer_core::constants::{SPAWN_INSET, WALK_CYCLE};
use saucer_core::types::{Footprint, Position};

use crate::random::RandomSource;
use crate::world_setup;

/// Run one population update. Returns the number of cows purged.
///
/// Order is fixed: spawn check, per-cow transition, purge. A replacement cow
/// spawned here also takes its first step this tick.
pub fn run(
    world: &mut World,
    rng: &mut dyn RandomSource,
    config: &WorldConfig,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    if live_count(world) < config.target_cows {
        let position = Position::new(
            config.width + config.wrap_margin - SPAWN_INSET,
            config.ground_y,
        );
        let entity = world_setup::spawn_cow(world, rng, position);
        debug!("spawned replacement cow {entity:?} at x={}", position.x);
    }

    for (_entity, (cow, pos)) in world.query_mut::<(&mut Cow, &mut Position)>() {
        step_cow(cow, pos, config);
    }

    purge(world, despawn_buffer)
}

/// Advance a single cow by one tick.
///
/// A frozen cow only has its flag cleared. Otherwise a cow above the ground
/// falls (never below the ground line) and a grounded cow walks and wraps.
pub fn step_cow(cow: &mut Cow, pos: &mut Position, config: &WorldConfig) {
    if cow.frozen {
        cow.frozen = false;
        return;
    }

    if pos.y > config.ground_y {
        pos.y = (pos.y - config.fall_rate).max(config.ground_y);
    } else {
        pos.y = config.ground_y;
        walk(cow, pos);
        wrap(pos, config);
    }
}

fn walk(cow: &mut Cow, pos: &mut Position) {
    pos.x += cow.direction as f64;
    cow.walk_phase = (cow.walk_phase + 1) % WALK_CYCLE;
}

/// Teleport a cow that walked past either wrap bound to the opposite one.
fn wrap(pos: &mut Position, config: &WorldConfig) {
    let right = config.width + config.wrap_margin;
    let left = -config.wrap_margin;
    if pos.x > right {
        pos.x = left;
    } else if pos.x < left {
        pos.x = right;
    }
}

/// Despawn every cow flagged for removal. Returns how many went.
fn purge(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, cow) in world.query_mut::<&Cow>() {
        if cow.pending_removal {
            despawn_buffer.push(entity);
        }
    }

    let purged = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        debug!("purged abducted cow {entity:?}");
        let _ = world.despawn(entity);
    }
    purged
}

/// Number of live cows.
pub fn live_count(world: &World) -> usize {
    world.query::<&Cow>().iter().count()
}

/// All live cows whose x lies inside `range` (bounds included), in world
/// iteration order.
pub fn query(world: &World, range: Footprint) -> Vec<Entity> {
    world
        .query::<(&Cow, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| range.contains(pos.x))
        .map(|(entity, _)| entity)
        .collect()
}
