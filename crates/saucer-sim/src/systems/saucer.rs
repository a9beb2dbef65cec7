//! Saucer controller: drift, hover, command handling, beam footprint, lights.

use hecs::World;

use saucer_core::commands::InputCommand;
use saucer_core::components::{Saucer, SaucerLights, TractorBeam};
use saucer_core::constants::{LIGHT_MAX, LIGHT_RESET, LIGHT_STEP};
use saucer_core::types::{Footprint, Position, Velocity};

use crate::random::RandomSource;

/// Straight-line drift: position += velocity.
pub fn run(world: &mut World) {
    for (_entity, (_saucer, pos, vel)) in world.query_mut::<(&Saucer, &mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Cosmetic wobble: independent uniform jitter in `[-amplitude, amplitude]` on each axis.
/// An amplitude of zero draws nothing from `rng`.
pub fn hover(world: &mut World, rng: &mut dyn RandomSource, amplitude: f64) {
    if amplitude <= 0.0 {
        return;
    }
    for (_entity, (_saucer, pos)) in world.query_mut::<(&Saucer, &mut Position)>() {
        pos.x += rng.uniform(-amplitude, amplitude);
        pos.y += rng.uniform(-amplitude, amplitude);
    }
}

/// Step every rim light one notch brighter, dropping back to `LIGHT_RESET` past full.
pub fn cycle_lights(world: &mut World) {
    for (_entity, (_saucer, lights)) in world.query_mut::<(&Saucer, &mut SaucerLights)>() {
        for level in lights.levels.iter_mut() {
            *level += LIGHT_STEP;
            if *level > LIGHT_MAX {
                *level = LIGHT_RESET;
            }
        }
    }
}

/// Apply a player command.
///
/// Directional commands switch the beam off and set velocity along one axis,
/// zeroing the other. The toggle stops the saucer and flips the beam.
pub fn apply_command(world: &mut World, command: InputCommand, speed: f64) {
    match command.heading() {
        Some((dx, dy)) => {
            turn_off_beam(world);
            set_velocity(world, Velocity::new(dx * speed, dy * speed));
        }
        None => {
            set_velocity(world, Velocity::ZERO);
            for (_entity, (_saucer, beam)) in world.query_mut::<(&Saucer, &mut TractorBeam)>() {
                beam.active = !beam.active;
            }
        }
    }
}

pub fn set_velocity(world: &mut World, velocity: Velocity) {
    for (_entity, (_saucer, vel)) in world.query_mut::<(&Saucer, &mut Velocity)>() {
        *vel = velocity;
    }
}

pub fn turn_on_beam(world: &mut World) {
    set_beam(world, true);
}

pub fn turn_off_beam(world: &mut World) {
    set_beam(world, false);
}

fn set_beam(world: &mut World, active: bool) {
    for (_entity, (_saucer, beam)) in world.query_mut::<(&Saucer, &mut TractorBeam)>() {
        beam.active = active;
    }
}

/// Beam footprint centered on the saucer. Only meaningful while the beam is on;
/// use [`active_beam`] when that has not been checked.
pub fn beam_footprint(position: &Position, beam: &TractorBeam) -> Footprint {
    Footprint::centered(position.x, beam.width)
}

/// Saucer position and footprint, or `None` while the beam is off.
pub fn active_beam(world: &World) -> Option<(Position, Footprint)> {
    let (position, _velocity, beam) = state(world)?;
    beam.active.then(|| (position, beam_footprint(&position, &beam)))
}

/// Current saucer position, velocity and beam.
pub fn state(world: &World) -> Option<(Position, Velocity, TractorBeam)> {
    world
        .query::<(&Saucer, &Position, &Velocity, &TractorBeam)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, beam))| (*pos, *vel, *beam))
}
