//! Abduction rule: cows inside the beam footprint are snapped under the
//! saucer, lifted, and flagged for removal once above the saucer.

use hecs::World;
use log::debug;

use saucer_core::components::Cow;
use saucer_core::types::{Footprint, Position};

use crate::systems::cow_population;

/// Grab every cow currently inside `footprint`. Returns how many were grabbed.
///
/// Each grabbed cow moves to `anchor_x`, rises by `lift_rate` and is frozen,
/// which makes the next population update skip it. A cow ending above
/// `cutoff_y` is flagged for removal. Already-flagged cows are processed the
/// same way.
pub fn run(
    world: &mut World,
    footprint: Footprint,
    anchor_x: f64,
    cutoff_y: f64,
    lift_rate: f64,
) -> usize {
    let selected = cow_population::query(world, footprint);

    for &entity in &selected {
        let Ok((cow, pos)) = world.query_one_mut::<(&mut Cow, &mut Position)>(entity) else {
            continue;
        };
        pos.x = anchor_x;
        pos.y += lift_rate;
        cow.frozen = true;

        if pos.y > cutoff_y && !cow.pending_removal {
            cow.pending_removal = true;
            debug!("cow {entity:?} lifted past y={cutoff_y}, flagged for removal");
        }
    }

    selected.len()
}
