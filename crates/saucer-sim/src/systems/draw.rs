//! Draw system: maps entity state to shape records.
//!
//! Read-only. Entity state is copied out of the world up front, then expanded
//! into shapes lazily as the caller pulls from the iterator. Draw order is
//! background, cows, then the saucer (beam underneath the hull).

use glam::DVec2;
use hecs::World;

use saucer_core::components::{Cow, Saucer, SaucerLights, TractorBeam};
use saucer_core::config::WorldConfig;
use saucer_core::constants::*;
use saucer_core::shapes::{Color, Shape};
use saucer_core::types::Position;

/// Everything needed to draw the saucer.
#[derive(Debug, Clone, Copy)]
struct SaucerState {
    position: Position,
    beam: TractorBeam,
    lights: SaucerLights,
}

/// All shapes for the current frame.
pub fn shapes(world: &World, config: &WorldConfig) -> impl Iterator<Item = Shape> {
    let cows: Vec<(Cow, Position)> = world
        .query::<(&Cow, &Position)>()
        .iter()
        .map(|(_, (cow, pos))| (*cow, *pos))
        .collect();

    let saucer = world
        .query::<(&Saucer, &Position, &TractorBeam, &SaucerLights)>()
        .iter()
        .next()
        .map(|(_, (_, position, beam, lights))| SaucerState {
            position: *position,
            beam: *beam,
            lights: *lights,
        });

    let ground_y = config.ground_y;

    background(config)
        .into_iter()
        .chain(cows.into_iter().flat_map(|(cow, pos)| cow_shapes(&cow, &pos)))
        .chain(saucer.into_iter().flat_map(move |s| saucer_shapes(&s, ground_y)))
}

/// Ground strip below the ground line, sky above it.
pub fn background(config: &WorldConfig) -> [Shape; 2] {
    [
        Shape::rectangle(DVec2::ZERO, config.width, config.ground_y).color(Color::GRASS),
        Shape::rectangle(DVec2::new(0.0, config.ground_y), config.width, config.height)
            .color(Color::NIGHT_SKY),
    ]
}

/// Body, two legs, head, two markings. Legs spread on the back half of the
/// walk cycle; the head sits on the side the cow faces.
pub fn cow_shapes(cow: &Cow, pos: &Position) -> [Shape; 6] {
    let (x, y) = (pos.x, pos.y);

    let (left_leg, right_leg) = if cow.walk_phase > LEGS_SPREAD_AFTER {
        (x, x + 8.0)
    } else {
        (x + 2.0, x + 6.0)
    };
    let head_x = if cow.direction > 0 {
        x + COW_BODY_WIDTH
    } else {
        x - COW_HEAD_SIZE
    };

    let hide = |origin: DVec2, w: f64, h: f64| Shape::rectangle(origin, w, h).color(Color::COW_HIDE);
    [
        hide(DVec2::new(x, y + 5.0), COW_BODY_WIDTH, COW_BODY_HEIGHT),
        hide(DVec2::new(left_leg, y), COW_LEG_WIDTH, COW_LEG_HEIGHT),
        hide(DVec2::new(right_leg, y), COW_LEG_WIDTH, COW_LEG_HEIGHT),
        hide(DVec2::new(head_x, y + 8.0), COW_HEAD_SIZE, COW_HEAD_SIZE),
        Shape::rectangle(DVec2::new(x + 5.0, y + 6.0), 3.0, 3.0).color(Color::BLACK),
        Shape::rectangle(DVec2::new(x + 2.0, y + 7.0), 1.0, 1.0).color(Color::BLACK),
    ]
}

fn saucer_shapes(saucer: &SaucerState, ground_y: f64) -> Vec<Shape> {
    let Position { x, y } = saucer.position;
    let half_body = SAUCER_BODY_WIDTH / 2.0;
    let hull_rise = SAUCER_BODY_HEIGHT * SAUCER_HULL_SCALE;

    let mut shapes = Vec::with_capacity(4 + LIGHT_COUNT);

    if saucer.beam.active {
        let top = y + hull_rise * 0.5;
        let half_beam = saucer.beam.width / 2.0;
        shapes.push(
            Shape::polygon(vec![
                DVec2::new(x - BEAM_TOP_HALF_WIDTH, top),
                DVec2::new(x + BEAM_TOP_HALF_WIDTH, top),
                DVec2::new(x + half_beam, ground_y),
                DVec2::new(x - half_beam, ground_y),
            ])
            .color(Color::BEAM),
        );
    }

    shapes.push(
        Shape::wedge(
            DVec2::new(x, y),
            SAUCER_BODY_HEIGHT * SAUCER_WINDOW_SCALE,
            0.0,
            180.0,
        )
        .color(Color::WINDOW),
    );

    let hull = |rise: f64| {
        Shape::cubic_hull(
            DVec2::new(x - half_body, y),
            DVec2::new(x - half_body / 2.0, y + rise),
            DVec2::new(x + half_body / 2.0, y + rise),
            DVec2::new(x + half_body, y),
        )
    };
    shapes.push(hull(-hull_rise).color(Color::HULL_DARK));
    shapes.push(hull(hull_rise).color(Color::HULL_LIGHT));

    let spacing = SAUCER_BODY_WIDTH / (LIGHT_COUNT - 1) as f64;
    for (i, &level) in saucer.lights.levels.iter().enumerate() {
        let intensity = level as f32 / LIGHT_MAX as f32;
        shapes.push(
            Shape::circle(DVec2::new(x - half_body + i as f64 * spacing, y), LIGHT_RADIUS)
                .color(Color::rgb(intensity, intensity, 0.0)),
        );
    }

    shapes
}
