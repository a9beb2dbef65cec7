use saucer_core::commands::InputCommand;
use saucer_core::config::WorldConfig;
use saucer_core::enums::CowPhase;
use saucer_core::types::Position;
use saucer_sim::{ScriptedRandom, SimulationEngine};

/// One-cow field, saucer parked at (500, 150) with a 40-wide beam: footprint [480, 520].
fn one_cow_field() -> SimulationEngine {
    let config = WorldConfig {
        target_cows: 1,
        ground_y: 100.0,
        beam_width: 40.0,
        saucer_start: (500.0, 150.0),
        hover_jitter: 0.0,
        ..Default::default()
    };
    SimulationEngine::empty_field(config, Box::new(ScriptedRandom::new()))
}

#[test]
fn cow_is_walked_lifted_flagged_and_purged() {
    let mut engine = one_cow_field();
    let cow = engine.place_cow(Position::new(500.0, 100.0), 3);

    // Beam off: a plain walking step.
    engine.tick();
    let (state, pos) = engine.cow(cow).unwrap();
    assert_eq!(pos, Position::new(503.0, 100.0));
    assert_eq!(state.walk_phase, 1);

    // Beam on: walks to 506 (still inside), then snapped under the saucer and lifted.
    engine.queue_command(InputCommand::ToggleBeam);
    let snap = engine.tick();
    let footprint = snap.saucer.footprint.unwrap();
    assert_eq!((footprint.min_x, footprint.max_x), (480.0, 520.0));

    let (state, pos) = engine.cow(cow).unwrap();
    assert_eq!(pos, Position::new(500.0, 104.0));
    assert!(state.frozen);
    assert!(!state.pending_removal, "104 is below the cutoff");
    assert_eq!(snap.cows[0].phase, CowPhase::Levitated);

    // Held in the beam: +4 per tick, no walking.
    for _ in 0..11 {
        engine.tick();
    }
    let (state, pos) = engine.cow(cow).unwrap();
    assert_eq!(pos, Position::new(500.0, 148.0));
    assert!(!state.pending_removal);
    assert_eq!(state.walk_phase, 2, "no walking while levitated");

    engine.tick();
    let (state, pos) = engine.cow(cow).unwrap();
    assert_eq!(pos.y, 152.0);
    assert!(state.pending_removal, "flagged as soon as it passes the saucer");
    assert_eq!(engine.live_cows(), 1, "still alive until the next purge");

    // Next population update purges it; the spawn check ran before the purge.
    let snap = engine.tick();
    assert!(engine.cow(cow).is_none());
    assert_eq!(snap.live_cows, 0);
    assert_eq!(snap.abducted_total, 1);

    // The tick after that brings in a replacement at the right edge. The
    // scripted stride of +2 carries it past the bound on its first step.
    let snap = engine.tick();
    assert_eq!(snap.live_cows, 1);
    assert_eq!(snap.cows[0].position, Position::new(-100.0, 100.0));
    assert_eq!(snap.cows[0].direction, 2);
}

#[test]
fn moving_the_saucer_drops_the_cow() {
    let mut engine = one_cow_field();
    let cow = engine.place_cow(Position::new(500.0, 100.0), 3);

    engine.queue_command(InputCommand::ToggleBeam);
    for _ in 0..5 {
        engine.tick();
    }
    let (_, pos) = engine.cow(cow).unwrap();
    assert_eq!(pos.y, 120.0);

    // Flying off cuts the beam. The cow hangs for one tick, then falls 8 per tick.
    engine.queue_command(InputCommand::MoveRight);
    let snap = engine.tick();
    assert!(!snap.saucer.beam_active);
    assert_eq!(snap.saucer.position.x, 505.0);
    assert_eq!(engine.cow(cow).unwrap().1.y, 120.0);

    engine.tick();
    assert_eq!(engine.cow(cow).unwrap().1.y, 112.0);
    engine.tick();
    assert_eq!(engine.cow(cow).unwrap().1.y, 104.0);
    engine.tick();
    assert_eq!(engine.cow(cow).unwrap().1, Position::new(500.0, 100.0));

    let snap = engine.tick();
    assert_eq!(snap.cows[0].phase, CowPhase::Grounded);
    assert_eq!(snap.cows[0].position.x, 503.0);
    assert_eq!(snap.live_cows, 1);
}
