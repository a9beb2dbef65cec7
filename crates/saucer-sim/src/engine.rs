//! Simulation engine: the orchestrator.
//!
//! `SimulationEngine` owns the hecs world, the random source and all sim
//! state, applies player commands, runs the systems in a fixed order and
//! produces `SceneSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, info, trace};

use saucer_core::commands::InputCommand;
use saucer_core::components::Cow;
use saucer_core::config::WorldConfig;
use saucer_core::shapes::{DrawSink, Shape};
use saucer_core::state::{SaucerView, SceneSnapshot};
use saucer_core::types::{Footprint, Position, SimTime, Velocity};

use crate::random::{RandomSource, SeededRandom};
use crate::systems;
use crate::world_setup;

pub use saucer_core::config::SimConfig;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: WorldConfig,
    rng: Box<dyn RandomSource>,
    command_queue: VecDeque<InputCommand>,
    despawn_buffer: Vec<Entity>,
    abducted_total: u32,
}

impl SimulationEngine {
    /// Create an engine with a seeded random source and a freshly seeded herd.
    pub fn new(config: SimConfig) -> Self {
        info!("starting simulation with seed {}", config.seed);
        Self::with_random(config.world, Box::new(SeededRandom::new(config.seed)))
    }

    /// Create an engine drawing from `rng`, with the herd seeded at target size.
    pub fn with_random(config: WorldConfig, rng: Box<dyn RandomSource>) -> Self {
        let mut engine = Self::empty_field(config, rng);
        world_setup::seed_herd(&mut engine.world, engine.rng.as_mut(), &engine.config);
        info!("field seeded with {} cows", engine.live_cows());
        engine
    }

    /// Create an engine with the saucer but no cows. The population rule
    /// starts spawning from the first tick unless cows are placed first.
    pub fn empty_field(config: WorldConfig, rng: Box<dyn RandomSource>) -> Self {
        let mut world = World::new();
        world_setup::spawn_saucer(&mut world, &config);
        Self {
            world,
            time: SimTime::default(),
            config,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            abducted_total: 0,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Queue the command bound to `key`. Unknown keys are dropped; returns
    /// whether anything was queued.
    pub fn queue_key(&mut self, key: &str) -> bool {
        match InputCommand::from_key(key) {
            Some(command) => {
                self.queue_command(command);
                true
            }
            None => {
                debug!("ignoring unbound key {key:?}");
                false
            }
        }
    }

    /// Apply a command immediately, bypassing the queue.
    pub fn apply_command(&mut self, command: InputCommand) {
        systems::saucer::apply_command(&mut self.world, command, self.config.saucer_speed);
    }

    pub fn set_saucer_velocity(&mut self, vx: f64, vy: f64) {
        systems::saucer::set_velocity(&mut self.world, Velocity::new(vx, vy));
    }

    pub fn turn_on_beam(&mut self) {
        systems::saucer::turn_on_beam(&mut self.world);
    }

    pub fn turn_off_beam(&mut self) {
        systems::saucer::turn_off_beam(&mut self.world);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();
        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.config,
            self.abducted_total,
        )
    }

    /// Draw requests for the current state, produced lazily.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> {
        systems::draw::shapes(&self.world, &self.config)
    }

    /// Feed every draw request for the current state into `sink`.
    pub fn draw(&self, sink: &mut dyn DrawSink) {
        for shape in self.shapes() {
            sink.submit(shape);
        }
    }

    /// Place a cow with a fixed stride, bypassing the random source.
    pub fn place_cow(&mut self, position: Position, direction: i32) -> Entity {
        world_setup::spawn_cow_facing(&mut self.world, position, direction)
    }

    /// Copy of a cow's state, or `None` once it has been purged.
    pub fn cow(&self, entity: Entity) -> Option<(Cow, Position)> {
        self.world
            .query_one::<(&Cow, &Position)>(entity)
            .ok()?
            .get()
            .map(|(cow, pos)| (*cow, *pos))
    }

    /// Live cows with x in `min_x..=max_x`, in world iteration order.
    pub fn cows_in_range(&self, min_x: f64, max_x: f64) -> Vec<Entity> {
        systems::cow_population::query(&self.world, Footprint { min_x, max_x })
    }

    pub fn live_cows(&self) -> usize {
        systems::cow_population::live_count(&self.world)
    }

    pub fn saucer(&self) -> SaucerView {
        systems::snapshot::build_saucer(&self.world)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Cows purged after abduction so far.
    pub fn abducted_total(&self) -> u32 {
        self.abducted_total
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world, for scripted setups.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands in arrival order.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 0. Rim lights step past the levels shown on the previous frame
        if self.time.tick > 0 {
            systems::saucer::cycle_lights(&mut self.world);
        }
        // 1. Population: spawn check, walk/fall/unfreeze, purge
        let purged = systems::cow_population::run(
            &mut self.world,
            self.rng.as_mut(),
            &self.config,
            &mut self.despawn_buffer,
        );
        self.abducted_total += purged as u32;
        // 2. Saucer drift
        systems::saucer::run(&mut self.world);
        // 3. Hover jitter
        systems::saucer::hover(&mut self.world, self.rng.as_mut(), self.config.hover_jitter);
        // 4. Abduction, against post-update saucer and cow positions
        if let Some((anchor, footprint)) = systems::saucer::active_beam(&self.world) {
            let grabbed = systems::abduction::run(
                &mut self.world,
                footprint,
                anchor.x,
                anchor.y,
                self.config.lift_rate,
            );
            trace!("beam at x={:.1} holding {grabbed} cows", anchor.x);
        }
    }
}
