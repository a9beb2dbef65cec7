//! Headless saucer driver.
//!
//! Runs the simulation on its own thread at a fixed tick rate and feeds it
//! console key presses.

pub mod game_loop;
pub mod state;
pub mod tally;

pub use saucer_core as core;
