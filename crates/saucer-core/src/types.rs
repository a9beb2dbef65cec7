//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in world space. x = right, y = up (the ground line sits at a fixed y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Horizontal interval swept by an active tractor beam. Both ends inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub min_x: f64,
    pub max_x: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal tick rate.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Footprint {
    /// Interval of `width` centered on `center_x`.
    pub fn centered(center_x: f64, width: f64) -> Self {
        let half = width / 2.0;
        Self {
            min_x: center_x - half,
            max_x: center_x + half,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
