//! Simulation constants and tuning parameters.
//!
//! World-shape values here are the defaults for [`crate::config::WorldConfig`];
//! drawing geometry is fixed.

/// Nominal tick rate (Hz) the driver aims for. The simulation itself is
/// cadence-agnostic: every quantity below is per tick.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

pub const WORLD_WIDTH: f64 = 1280.0;
pub const WORLD_HEIGHT: f64 = 720.0;

/// y of the ground line. Grounded cows sit exactly here.
pub const GROUND_Y: f64 = 100.0;

/// How far past either edge a cow may walk before it wraps to the other side.
pub const WRAP_MARGIN: f64 = 100.0;

// --- Herd ---

/// Number of live cows the population manager maintains.
pub const TARGET_COWS: usize = 10;

/// Descent per tick for a cow above the ground line.
pub const COW_FALL_RATE: f64 = 8.0;

/// Stride magnitude bounds (inclusive) drawn at cow creation.
pub const COW_MIN_STRIDE: i32 = 2;
pub const COW_MAX_STRIDE: i32 = 4;

/// Walk phase cycles through 0..WALK_CYCLE.
pub const WALK_CYCLE: u8 = 6;

/// Walk phases above this draw the legs spread.
pub const LEGS_SPREAD_AFTER: u8 = 2;

/// Replacement cows appear this far inside the right wrap bound.
pub const SPAWN_INSET: f64 = 1.0;

// --- Saucer ---

pub const SAUCER_START_X: f64 = 200.0;
pub const SAUCER_START_Y: f64 = 600.0;

/// Velocity magnitude set by a directional command.
pub const SAUCER_SPEED: f64 = 5.0;

/// Hover jitter is uniform in [-HOVER_JITTER, HOVER_JITTER] per axis per tick.
pub const HOVER_JITTER: f64 = 2.0;

/// Horizontal span of the beam at ground level.
pub const BEAM_WIDTH: f64 = 140.0;

/// Levitation per tick for a cow caught in the beam.
pub const LIFT_RATE: f64 = 4.0;

// --- Saucer geometry ---

pub const SAUCER_BODY_WIDTH: f64 = 180.0;
pub const SAUCER_BODY_HEIGHT: f64 = 80.0;
pub const SAUCER_WINDOW_SCALE: f64 = 0.55;
pub const SAUCER_HULL_SCALE: f64 = 0.4;
pub const BEAM_TOP_HALF_WIDTH: f64 = 25.0;

pub const LIGHT_COUNT: usize = 10;
pub const LIGHT_RADIUS: f64 = 3.0;
/// Brightness gained per tick.
pub const LIGHT_STEP: u16 = 15;
/// Brightness after wrapping past full.
pub const LIGHT_RESET: u16 = 180;
pub const LIGHT_MAX: u16 = 255;

// --- Cow geometry ---

pub const COW_BODY_WIDTH: f64 = 10.0;
pub const COW_BODY_HEIGHT: f64 = 5.0;
pub const COW_LEG_WIDTH: f64 = 2.0;
pub const COW_LEG_HEIGHT: f64 = 5.0;
pub const COW_HEAD_SIZE: f64 = 4.0;
