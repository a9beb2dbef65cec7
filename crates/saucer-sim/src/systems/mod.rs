//! Systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod abduction;
pub mod cow_population;
pub mod draw;
pub mod saucer;
pub mod snapshot;
