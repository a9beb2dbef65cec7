//! Core types and definitions for the SAUCER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, configuration, draw requests, snapshots,
//! and constants. It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod shapes;
pub mod state;
pub mod types;
