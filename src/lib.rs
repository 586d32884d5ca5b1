//! Skyward - a terminal Flappy Bird with an autopilot.
//!
//! This module exposes the simulation core for testing and external use.

pub mod constants;
pub mod game;
pub mod input;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game::types::{Session, SessionPhase};
