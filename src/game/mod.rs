//! Skyward simulation core.
//!
//! A bird falls under gravity and flaps upward on input while pipe pairs
//! scroll leftward; passing a pair scores a point and touching a pipe or
//! the ground ends the run. A stateless autopilot can fly the bird.

pub mod autopilot;
pub mod logic;
pub mod pipes;
pub mod types;

pub use logic::*;
pub use types::*;
