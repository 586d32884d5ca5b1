//! The autopilot: a stateless reactive flap rule.

use crate::constants::BIRD_X;
use crate::game::types::PipePair;

/// Decide whether to flap this tick.
///
/// Finds the nearest upcoming pair — the first one, in collection order,
/// whose top barrier's right edge is still ahead of the bird's column — and
/// flaps iff the bird is below that pair's gap center. No upcoming pair
/// means no flap. Pure function, re-evaluated every tick; identical inputs
/// always produce the identical decision.
pub fn decide(bird_y: f64, pipes: &[PipePair]) -> bool {
    let next_pipe = pipes.iter().find(|p| p.right_edge() > BIRD_X);
    match next_pipe {
        Some(pipe) => bird_y > pipe.gap_center(),
        None => false,
    }
}
