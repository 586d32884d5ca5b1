//! The session state machine: input handling and the per-tick update.

use crate::constants::GROUND_Y;
use crate::game::autopilot;
use crate::game::pipes;
use crate::game::types::{Session, SessionPhase};
use rand::Rng;

/// Semantic input actions, already decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Flap (Space/Up/Enter). Doubles as the start input on the start screen.
    Flap,
    /// Restart after a game over (R).
    Restart,
    /// Toggle the autopilot (A).
    ToggleAutopilot,
    /// Any other key.
    Other,
}

/// Apply one input event against the current phase.
pub fn process_input(session: &mut Session, input: SessionInput, now_ms: i64) {
    match input {
        SessionInput::Flap => match session.phase {
            // The start screen is left on the same key that flaps in play.
            SessionPhase::Start => session.reset(now_ms),
            SessionPhase::Playing => session.bird.flap(),
            SessionPhase::GameOver => {}
        },
        SessionInput::Restart => {
            // Restart bypasses the start screen and goes straight to Playing.
            if session.phase == SessionPhase::GameOver {
                session.reset(now_ms);
            }
        }
        SessionInput::ToggleAutopilot => session.autopilot = !session.autopilot,
        SessionInput::Other => {}
    }
}

/// Advance the simulation by one tick. No-op outside of Playing.
///
/// Physics integrates a constant step per tick; only the spawn cadence
/// reads the wall clock (`now_ms`).
pub fn process_tick<R: Rng>(session: &mut Session, now_ms: i64, rng: &mut R) {
    if session.phase != SessionPhase::Playing {
        return;
    }

    if session.autopilot && autopilot::decide(session.bird.y, &session.pipes) {
        session.bird.flap();
    }

    pipes::spawn_if_due(session, now_ms, rng);
    pipes::advance_and_prune(&mut session.pipes);
    let hit_pipe = pipes::check_collision_and_score(session);

    session.bird.apply_gravity();
    let hit_ground = session.bird.bounding_box().bottom() >= GROUND_Y;

    if hit_pipe || hit_ground {
        session.phase = SessionPhase::GameOver;
    }
}
