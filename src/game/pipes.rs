//! The obstacle stream: spawning, scrolling, pruning, collision and scoring.

use crate::constants::*;
use crate::game::types::{PipePair, Session};
use rand::Rng;

/// Spawn one new pipe pair at the right screen edge if the spawn interval
/// has elapsed, and rebase the spawn timer.
///
/// The gap top is drawn uniformly from a range clamped so the full gap plus
/// margins always fits on screen; no after-the-fact validation or retrying.
pub fn spawn_if_due<R: Rng>(session: &mut Session, now_ms: i64, rng: &mut R) {
    if now_ms - session.last_spawn_ms <= PIPE_SPAWN_INTERVAL_MS {
        return;
    }

    let gap_top = rng.gen_range(GAP_MARGIN..=SCREEN_HEIGHT - PIPE_GAP - GAP_MARGIN);
    session.pipes.push(PipePair::new(SCREEN_WIDTH, gap_top));
    session.last_spawn_ms = now_ms;
}

/// Shift every pair left by the pipe speed, then drop pairs that have left
/// the screen. A pair survives while its right edge is still at or past
/// x = 0; oldest pairs leave first because they are leftmost.
pub fn advance_and_prune(pipes: &mut Vec<PipePair>) {
    for pipe in pipes.iter_mut() {
        pipe.x -= PIPE_SPEED;
    }
    pipes.retain(|pipe| pipe.right_edge() >= 0.0);
}

/// Collision and scoring check against the current bird bounding box.
///
/// Returns true if the bird intersects either barrier of any surviving
/// pair. Independently, every pair whose top barrier has fully passed the
/// bird's column (and does not intersect the bird this tick) scores one
/// point and is removed, so it can never score twice. The single `retain`
/// pass visits each pair exactly once, which keeps same-tick multi-pair
/// scoring deterministic. The high score is raised immediately, not at
/// game over.
pub fn check_collision_and_score(session: &mut Session) -> bool {
    let bird_box = session.bird.bounding_box();

    let collided = session
        .pipes
        .iter()
        .any(|p| p.top_rect().intersects(&bird_box) || p.bottom_rect().intersects(&bird_box));

    let mut scored = 0u32;
    session.pipes.retain(|p| {
        let passed = p.top_rect().right() < BIRD_X && !p.top_rect().intersects(&bird_box);
        if passed {
            scored += 1;
        }
        !passed
    });

    session.score += scored;
    if session.score > session.high_score {
        session.high_score = session.score;
    }

    collided
}
