//! Core data structures: bird physics state, pipe pairs, and the session.

use crate::constants::*;

/// Axis-aligned bounding box in virtual screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True if the point falls inside the box (top/left edges inclusive).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// True if the two boxes overlap (shared edges don't count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player/autopilot-controlled bird.
///
/// The x column is fixed for the whole session; only y and velocity change,
/// once per tick while playing. Boundary checks (ground, pipes) are the
/// obstacle stream's job, not the physics step's.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the bounding box top edge.
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    /// One tick of gravity integration: accelerate, then move.
    pub fn apply_gravity(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Instantaneous upward impulse. Overrides the current velocity rather
    /// than adding to it, so repeated flaps don't stack.
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(BIRD_X, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A top/bottom barrier pair sharing one x position, separated by a fixed
/// vertical gap whose top edge is chosen at spawn time.
#[derive(Debug, Clone)]
pub struct PipePair {
    /// Left edge of both barriers (float for smooth scrolling).
    pub x: f64,
    /// Top edge of the gap == bottom edge of the top barrier.
    pub gap_top: f64,
}

impl PipePair {
    pub fn new(x: f64, gap_top: f64) -> Self {
        Self { x, gap_top }
    }

    /// Top barrier. Extends a full screen height above the gap so the bird
    /// can't fly over it.
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_top - SCREEN_HEIGHT, PIPE_WIDTH, SCREEN_HEIGHT)
    }

    /// Bottom barrier, starting one gap below the top barrier's bottom edge.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_top + PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT)
    }

    /// Vertical midpoint of the passable space. The autopilot steers here.
    pub fn gap_center(&self) -> f64 {
        self.gap_top + PIPE_GAP / 2.0
    }

    pub fn right_edge(&self) -> f64 {
        self.x + PIPE_WIDTH
    }
}

/// Session phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting on the start screen. Nothing is simulated.
    Start,
    /// Live simulation: physics, pipes, scoring all advance each tick.
    Playing,
    /// Terminal until an explicit restart, which goes straight to Playing.
    GameOver,
}

/// The whole game state. Every component call takes the session explicitly;
/// there is no ambient/global state anywhere in the crate.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: SessionPhase,
    pub bird: Bird,
    /// Active pipe pairs in spawn order (== left-to-right screen order).
    pub pipes: Vec<PipePair>,
    /// Pairs passed this run.
    pub score: u32,
    /// Best score this process lifetime. Monotonically non-decreasing.
    pub high_score: u32,
    /// Wall-clock timestamp (ms) of the last pipe spawn. May be rebased
    /// below zero so a fresh session spawns its first pipe immediately.
    pub last_spawn_ms: i64,
    /// Whether the autopilot flies the bird. Toggleable at any time.
    pub autopilot: bool,
}

impl Session {
    /// Create a session on the start screen.
    pub fn new(now_ms: i64) -> Self {
        Self {
            phase: SessionPhase::Start,
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            high_score: 0,
            last_spawn_ms: rebased_spawn_time(now_ms),
            autopilot: true,
        }
    }

    /// Full reset into Playing: bird back to the start position, pipes
    /// cleared, score zeroed, spawn timer due immediately. The high score
    /// and autopilot setting survive.
    pub fn reset(&mut self, now_ms: i64) {
        self.phase = SessionPhase::Playing;
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.last_spawn_ms = rebased_spawn_time(now_ms);
    }
}

/// Spawn timestamp that makes the next spawn check fire immediately.
fn rebased_spawn_time(now_ms: i64) -> i64 {
    now_ms - PIPE_SPAWN_INTERVAL_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(5000);
        assert_eq!(session.phase, SessionPhase::Start);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
        assert!(session.pipes.is_empty());
        assert!(session.autopilot);
        assert!((session.bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert_eq!(session.bird.velocity, 0.0);
    }

    #[test]
    fn test_spawn_timer_rebased_to_due_immediately() {
        let session = Session::new(5000);
        assert_eq!(session.last_spawn_ms, 5000 - PIPE_SPAWN_INTERVAL_MS);
        // Rebasing goes below zero near process start so the first spawn
        // is still due immediately.
        let session = Session::new(0);
        assert_eq!(session.last_spawn_ms, -PIPE_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let mut session = Session::new(0);
        session.phase = SessionPhase::GameOver;
        session.score = 7;
        session.high_score = 12;
        session.pipes.push(PipePair::new(200.0, 150.0));
        session.bird.y = 480.0;
        session.bird.velocity = 9.5;

        session.reset(60_000);

        assert_eq!(session.phase, SessionPhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 12);
        assert!(session.pipes.is_empty());
        assert!((session.bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert_eq!(session.bird.velocity, 0.0);
        assert_eq!(session.last_spawn_ms, 60_000 - PIPE_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_gravity_accelerates_then_moves() {
        let mut bird = Bird::new();
        bird.apply_gravity();
        assert!((bird.velocity - GRAVITY).abs() < f64::EPSILON);
        assert!((bird.y - (BIRD_START_Y + GRAVITY)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut bird = Bird::new();
        bird.velocity = 8.0;
        bird.flap();
        assert!((bird.velocity - FLAP_VELOCITY).abs() < f64::EPSILON);
        // A second flap with no gravity tick between leaves it unchanged.
        bird.flap();
        assert!((bird.velocity - FLAP_VELOCITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipe_gap_invariant() {
        let pipe = PipePair::new(300.0, 180.0);
        // Top barrier's bottom edge + gap == bottom barrier's top edge.
        assert!(
            (pipe.top_rect().bottom() + PIPE_GAP - pipe.bottom_rect().y).abs() < f64::EPSILON
        );
        assert!((pipe.gap_center() - (180.0 + PIPE_GAP / 2.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipe_barriers_share_x() {
        let pipe = PipePair::new(250.0, 120.0);
        assert!((pipe.top_rect().x - pipe.bottom_rect().x).abs() < f64::EPSILON);
        assert!((pipe.right_edge() - (250.0 + PIPE_WIDTH)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Touching edges do not overlap.
        let d = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(!a.intersects(&d));
    }
}
