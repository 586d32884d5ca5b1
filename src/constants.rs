// Virtual screen dimensions. All simulation coordinates live in this space;
// the UI scales them to the terminal at draw time.
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Bird geometry. The x column never changes during play.
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const BIRD_X: f64 = SCREEN_WIDTH / 4.0;
pub const BIRD_START_Y: f64 = SCREEN_HEIGHT / 2.0;

// Physics constants, applied once per tick (not wall-clock scaled).
pub const GRAVITY: f64 = 0.5;
pub const FLAP_VELOCITY: f64 = -9.0;

// Pipe geometry and motion.
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPEED: f64 = 3.0;

// Gap placement margin: the gap top is drawn uniformly from
// [GAP_MARGIN, SCREEN_HEIGHT - PIPE_GAP - GAP_MARGIN] so the full gap plus
// margins always fits on screen.
pub const GAP_MARGIN: f64 = 100.0;

// Spawn cadence is measured against wall-clock milliseconds, unlike
// physics. Signed so the timer can be rebased below zero near process
// start and still read "due immediately".
pub const PIPE_SPAWN_INTERVAL_MS: i64 = 1500;

// Ground band at the bottom of the screen. The bird dies on contact with
// the ground line.
pub const GROUND_HEIGHT: f64 = 80.0;
pub const GROUND_Y: f64 = SCREEN_HEIGHT - GROUND_HEIGHT;

// Target frame/tick rate (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;
