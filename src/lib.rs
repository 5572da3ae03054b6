//! Tube Runner - an endless-runner tube game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world scrolling, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-run leaderboard
//!
//! Rendering is not part of this crate. The embedding layer calls
//! [`sim::tick`] once per frame with a monotonic timestamp and reads back a
//! [`sim::FrameSnapshot`] to draw from.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Length of one track segment (depth units)
    pub const SEGMENT_LENGTH: f32 = 50.0;
    /// Tube radius, constant across a session
    pub const TUBE_RADIUS: f32 = 5.0;

    /// Depth the player starts at (camera sits behind this)
    pub const PLAYER_DEPTH_OFFSET: f32 = 20.0;
    /// Elapsed milliseconds per depth unit - depth is elapsed_ms / this + offset
    pub const DEPTH_MS_PER_UNIT: f64 = 50.0;

    /// Player steering speed in degrees per frame
    pub const MOVEMENT_SPEED_DEG: f32 = 2.0;

    /// Margin behind a segment before it is recycled
    pub const LOOKAHEAD_MARGIN: f32 = 20.0;
    /// Window refill threshold and target
    pub const MIN_WINDOW_SEGMENTS: usize = 2;
    pub const SPAWN_WINDOW_SEGMENTS: usize = 3;

    /// Half-width of the collision plane around a segment's barrier/coin depth
    pub const PLANE_TOLERANCE: f32 = 1.0;
    /// Coin's longitudinal offset down-track from the segment center
    pub const COIN_DEPTH_OFFSET: f32 = 25.0;
    /// Obstacles and coins sit 90 degrees off their stored random angle
    pub const CONTACT_ANGLE_OFFSET_DEG: f32 = 90.0;

    /// Barrier hit band thresholds (degrees, raw wrapped difference)
    pub const BARRIER_BAND_NEAR_DEG: f32 = 100.0;
    pub const BARRIER_BAND_FAR_DEG: f32 = 260.0;
    /// Coin hit band thresholds (tighter than the barrier band)
    pub const COIN_BAND_NEAR_DEG: f32 = 20.0;
    pub const COIN_BAND_FAR_DEG: f32 = 340.0;

    /// Minimum depth between two scored coins (debounce)
    pub const SCORE_DEBOUNCE_DEPTH: f32 = 10.0;

    /// Sentinel for "no barrier collision yet" (far in the past)
    pub const NO_COLLISION_MS: f64 = -10_000.0;
}
