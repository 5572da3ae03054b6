//! Game session state
//!
//! One `GameSession` owns everything for a run: phase, score, the player,
//! the track window, and the collision latch. All of it is reset in place
//! by a restart; nothing is shared across sessions.

use serde::{Deserialize, Serialize};

use super::player::PlayerState;
use super::scroller::TrackWindow;
use super::segment::Segment;
use crate::consts::NO_COLLISION_MS;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the start input
    Idle,
    /// Active gameplay
    Running,
    /// Time frozen, waiting for the pause toggle
    Paused,
    /// Run ended by a barrier strike
    Lost,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub player: PlayerState,
    pub track: TrackWindow,
    /// Elapsed-time stamp of the most recent barrier strike. Latched: once
    /// set it stays set for the rest of the run. Sentinel means none yet.
    pub last_collision_ms: f64,
    /// Segment-center depth of the last scored coin (debounce accumulator)
    pub last_scored_depth: f32,
    /// Frames simulated since session creation
    pub frames: u64,
}

impl GameSession {
    /// Create a session on the start screen
    pub fn new(seed: u64, tuning: Tuning, now_ms: f64) -> Self {
        let track = TrackWindow::new(&tuning, seed);
        Self {
            seed,
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            player: PlayerState::new(now_ms),
            track,
            last_collision_ms: NO_COLLISION_MS,
            last_scored_depth: 0.0,
            frames: 0,
        }
    }

    /// Begin a run from the start screen, zeroing the elapsed-time base
    pub fn start(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.player.reset(now_ms);
        self.phase = GamePhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// Reinitialize every run-scoped piece of state and return to the start
    /// screen. Valid from any phase.
    pub fn restart(&mut self, now_ms: f64) {
        self.player.reset(now_ms);
        self.track.reset();
        self.score = 0;
        self.last_collision_ms = NO_COLLISION_MS;
        self.last_scored_depth = 0.0;
        self.phase = GamePhase::Idle;
        log::info!("session restarted");
    }

    /// Whether a barrier strike has been latched this run
    pub fn collision_latched(&self) -> bool {
        self.last_collision_ms > 0.0
    }

    /// Read-only view of this frame for the rendering layer
    pub fn snapshot(&self, now_ms: f64) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            score: self.score,
            player_angle: self.player.angle,
            player_depth: self.player.depth(now_ms),
            segments: self.track.segments().iter().map(SegmentView::from).collect(),
        }
    }
}

/// Per-frame read-only state for the (external) rendering layer.
///
/// The core never calls into rendering; the embedding layer pulls one of
/// these after each tick and draws from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    /// Raw (unwrapped) player angle in radians
    pub player_angle: f32,
    pub player_depth: f32,
    pub segments: Vec<SegmentView>,
}

/// One visible segment, as the renderer needs it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentView {
    pub start_depth: f32,
    pub length: f32,
    pub radius: f32,
    pub has_barrier: bool,
    pub barrier_angle: f32,
    pub has_coin: bool,
    pub coin_angle: f32,
}

impl From<&Segment> for SegmentView {
    fn from(seg: &Segment) -> Self {
        Self {
            start_depth: seg.start_depth,
            length: seg.length,
            radius: seg.radius,
            has_barrier: seg.has_barrier,
            barrier_angle: seg.barrier_angle,
            has_coin: seg.has_coin,
            coin_angle: seg.coin_angle,
        }
    }
}
