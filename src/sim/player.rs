//! Player state: angle around the tube and time-derived depth
//!
//! Depth is a pure function of elapsed unpaused time, not integrated
//! velocity. Pausing therefore freezes the time source, never the formula;
//! resuming rebases the clock so no elapsed time is lost.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::consts::*;

/// Persistent movement intent around the tube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steering {
    Left,
    #[default]
    Straight,
    Right,
}

impl Steering {
    /// Signed factor applied to the steering speed; left decreases the angle
    #[inline]
    pub fn factor(&self) -> f32 {
        match self {
            Steering::Left => 1.0,
            Steering::Straight => 0.0,
            Steering::Right => -1.0,
        }
    }
}

/// The player capsule's simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Rotation around the tube in radians. Accumulates without wrapping so
    /// motion stays continuous; normalized only at comparison time.
    pub angle: f32,
    /// Current movement intent, latched until the next steer input
    pub intent: Steering,
    /// Timestamp the elapsed-time formula counts from
    base_ms: f64,
    /// Elapsed-time snapshot captured at pause; `Some` while paused
    paused_elapsed_ms: Option<f64>,
}

impl PlayerState {
    pub fn new(now_ms: f64) -> Self {
        Self {
            angle: 0.0,
            intent: Steering::Straight,
            base_ms: now_ms,
            paused_elapsed_ms: None,
        }
    }

    /// Elapsed unpaused simulation time in milliseconds
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        self.paused_elapsed_ms.unwrap_or(now_ms - self.base_ms)
    }

    /// Current travel depth along the track
    pub fn depth(&self, now_ms: f64) -> f32 {
        (self.elapsed_ms(now_ms) / DEPTH_MS_PER_UNIT) as f32 + PLAYER_DEPTH_OFFSET
    }

    /// Player's angle on the ring in degrees, normalized to [0, 360)
    pub fn angle_deg(&self) -> f32 {
        super::angle::normalize_degrees(self.angle.to_degrees())
    }

    /// Apply one frame of steering. No-op while paused.
    pub fn advance(&mut self, movement_speed_deg: f32) {
        if self.is_paused() {
            return;
        }
        self.angle -= self.intent.factor() * movement_speed_deg * PI / 180.0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused_elapsed_ms.is_some()
    }

    /// Freeze the elapsed-time source and clear movement intent.
    /// Idempotent: pausing twice keeps the first snapshot.
    pub fn pause(&mut self, now_ms: f64) {
        if self.paused_elapsed_ms.is_none() {
            self.paused_elapsed_ms = Some(now_ms - self.base_ms);
        }
        self.intent = Steering::Straight;
    }

    /// Resume from pause, rebasing the clock so elapsed time continues from
    /// the snapshot. Idempotent when not paused.
    pub fn resume(&mut self, now_ms: f64) {
        if let Some(elapsed) = self.paused_elapsed_ms.take() {
            self.base_ms = now_ms - elapsed;
        }
    }

    /// Reinitialize for a new run, with the elapsed-time base at `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        *self = Self::new(now_ms);
    }
}
