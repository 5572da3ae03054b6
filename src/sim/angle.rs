//! Angle utilities for the tube's circumference
//!
//! Player and obstacle positions are angles around the tube. The player's
//! angle accumulates without wrapping, so every comparison goes through
//! normalization and circular distance here.

use serde::{Deserialize, Serialize};

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid(360.0) can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Minimum angular separation between two angles, in [0, 180]
///
/// Handles wraparound at 0/360: `circular_distance(350.0, 10.0) == 20.0`.
#[inline]
pub fn circular_distance(a_deg: f32, b_deg: f32) -> f32 {
    let diff = (normalize_degrees(a_deg) - normalize_degrees(b_deg)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// A hit band on the ring, expressed as two thresholds on the raw wrapped
/// angular difference.
///
/// Obstacles occupy a band around their contact angle; a difference below
/// `near_deg` or above `far_deg` is a hit on one side or the other of the
/// gap the obstacle leaves open. With `far_deg == 360 - near_deg` this is
/// equivalent to `circular_distance(a, b) < near_deg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularBand {
    pub near_deg: f32,
    pub far_deg: f32,
}

impl AngularBand {
    pub fn new(near_deg: f32, far_deg: f32) -> Self {
        Self { near_deg, far_deg }
    }

    /// Whether `a_deg` falls inside the band centered on `b_deg`
    #[inline]
    pub fn is_hit(&self, a_deg: f32, b_deg: f32) -> bool {
        let diff = (normalize_degrees(a_deg) - normalize_degrees(b_deg)).abs();
        diff < self.near_deg || diff > self.far_deg
    }
}
