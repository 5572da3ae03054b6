//! One recyclable stretch of tube
//!
//! A segment carries at most one barrier and one coin, each at a random
//! angle on the circumference. The barrier sits at the segment's
//! longitudinal middle; the coin sits a fixed offset further down-track.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::angle::normalize_degrees;
use crate::consts::*;

/// A single tube segment in the scrolling window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Track depth where the segment begins; immutable after creation
    pub start_depth: f32,
    /// Segment length along the track
    pub length: f32,
    /// Tube radius
    pub radius: f32,
    /// Whether this segment contains an obstacle
    pub has_barrier: bool,
    /// Barrier angle in radians, [0, 2π); immutable
    pub barrier_angle: f32,
    /// Whether the coin is still present (flips false once collected)
    pub has_coin: bool,
    /// Coin angle in radians, [0, 2π); immutable
    pub coin_angle: f32,
}

impl Segment {
    /// Create a segment, drawing barrier and coin angles from `rng`.
    ///
    /// Barrier-less buffer segments carry no coin either, so the initial
    /// window is completely safe.
    pub fn new(
        start_depth: f32,
        length: f32,
        radius: f32,
        has_barrier: bool,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            start_depth,
            length,
            radius,
            has_barrier,
            barrier_angle: rng.random_range(0.0..TAU),
            has_coin: has_barrier,
            coin_angle: rng.random_range(0.0..TAU),
        }
    }

    /// Depth of the segment's longitudinal middle, where the barrier sits
    #[inline]
    pub fn center_depth(&self) -> f32 {
        self.start_depth + self.length / 2.0
    }

    /// Depth of the coin, a fixed offset down-track from the center
    #[inline]
    pub fn coin_depth(&self) -> f32 {
        self.center_depth() + COIN_DEPTH_OFFSET
    }

    /// True while the player is crossing the barrier's collision plane
    pub fn at_barrier_plane(&self, player_depth: f32) -> bool {
        (self.center_depth() - player_depth).abs() < PLANE_TOLERANCE
    }

    /// True while the player is crossing the coin's collision plane
    pub fn at_coin_plane(&self, player_depth: f32) -> bool {
        (self.coin_depth() - player_depth).abs() < PLANE_TOLERANCE
    }

    /// The barrier's effective contact angle on the ring, degrees in [0, 360)
    pub fn barrier_contact_deg(&self) -> f32 {
        normalize_degrees(self.barrier_angle.to_degrees() + CONTACT_ANGLE_OFFSET_DEG)
    }

    /// The coin's effective contact angle on the ring, degrees in [0, 360)
    pub fn coin_contact_deg(&self) -> f32 {
        normalize_degrees(self.coin_angle.to_degrees() + CONTACT_ANGLE_OFFSET_DEG)
    }
}
