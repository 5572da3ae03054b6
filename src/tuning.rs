//! Data-driven game balance
//!
//! Everything a designer might want to retune without touching code lives
//! here, most importantly the barrier/coin band thresholds. Defaults are
//! the canonical values from [`crate::consts`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::sim::AngularBand;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Length of one track segment
    pub segment_length: f32,
    /// Tube radius
    pub tube_radius: f32,
    /// Steering speed in degrees per frame
    pub movement_speed_deg: f32,
    /// Depth margin behind a segment before it is recycled
    pub lookahead_margin: f32,
    /// Barrier hit band thresholds (degrees)
    pub barrier_band_near_deg: f32,
    pub barrier_band_far_deg: f32,
    /// Coin hit band thresholds (degrees)
    pub coin_band_near_deg: f32,
    pub coin_band_far_deg: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            segment_length: SEGMENT_LENGTH,
            tube_radius: TUBE_RADIUS,
            movement_speed_deg: MOVEMENT_SPEED_DEG,
            lookahead_margin: LOOKAHEAD_MARGIN,
            barrier_band_near_deg: BARRIER_BAND_NEAR_DEG,
            barrier_band_far_deg: BARRIER_BAND_FAR_DEG,
            coin_band_near_deg: COIN_BAND_NEAR_DEG,
            coin_band_far_deg: COIN_BAND_FAR_DEG,
        }
    }
}

impl Tuning {
    pub fn barrier_band(&self) -> AngularBand {
        AngularBand::new(self.barrier_band_near_deg, self.barrier_band_far_deg)
    }

    pub fn coin_band(&self) -> AngularBand {
        AngularBand::new(self.coin_band_near_deg, self.coin_band_far_deg)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save tuning to a JSON file
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save tuning to {}: {}", path.display(), err);
                }
            }
            Err(err) => log::warn!("failed to serialize tuning: {}", err),
        }
    }
}
