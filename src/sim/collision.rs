//! Angular collision scans
//!
//! The tricky part of a tube runner: the player and every obstacle live on
//! the same ring, so collision is a depth-plane test crossed with an angular
//! band test. Both scans here are pure per-frame passes over the window;
//! all state changes (the collision latch, the score) belong to the caller
//! except coin consumption, which flips in place.

use super::angle::AngularBand;
use super::segment::Segment;
use crate::consts::SCORE_DEBOUNCE_DEPTH;

/// Clamp a possibly-poisoned accumulator back to a usable value
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Scan the window for a barrier strike.
///
/// A hit requires the player to be crossing the segment's barrier plane AND
/// inside the band around the barrier's contact angle. Barrier-less buffer
/// segments are skipped. Returns true on the first hit; one strike is
/// terminal for the run, so there is nothing to accumulate.
pub fn barrier_hit(
    segments: &[Segment],
    player_angle_deg: f32,
    player_depth: f32,
    band: &AngularBand,
) -> bool {
    segments
        .iter()
        .filter(|seg| seg.has_barrier)
        .filter(|seg| seg.at_barrier_plane(player_depth))
        .any(|seg| band.is_hit(player_angle_deg, seg.barrier_contact_deg()))
}

/// Scan the window for coin pickups, consuming any that qualify.
///
/// A coin scores when the player crosses its plane inside the (tighter) coin
/// band, and its segment-center depth is more than the debounce distance
/// from the last scored depth. Scored coins flip `has_coin` so they are
/// collected exactly once and no longer drawn. Returns the score delta.
pub fn collect_coins(
    segments: &mut [Segment],
    player_angle_deg: f32,
    player_depth: f32,
    band: &AngularBand,
    last_scored_depth: &mut f32,
) -> u32 {
    let mut collected = 0;
    for seg in segments.iter_mut().filter(|seg| seg.has_coin) {
        if !seg.at_coin_plane(player_depth) {
            continue;
        }
        if !band.is_hit(player_angle_deg, seg.coin_contact_deg()) {
            continue;
        }
        let center = seg.center_depth();
        if (center - sanitize(*last_scored_depth)).abs() <= SCORE_DEBOUNCE_DEPTH {
            continue;
        }
        seg.has_coin = false;
        *last_scored_depth = center;
        collected += 1;
    }
    collected
}
