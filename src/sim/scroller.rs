//! Scrolling track window
//!
//! Keeps a short sliding window of segments around the player's depth,
//! recycling at most one segment per frame. Owns the seeded RNG that draws
//! barrier and coin angles, so a session is reproducible from its seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::segment::Segment;
use crate::consts::*;
use crate::tuning::Tuning;

/// Sliding window of track segments, ordered by `start_depth`
#[derive(Debug, Clone)]
pub struct TrackWindow {
    segments: Vec<Segment>,
    /// Index of the next segment to append; start depth is index * length
    next_index: u32,
    segment_length: f32,
    tube_radius: f32,
    lookahead_margin: f32,
    rng: Pcg32,
}

impl TrackWindow {
    /// Create a window with the initial safe segments in place
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let mut window = Self {
            segments: Vec::with_capacity(SPAWN_WINDOW_SEGMENTS + 1),
            next_index: 0,
            segment_length: tuning.segment_length,
            tube_radius: tuning.tube_radius,
            lookahead_margin: tuning.lookahead_margin,
            rng: Pcg32::seed_from_u64(seed),
        };
        window.ensure_window();
        window
    }

    /// Segments currently in the window, ordered by depth
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Refill the window with barrier-less segments when it runs low.
    ///
    /// The player never spawns into an obstacle: anything synthesized here
    /// is an empty buffer segment.
    pub fn ensure_window(&mut self) {
        if self.segments.len() >= MIN_WINDOW_SEGMENTS {
            return;
        }
        while self.segments.len() < SPAWN_WINDOW_SEGMENTS {
            self.push_segment(false);
        }
        log::info!(
            "track window filled: {} segments, next index {}",
            self.segments.len(),
            self.next_index
        );
    }

    /// Recycle the window as the player advances.
    ///
    /// Evicts the earliest segment once the player is a full lookahead margin
    /// past it, and appends one obstacle segment at the far end. At most one
    /// segment is recycled per call, so catch-up after a long frame stays
    /// bounded.
    pub fn advance(&mut self, player_depth: f32) {
        let expired = self
            .segments
            .first()
            .map(|seg| seg.start_depth + seg.length + self.lookahead_margin < player_depth)
            .unwrap_or(false);
        if !expired {
            return;
        }

        self.segments.remove(0);
        self.push_segment(true);
        log::debug!(
            "recycled segment, window now [{:.0}, {:.0})",
            self.segments[0].start_depth,
            self.segments.last().map(|s| s.start_depth + s.length).unwrap_or(0.0)
        );
    }

    /// Clear and refill for a new run, continuing the same RNG stream
    pub fn reset(&mut self) {
        self.segments.clear();
        self.next_index = 0;
        self.ensure_window();
    }

    fn push_segment(&mut self, has_barrier: bool) {
        let start_depth = self.next_index as f32 * self.segment_length;
        self.segments.push(Segment::new(
            start_depth,
            self.segment_length,
            self.tube_radius,
            has_barrier,
            &mut self.rng,
        ));
        self.next_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> TrackWindow {
        TrackWindow::new(&Tuning::default(), 12345)
    }

    #[test]
    fn test_initial_window_is_safe() {
        let window = window();
        assert_eq!(window.segments().len(), SPAWN_WINDOW_SEGMENTS);
        assert!(window.segments().iter().all(|s| !s.has_barrier && !s.has_coin));
    }

    #[test]
    fn test_start_depths_strictly_increasing() {
        let mut window = window();
        // Push the window far down the track
        for step in 0..200 {
            window.advance(20.0 + step as f32 * 10.0);
            let depths: Vec<f32> = window.segments().iter().map(|s| s.start_depth).collect();
            assert!(depths.windows(2).all(|w| w[0] < w[1]));
            assert!(window.segments().len() >= MIN_WINDOW_SEGMENTS);
        }
    }

    #[test]
    fn test_no_gaps_between_segments() {
        let mut window = window();
        for step in 0..50 {
            window.advance(20.0 + step as f32 * 30.0);
        }
        for pair in window.segments().windows(2) {
            assert_eq!(pair[0].start_depth + pair[0].length, pair[1].start_depth);
        }
    }

    #[test]
    fn test_recycles_one_per_call() {
        let mut window = window();
        let first_start = window.segments()[0].start_depth;
        // Depth far past every segment: still only one recycle per call
        window.advance(1_000.0);
        assert_eq!(window.segments()[0].start_depth, first_start + SEGMENT_LENGTH);
        window.advance(1_000.0);
        assert_eq!(window.segments()[0].start_depth, first_start + 2.0 * SEGMENT_LENGTH);
    }

    #[test]
    fn test_no_eviction_within_lookahead() {
        let mut window = window();
        // Player exactly at the eviction boundary of segment 0: keep it
        let boundary = SEGMENT_LENGTH + LOOKAHEAD_MARGIN;
        window.advance(boundary);
        assert_eq!(window.segments()[0].start_depth, 0.0);
        // One past the boundary: evict
        window.advance(boundary + 0.1);
        assert_eq!(window.segments()[0].start_depth, SEGMENT_LENGTH);
    }

    #[test]
    fn test_recycled_segments_carry_obstacles() {
        let mut window = window();
        window.advance(1_000.0);
        let newest = window.segments().last().unwrap();
        assert!(newest.has_barrier);
        assert!(newest.has_coin);
    }

    #[test]
    fn test_reset_refills_from_zero() {
        let mut window = window();
        for _ in 0..10 {
            window.advance(10_000.0);
        }
        window.reset();
        assert_eq!(window.segments()[0].start_depth, 0.0);
        assert_eq!(window.segments().len(), SPAWN_WINDOW_SEGMENTS);
        assert!(window.segments().iter().all(|s| !s.has_barrier));
    }

    #[test]
    fn test_same_seed_same_track() {
        let mut a = TrackWindow::new(&Tuning::default(), 99);
        let mut b = TrackWindow::new(&Tuning::default(), 99);
        for step in 0..20 {
            let depth = 20.0 + step as f32 * 40.0;
            a.advance(depth);
            b.advance(depth);
        }
        for (sa, sb) in a.segments().iter().zip(b.segments()) {
            assert_eq!(sa.start_depth, sb.start_depth);
            assert_eq!(sa.barrier_angle, sb.barrier_angle);
            assert_eq!(sa.coin_angle, sb.coin_angle);
        }
    }
}
