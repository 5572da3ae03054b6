//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through `tick(now_ms)`, never from a wall clock
//! - Seeded RNG only
//! - Stable iteration order (segments sorted by depth)
//! - No rendering or platform dependencies

pub mod angle;
pub mod collision;
pub mod player;
pub mod scroller;
pub mod segment;
pub mod state;
pub mod tick;

pub use angle::{AngularBand, circular_distance, normalize_degrees};
pub use collision::{barrier_hit, collect_coins};
pub use player::{PlayerState, Steering};
pub use scroller::TrackWindow;
pub use segment::Segment;
pub use state::{FrameSnapshot, GamePhase, GameSession, SegmentView};
pub use tick::{TickInput, tick};
