//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One update per rendered frame, velocities in pixels per frame
//! - Randomness only through the caller-supplied RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlaps_rect, circle_overlaps_segment};
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickInput, tick};
