//! Opening-hand simulator.
//!
//! `draw_hand` shuffles a copy of a deck and deals a hand; the returned
//! `DrawSession` can then draw one card at a time. Live draws are
//! unseeded; pass a seeded `DrawRng` to `draw_hand_with` for replays.

pub mod session;
pub mod shuffler;

pub use session::DrawSession;
pub use shuffler::{draw_hand, draw_hand_with, fisher_yates};
