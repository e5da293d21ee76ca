//! Game rules trait for variant implementations.
//!
//! Variants implement `GameRules` to define:
//! - What a player's action on a cell does
//! - Win and draw conditions
//! - State-string import/export
//! - Optional AI move selection
//!
//! The session calls into `GameRules` but never interprets
//! variant-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, GameRules};
