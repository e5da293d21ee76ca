//! Core engine types: players, cell tags, locations, board configuration.
//!
//! This module contains the building blocks shared by every game variant.
//! Variants configure board size via `BoardConfig` rather than modifying
//! the core.

pub mod config;
pub mod location;
pub mod player;
pub mod tag;

pub use config::BoardConfig;
pub use location::Location;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use tag::Tag;
