//! # rust-boardgame
//!
//! A turn-based board game engine: one lifecycle contract shared by every
//! game variant, and a minimax AI for the four-in-a-row drop game.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Controller**: The session drives setup, turns,
//!    win/draw detection and state import/export through the `GameRules`
//!    trait only. It never touches a concrete board.
//!
//! 2. **Explicit Sessions**: No process-wide game pointer. The presentation
//!    layer owns a `GameSession` and calls into it once per frame.
//!
//! 3. **Rejection Over Failure**: Bad clicks, full columns and malformed
//!    state strings are rejected with `false`; nothing here aborts.
//!
//! ## Architecture
//!
//! - **Make/Undo Search**: Alpha-beta recurses on one mutable grid and
//!   restores it after every child instead of cloning positions.
//!
//! - **Centralised Tag Mapping**: Cell tag `1` belongs to player 0 and tag
//!   `2` to player 1. Only `core::Tag` converts between the two.
//!
//! ## Modules
//!
//! - `core`: Players, cell tags, locations, board configuration
//! - `board`: Grid storage, move engine, state-string codec
//! - `search`: Evaluation function and alpha-beta search
//! - `rules`: `GameRules` trait for variant implementations
//! - `session`: The game controller and presentation events
//! - `games`: Connect 4 and tic-tac-toe

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Location, Player, PlayerId, PlayerMap, Tag, PLAYER_COUNT};

pub use crate::board::{Grid, CONNECT};

pub use crate::config::EngineConfig;

pub use crate::error::{ConfigError, StateStringError};

pub use crate::rules::{GameResult, GameRules};

pub use crate::search::{AlphaBeta, Evaluator, LineEvaluator, SearchConfig, SearchResult, SearchStats};

pub use crate::session::{BoardEvent, GameSession, Lifecycle};

pub use crate::games::connect4::{Connect4, Connect4Builder};
pub use crate::games::tictactoe::TicTacToe;
