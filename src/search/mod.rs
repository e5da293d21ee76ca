//! Adversarial search for drop-style boards.
//!
//! ## Overview
//!
//! - `eval`: static evaluation used at depth-limit and no-move leaves
//! - `minimax`: depth-limited minimax with alpha-beta pruning over
//!   make/undo on a shared `Grid`
//! - `config` / `stats`: search parameters and per-search diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use rust_boardgame::board::Grid;
//! use rust_boardgame::core::Tag;
//! use rust_boardgame::search::{AlphaBeta, SearchConfig};
//!
//! let mut grid = Grid::new(7, 6);
//! let mut search = AlphaBeta::new(SearchConfig::default().with_depth(4));
//!
//! let column = search.best_column(&mut grid, Tag(1));
//! assert!(column.is_some());
//! ```

pub mod config;
pub mod eval;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, MAX_SEARCH_DEPTH};
pub use eval::{score_for, score_position, Evaluator, LineEvaluator};
pub use minimax::{AlphaBeta, SearchResult, WIN_SCORE};
pub use stats::SearchStats;
