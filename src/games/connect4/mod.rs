//! Connect 4: the four-in-a-row drop game.
//!
//! - Pieces drop to the lowest empty cell of the chosen column
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board with no line is a draw
//!
//! The AI picks columns with depth-limited alpha-beta search.

mod game;

pub use game::{Connect4, Connect4Builder};
