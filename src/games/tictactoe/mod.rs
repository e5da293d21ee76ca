//! Tic-tac-toe.
//!
//! A second rule set behind the same `GameRules` contract: marks go on any
//! empty cell, three in a row wins, a full board without a line is a draw.

mod game;

pub use game::TicTacToe;
