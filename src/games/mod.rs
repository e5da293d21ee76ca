//! Concrete game variants.

pub mod connect4;
pub mod tictactoe;
