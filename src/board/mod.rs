//! Drop-style board: state, move engine, and state-string codec.
//!
//! - `grid`: the cell/height storage and bounds-checked access
//! - `moves`: move generation, make/undo, win and no-moves queries
//! - `state_string`: the digit-per-cell import/export format

pub mod grid;
pub mod moves;
pub mod state_string;

pub use grid::Grid;
pub use moves::{Columns, Window, CONNECT};
