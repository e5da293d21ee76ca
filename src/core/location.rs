//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board. Column 0 is the left edge, row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub column: usize,
    pub row: usize,
}

impl Location {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Row-major index into a board `columns` wide.
    #[must_use]
    pub const fn index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
