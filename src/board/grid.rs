//! Board state: a fixed-size grid of cell tags plus per-column fill counts.
//!
//! Cells are stored row-major with row 0 at the top. Columns fill from the
//! bottom, so for every column `c`:
//!
//! - `heights[c]` equals the number of non-empty cells in `c`
//! - the cell at row `r` is non-empty iff `r >= rows - heights[c]`
//!
//! Mutation goes through the move engine (`make_move` / `undo_move`) or
//! through `import`, which checks the invariant before touching anything.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Location, Tag};
use crate::error::StateStringError;

/// Drop-style game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Tag>,
    heights: Vec<usize>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0 && rows > 0, "Grid must have at least one cell");

        Self {
            columns,
            rows,
            cells: vec![Tag::EMPTY; columns * rows],
            heights: vec![0; columns],
        }
    }

    /// Create an empty grid sized by `config`.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.columns, config.rows)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Column whose pieces earn the centre bonus.
    #[must_use]
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// Whether `(column, row)` lies on the board.
    #[must_use]
    pub fn contains(&self, column: isize, row: isize) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    /// Tag at `(column, row)`. Off-board coordinates read as empty.
    #[must_use]
    pub fn tag_at(&self, column: isize, row: isize) -> Tag {
        if self.contains(column, row) {
            self.cells[row as usize * self.columns + column as usize]
        } else {
            Tag::EMPTY
        }
    }

    /// Tag at `location`. Off-board locations read as empty.
    #[must_use]
    pub fn get(&self, location: Location) -> Tag {
        self.tag_at(location.column as isize, location.row as isize)
    }

    /// Number of pieces in `column`. Zero for columns off the board.
    #[must_use]
    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// All cell tags, row-major from the top row.
    pub fn cells(&self) -> impl Iterator<Item = Tag> + '_ {
        self.cells.iter().copied()
    }

    /// Occupied cells with their tags, row-major from the top row.
    pub fn occupied(&self) -> impl Iterator<Item = (Location, Tag)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tag)| !tag.is_empty())
            .map(move |(i, &tag)| (Location::new(i % columns, i / columns), tag))
    }

    /// Number of cells holding `tag`.
    #[must_use]
    pub fn count(&self, tag: Tag) -> usize {
        self.cells.iter().filter(|&&t| t == tag).count()
    }

    /// Reset every cell to empty and every column height to zero.
    pub fn clear(&mut self) {
        self.cells.fill(Tag::EMPTY);
        self.heights.fill(0);
    }

    /// Replace the contents with `tags` (row-major from the top row) and
    /// re-derive column heights.
    ///
    /// Rejects layouts with a piece above an empty cell, since those cannot
    /// arise from drops. The grid is unchanged on error.
    pub fn import(&mut self, tags: &[Tag]) -> Result<(), StateStringError> {
        if tags.len() != self.cells.len() {
            return Err(StateStringError::Length {
                expected: self.cells.len(),
                actual: tags.len(),
            });
        }

        let mut heights = vec![0; self.columns];
        for (column, height) in heights.iter_mut().enumerate() {
            let topmost = (0..self.rows).find(|&row| !tags[row * self.columns + column].is_empty());
            if let Some(top) = topmost {
                if let Some(row) =
                    (top..self.rows).find(|&row| tags[row * self.columns + column].is_empty())
                {
                    return Err(StateStringError::FloatingPiece { column, row: row - 1 });
                }
                *height = self.rows - top;
            }
        }

        self.cells.copy_from_slice(tags);
        self.heights = heights;
        Ok(())
    }

    pub(super) fn set_cell(&mut self, column: usize, row: usize, tag: Tag) {
        self.cells[row * self.columns + column] = tag;
    }

    pub(super) fn set_height(&mut self, column: usize, height: usize) {
        self.heights[column] = height;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
