//! Move engine: legal moves, make/undo, and terminal-state queries.
//!
//! `make_move` and `undo_move` are exact inverses when called in LIFO
//! order. The grid keeps no history; the caller (the search) owns the
//! pairing.

use smallvec::SmallVec;

use super::grid::Grid;
use crate::core::Tag;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Line orientations: horizontal, vertical, and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Playable columns, lowest index first.
pub type Columns = SmallVec<[usize; 16]>;

/// A four-cell line.
pub type Window = [Tag; CONNECT];

impl Grid {
    /// Row index of the lowest empty cell in `column`.
    ///
    /// Returns `None` if the column is full or off the board.
    #[must_use]
    pub fn top_open_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns() {
            return None;
        }
        let height = self.height(column);
        (height < self.rows()).then(|| self.rows() - 1 - height)
    }

    /// Whether a piece can be dropped into `column`.
    #[must_use]
    pub fn can_drop(&self, column: usize) -> bool {
        self.top_open_row(column).is_some()
    }

    /// Drop `tag` into `column`.
    ///
    /// The column must have room; callers check `top_open_row` first.
    pub fn make_move(&mut self, column: usize, tag: Tag) {
        let height = self.height(column);
        debug_assert!(height < self.rows(), "make_move on full column {column}");

        let row = self.rows() - 1 - height;
        self.set_cell(column, row, tag);
        self.set_height(column, height + 1);
    }

    /// Remove the topmost piece from `column`.
    ///
    /// Must mirror the most recent unmatched `make_move` on this column.
    pub fn undo_move(&mut self, column: usize) {
        let height = self.height(column);
        debug_assert!(height > 0, "undo_move on empty column {column}");
        if height == 0 {
            return;
        }

        let row = self.rows() - height;
        self.set_cell(column, row, Tag::EMPTY);
        self.set_height(column, height - 1);
    }

    /// Columns with room, in ascending order.
    #[must_use]
    pub fn legal_columns(&self) -> Columns {
        (0..self.columns()).filter(|&c| self.can_drop(c)).collect()
    }

    /// True iff some column still has room.
    #[must_use]
    pub fn any_moves_left(&self) -> bool {
        (0..self.columns()).any(|c| self.height(c) < self.rows())
    }

    /// True iff `tag` occupies four consecutive cells in any orientation.
    #[must_use]
    pub fn is_winning_tag(&self, tag: Tag) -> bool {
        !tag.is_empty() && self.windows().any(|window| window.iter().all(|&t| t == tag))
    }

    /// Every four-cell line on the board, across all orientations.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dx, dy)| {
            (0..self.rows() as isize).flat_map(move |y| {
                (0..self.columns() as isize).filter_map(move |x| self.window(x, y, dx, dy))
            })
        })
    }

    fn window(&self, x: isize, y: isize, dx: isize, dy: isize) -> Option<Window> {
        let reach = CONNECT as isize - 1;
        if !self.contains(x + dx * reach, y + dy * reach) {
            return None;
        }

        let mut window = [Tag::EMPTY; CONNECT];
        for (i, slot) in window.iter_mut().enumerate() {
            let step = i as isize;
            *slot = self.tag_at(x + dx * step, y + dy * step);
        }
        Some(window)
    }
}
