//! Static evaluation of non-terminal positions.
//!
//! A position is scored from one tag's perspective as
//! `score_for(tag) - score_for(opponent)`, where `score_for` sums a score
//! over every four-cell window plus a bonus for centre-column pieces.

use crate::board::{Grid, Window};
use crate::core::Tag;

/// Window holding four of the tag. Only reachable on already-won boards.
pub const FOUR_SCORE: i32 = 10_000;

/// Window holding three of the tag and one empty cell.
pub const THREE_SCORE: i32 = 100;

/// Window holding two of the tag and two empty cells.
pub const TWO_SCORE: i32 = 10;

/// Per piece of the tag in the centre column.
pub const CENTER_SCORE: i32 = 3;

/// Scores a position from the perspective of `tag`.
///
/// Higher is better for `tag`. Implementations must be pure functions of
/// the grid.
pub trait Evaluator: Send {
    fn evaluate(&self, grid: &Grid, tag: Tag) -> i32;
}

/// Window-counting evaluator with a centre-column bias.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineEvaluator;

impl Evaluator for LineEvaluator {
    fn evaluate(&self, grid: &Grid, tag: Tag) -> i32 {
        score_position(grid, tag)
    }
}

/// `score_for(tag) - score_for(opponent)`.
#[must_use]
pub fn score_position(grid: &Grid, tag: Tag) -> i32 {
    score_for(grid, tag) - score_for(grid, tag.opponent())
}

/// Sum of window scores for `tag` plus the centre-column bonus.
#[must_use]
pub fn score_for(grid: &Grid, tag: Tag) -> i32 {
    let windows: i32 = grid.windows().map(|window| score_window(&window, tag)).sum();

    let center = grid.center_column() as isize;
    let center_pieces = (0..grid.rows() as isize)
        .filter(|&row| grid.tag_at(center, row) == tag)
        .count() as i32;

    windows + center_pieces * CENTER_SCORE
}

fn score_window(window: &Window, tag: Tag) -> i32 {
    let own = window.iter().filter(|&&t| t == tag).count();
    let empty = window.iter().filter(|t| t.is_empty()).count();

    match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    }
}
