//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search never builds a tree. It recurses on one mutable `Grid`,
//! applying a move before each child and undoing it straight after, so a
//! node is identified by the path of moves from the root. Every subtree
//! returns the grid exactly as it found it, including when a cut-off ends
//! the loop early.
//!
//! Scores are from the searching tag's perspective. A win found at
//! remaining depth `d` scores `WIN_SCORE + d`, so quicker wins rank higher
//! (and quicker losses lower).

use std::time::Instant;

use tracing::trace;

use crate::board::Grid;
use crate::core::Tag;

use super::config::SearchConfig;
use super::eval::{Evaluator, LineEvaluator};
use super::stats::SearchStats;

/// Base score of a decided position.
pub const WIN_SCORE: i32 = 100_000;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Column to play.
    pub column: usize,
    /// Minimax value of that column.
    pub score: i32,
}

/// Minimax searcher for drop-style boards.
pub struct AlphaBeta {
    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    evaluator: Box<dyn Evaluator>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a searcher using the window-counting evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: Box::new(LineEvaluator),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom leaf evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best column for `ai_tag` to play, or `None` if the board is full.
    pub fn best_column(&mut self, grid: &mut Grid, ai_tag: Tag) -> Option<usize> {
        self.search(grid, ai_tag).map(|result| result.column)
    }

    /// Search every playable column and keep the strictly best one.
    ///
    /// Ties go to the lowest column index. Each root child is searched with
    /// a full window, so its score is exact whether or not pruning is on.
    pub fn search(&mut self, grid: &mut Grid, ai_tag: Tag) -> Option<SearchResult> {
        let start = Instant::now();
        self.stats.reset();

        let depth = self.config.depth.max(1);
        let mut best: Option<SearchResult> = None;

        for column in grid.legal_columns() {
            grid.make_move(column, ai_tag);
            let score = self.minimax(grid, depth - 1, i32::MIN, i32::MAX, false, ai_tag);
            grid.undo_move(column);

            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { column, score });
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(result) = best {
            self.stats.best_score = result.score;
        }

        trace!(
            ?best,
            depth,
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );

        best
    }

    /// Value of the position for `ai_tag`, with `maximizing` telling whose
    /// move it is (the AI's when true).
    fn minimax(
        &mut self,
        grid: &mut Grid,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_tag: Tag,
    ) -> i32 {
        self.stats.nodes += 1;

        let opponent = ai_tag.opponent();
        if grid.is_winning_tag(ai_tag) {
            return WIN_SCORE + depth as i32;
        }
        if grid.is_winning_tag(opponent) {
            return -WIN_SCORE - depth as i32;
        }
        if depth == 0 || !grid.any_moves_left() {
            self.stats.evaluations += 1;
            return self.evaluator.evaluate(grid, ai_tag);
        }

        let mover = if maximizing { ai_tag } else { opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in grid.legal_columns() {
            grid.make_move(column, mover);
            let score = self.minimax(grid, depth - 1, alpha, beta, !maximizing, ai_tag);
            grid.undo_move(column);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
