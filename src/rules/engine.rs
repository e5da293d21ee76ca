//! Game rules trait for variant implementations.
//!
//! Variants implement `GameRules` to define their rules:
//! - How a player's action on a cell changes the board
//! - Win and draw conditions
//! - State-string import/export
//! - Optionally, how the AI picks its action

use crate::board::state_string;
use crate::core::{Location, PlayerId};
use crate::error::StateStringError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board exhausted with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rules of one game variant.
///
/// The session calls these methods during play and never inspects the
/// variant's board directly.
///
/// ## Implementation Notes
///
/// - `attempt_action`: return `None` and leave the board untouched when the
///   action is illegal
/// - `check_winner` / `check_draw`: pure queries, never both positive
/// - `set_state_string`: leave the board untouched on error
pub trait GameRules {
    /// Display name of the variant.
    fn name(&self) -> &'static str;

    /// Board size as `(columns, rows)`.
    fn dimensions(&self) -> (usize, usize);

    /// Clear the board for a new game.
    fn set_up(&mut self);

    /// Release the board. Must be safe without a prior `set_up`.
    fn tear_down(&mut self);

    /// Apply `player`'s action on `location`.
    ///
    /// Returns the cell that received the piece, which may differ from
    /// `location` (drop games land at the bottom of the column).
    fn attempt_action(&mut self, location: Location, player: PlayerId) -> Option<Location>;

    /// The player with a winning line, checked in player order.
    fn check_winner(&self) -> Option<PlayerId>;

    /// No winner and no legal move left.
    fn check_draw(&self) -> bool;

    /// Current board as one digit per cell, row-major from the top row.
    fn state_string(&self) -> String;

    /// Replace the board from a state string.
    fn set_state_string(&mut self, state: &str) -> Result<(), StateStringError>;

    /// Occupied cells and their owners, row-major from the top row.
    fn pieces(&self) -> Vec<(Location, PlayerId)>;

    /// Empty-board state string.
    fn initial_state_string(&self) -> String {
        let (columns, rows) = self.dimensions();
        state_string::initial(columns * rows)
    }

    /// Whether the variant can choose moves for AI-controlled seats.
    fn has_ai(&self) -> bool {
        false
    }

    /// Pick an action for `player`. `None` if the variant has no AI or no
    /// legal action exists.
    fn choose_ai_action(&mut self, player: PlayerId) -> Option<Location> {
        let _ = player;
        None
    }

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    /// The winner is checked before the draw.
    fn is_terminal(&self) -> Option<GameResult> {
        if let Some(winner) = self.check_winner() {
            Some(GameResult::Winner(winner))
        } else if self.check_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}
