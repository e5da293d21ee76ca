//! Board events for the presentation layer.
//!
//! The session never draws anything. It records what changed on the board
//! and the presentation layer drains the queue once per frame to create or
//! destroy its renderable pieces.

use serde::{Deserialize, Serialize};

use crate::core::{Location, PlayerId};
use crate::rules::GameResult;

/// Something the presentation layer should reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A piece owned by `owner` now sits on `location`.
    PiecePlaced { location: Location, owner: PlayerId },

    /// Every piece left the board.
    BoardCleared,

    /// The game ended.
    GameOver(GameResult),
}
