//! Tic-tac-toe rules.

use crate::board::state_string;
use crate::core::{Location, PlayerId, Tag};
use crate::error::StateStringError;
use crate::rules::GameRules;

const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;

/// Winning combinations, as row-major cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Three-in-a-row on a 3x3 board. No AI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Tag; CELLS],
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag at `location`, empty when off the board.
    pub fn get(&self, location: Location) -> Tag {
        if location.column < SIDE && location.row < SIDE {
            self.cells[location.index(SIDE)]
        } else {
            Tag::EMPTY
        }
    }

    fn is_winning_tag(&self, tag: Tag) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == tag))
    }
}

impl GameRules for TicTacToe {
    fn name(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn dimensions(&self) -> (usize, usize) {
        (SIDE, SIDE)
    }

    fn set_up(&mut self) {
        self.cells = [Tag::EMPTY; CELLS];
    }

    fn tear_down(&mut self) {
        self.cells = [Tag::EMPTY; CELLS];
    }

    fn attempt_action(&mut self, location: Location, player: PlayerId) -> Option<Location> {
        if location.column >= SIDE || location.row >= SIDE {
            return None;
        }
        let cell = &mut self.cells[location.index(SIDE)];
        if !cell.is_empty() {
            return None;
        }
        *cell = Tag::for_player(player);
        Some(location)
    }

    fn check_winner(&self) -> Option<PlayerId> {
        Tag::PLAYERS
            .into_iter()
            .find(|&tag| self.is_winning_tag(tag))
            .and_then(Tag::owner)
    }

    fn check_draw(&self) -> bool {
        self.check_winner().is_none() && self.cells.iter().all(|t| !t.is_empty())
    }

    fn state_string(&self) -> String {
        state_string::encode(self.cells)
    }

    fn set_state_string(&mut self, state: &str) -> Result<(), StateStringError> {
        let tags = state_string::decode(state, CELLS)?;
        self.cells.copy_from_slice(&tags);
        Ok(())
    }

    fn pieces(&self) -> Vec<(Location, PlayerId)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, tag)| {
                tag.owner()
                    .map(|owner| (Location::new(i % SIDE, i / SIDE), owner))
            })
            .collect()
    }
}
