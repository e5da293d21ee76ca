//! Connect 4 rules and AI.

use tracing::debug;

use crate::board::{state_string, Grid};
use crate::config::EngineConfig;
use crate::core::{BoardConfig, Location, PlayerId, Tag};
use crate::error::StateStringError;
use crate::rules::GameRules;
use crate::search::{AlphaBeta, SearchConfig, SearchStats};

/// Four-in-a-row drop game.
pub struct Connect4 {
    grid: Grid,
    search: AlphaBeta,
}

/// Builder for creating a Connect4 game.
pub struct Connect4Builder {
    board: BoardConfig,
    search: SearchConfig,
}

impl Default for Connect4Builder {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Connect4Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a validated engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            board: config.board,
            search: config.search.clone(),
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        assert!((4..=16).contains(&columns), "Columns must be 4-16");
        self.board.columns = columns;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        assert!((4..=16).contains(&rows), "Rows must be 4-16");
        self.board.rows = rows;
        self
    }

    pub fn search_depth(mut self, depth: u32) -> Self {
        assert!(depth > 0, "Search depth must be at least 1");
        self.search.depth = depth;
        self
    }

    pub fn alpha_beta(mut self, enabled: bool) -> Self {
        self.search.alpha_beta = enabled;
        self
    }

    /// Build the game with an empty board.
    pub fn build(self) -> Connect4 {
        Connect4 {
            grid: Grid::from_config(&self.board),
            search: AlphaBeta::new(self.search),
        }
    }
}

impl Connect4 {
    /// Standard 7x6 game searching 5 plies.
    pub fn new() -> Self {
        Connect4Builder::new().build()
    }

    /// Get the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics of the last AI search.
    pub fn search_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for Connect4 {
    fn name(&self) -> &'static str {
        "Connect 4"
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.grid.columns(), self.grid.rows())
    }

    fn set_up(&mut self) {
        self.grid.clear();
    }

    fn tear_down(&mut self) {
        self.grid.clear();
    }

    fn attempt_action(&mut self, location: Location, player: PlayerId) -> Option<Location> {
        // Any cell of a column targets that column.
        if location.row >= self.grid.rows() {
            return None;
        }
        let column = location.column;
        let row = self.grid.top_open_row(column)?;

        self.grid.make_move(column, Tag::for_player(player));
        Some(Location::new(column, row))
    }

    fn check_winner(&self) -> Option<PlayerId> {
        Tag::PLAYERS
            .into_iter()
            .find(|&tag| self.grid.is_winning_tag(tag))
            .and_then(Tag::owner)
    }

    fn check_draw(&self) -> bool {
        self.check_winner().is_none() && !self.grid.any_moves_left()
    }

    fn state_string(&self) -> String {
        state_string::encode(self.grid.cells())
    }

    fn set_state_string(&mut self, state: &str) -> Result<(), StateStringError> {
        let tags = state_string::decode(state, self.grid.cell_count())?;
        self.grid.import(&tags)
    }

    fn pieces(&self) -> Vec<(Location, PlayerId)> {
        self.grid
            .occupied()
            .filter_map(|(location, tag)| tag.owner().map(|owner| (location, owner)))
            .collect()
    }

    fn has_ai(&self) -> bool {
        true
    }

    fn choose_ai_action(&mut self, player: PlayerId) -> Option<Location> {
        let tag = Tag::for_player(player);
        let result = self.search.search(&mut self.grid, tag)?;
        let row = self.grid.top_open_row(result.column)?;

        debug!(
            %player,
            column = result.column,
            score = result.score,
            nodes = self.search.stats().nodes,
            "AI chose column"
        );
        Some(Location::new(result.column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Connect4Builder::new().columns(8).rows(7).search_depth(3).build();
        assert_eq!(game.dimensions(), (8, 7));
        assert_eq!(game.initial_state_string().len(), 56);
        assert_eq!(game.name(), "Connect 4");
        assert!(game.has_ai());
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default().with_board(5, 4).with_search_depth(2);
        let game = Connect4Builder::from_config(&config).build();
        assert_eq!(game.dimensions(), (5, 4));
    }

    #[test]
    #[should_panic(expected = "Columns must be 4-16")]
    fn test_builder_rejects_narrow_board() {
        let _ = Connect4Builder::new().columns(3);
    }

    #[test]
    fn test_action_drops_to_bottom() {
        let mut game = Connect4::new();
        let placed = game.attempt_action(Location::new(2, 0), PlayerId::new(0));
        assert_eq!(placed, Some(Location::new(2, 5)));

        let placed = game.attempt_action(Location::new(2, 3), PlayerId::new(1));
        assert_eq!(placed, Some(Location::new(2, 4)));

        assert_eq!(game.grid().tag_at(2, 5), Tag(1));
        assert_eq!(game.grid().tag_at(2, 4), Tag(2));
    }

    #[test]
    fn test_action_rejects_out_of_range() {
        let mut game = Connect4::new();
        assert_eq!(game.attempt_action(Location::new(7, 0), PlayerId::new(0)), None);
        assert_eq!(game.attempt_action(Location::new(0, 6), PlayerId::new(0)), None);
        assert_eq!(game.state_string(), game.initial_state_string());
    }

    #[test]
    fn test_action_rejects_full_column() {
        let mut game = Connect4::new();
        for i in 0..6 {
            assert!(game
                .attempt_action(Location::new(0, 0), PlayerId::new(i % 2))
                .is_some());
        }
        let before = game.state_string();
        assert_eq!(game.attempt_action(Location::new(0, 0), PlayerId::new(0)), None);
        assert_eq!(game.state_string(), before);
    }

    #[test]
    fn test_state_string_row_major_from_top() {
        let mut game = Connect4::new();
        game.attempt_action(Location::new(0, 0), PlayerId::new(0));
        game.attempt_action(Location::new(6, 0), PlayerId::new(1));

        let s = game.state_string();
        assert_eq!(&s[35..42], "1000002");
        assert!(s[..35].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_pieces_report_owners() {
        let mut game = Connect4::new();
        game.attempt_action(Location::new(3, 0), PlayerId::new(1));
        assert_eq!(game.pieces(), vec![(Location::new(3, 5), PlayerId::new(1))]);
    }

    #[test]
    fn test_winner_and_draw() {
        let mut game = Connect4::new();
        let mut column_zero = "0".repeat(42).into_bytes();
        for row in 2..6 {
            column_zero[row * 7] = b'1';
        }
        let state = String::from_utf8(column_zero).unwrap();
        game.set_state_string(&state).unwrap();

        assert_eq!(game.check_winner(), Some(PlayerId::new(0)));
        assert!(!game.check_draw());
    }

    #[test]
    fn test_ai_action_is_playable() {
        let mut game = Connect4Builder::new().search_depth(2).build();
        let before = game.state_string();

        let location = game.choose_ai_action(PlayerId::new(0)).unwrap();
        assert_eq!(location.row, 5);
        assert_eq!(game.state_string(), before);
        assert!(game.search_stats().nodes > 0);
    }
}
