//! The game controller: lifecycle, turn ownership, and AI dispatch.

use tracing::{debug, info, instrument};

use super::events::BoardEvent;
use crate::core::{Location, Player, PlayerId, PlayerMap, PLAYER_COUNT};
use crate::error::StateStringError;
use crate::rules::{GameResult, GameRules};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Lifecycle {
    /// No board set up (fresh session or after `stop_game`).
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// Decided; moves are rejected until the next setup.
    Over(GameResult),
}

/// One game session, owned by the presentation layer.
///
/// Owns the variant's rules (and through them the board), both seats, and
/// the turn. Every move, human or AI, goes through the same path: the
/// variant applies it, then `end_of_turn` checks for a winner, then a draw,
/// then hands the turn over.
pub struct GameSession {
    rules: Box<dyn GameRules>,
    players: PlayerMap<Player>,
    current: PlayerId,
    lifecycle: Lifecycle,
    events: Vec<BoardEvent>,
}

impl GameSession {
    /// Create a session for `rules`. Both seats start human-controlled.
    pub fn new(rules: Box<dyn GameRules>) -> Self {
        Self {
            rules,
            players: PlayerMap::new(PLAYER_COUNT, Player::human),
            current: PlayerId::new(0),
            lifecycle: Lifecycle::NotStarted,
            events: Vec::new(),
        }
    }

    /// The variant's rules.
    pub fn rules(&self) -> &dyn GameRules {
        self.rules.as_ref()
    }

    // === Lifecycle ===

    /// Reset the board and flags and start a game with player 0 on move.
    #[instrument(skip(self), fields(game = self.rules.name()))]
    pub fn set_up_board(&mut self) {
        self.rules.set_up();
        self.current = PlayerId::new(0);
        self.lifecycle = Lifecycle::InProgress;
        self.events.push(BoardEvent::BoardCleared);
        info!("board set up");
    }

    /// Release the board. Safe to call at any time, including before setup.
    #[instrument(skip(self), fields(game = self.rules.name()))]
    pub fn stop_game(&mut self) {
        self.rules.tear_down();
        self.lifecycle = Lifecycle::NotStarted;
        self.events.push(BoardEvent::BoardCleared);
        info!("game stopped");
    }

    /// Stop and set up again. AI flags are kept.
    pub fn reset(&mut self) {
        self.stop_game();
        self.set_up_board();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_in_progress(&self) -> bool {
        self.lifecycle == Lifecycle::InProgress
    }

    pub fn is_over(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Over(_))
    }

    /// Final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.lifecycle {
            Lifecycle::Over(result) => Some(result),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.result()
            .and_then(|result| result.winner())
            .map(|id| self.players[id])
    }

    pub fn is_draw(&self) -> bool {
        self.result() == Some(GameResult::Draw)
    }

    // === Turns and seats ===

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn current_player_index(&self) -> usize {
        self.current.index()
    }

    /// Whether `player` is AI-controlled. Unknown seats are not.
    pub fn is_ai_controlled(&self, player: PlayerId) -> bool {
        self.players.try_get(player).is_some_and(|p| p.ai_controlled)
    }

    /// Hand `player` to the AI or back to a human. Allowed mid-game.
    pub fn set_ai_controlled(&mut self, player: PlayerId, ai_controlled: bool) {
        match self.players.try_get_mut(player) {
            Some(seat) => seat.ai_controlled = ai_controlled,
            None => debug!(%player, "ignoring AI flag for unknown seat"),
        }
    }

    /// True when the presentation layer should call `update_ai` this tick.
    pub fn needs_ai_move(&self) -> bool {
        self.is_in_progress() && self.rules.has_ai() && self.is_ai_controlled(self.current)
    }

    // === Moves ===

    /// The player on move acts on `location`.
    ///
    /// Returns `false` with no state change if the game is not in progress
    /// or the variant rejects the action.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn action_on_cell(&mut self, location: Location) -> bool {
        if !self.is_in_progress() {
            debug!(lifecycle = ?self.lifecycle, "action rejected: game not in progress");
            return false;
        }
        self.apply(location)
    }

    /// Let the variant's AI move for the player on move.
    ///
    /// No-op (returns `false`) if the game is not in progress or the
    /// variant has no move to offer.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn update_ai(&mut self) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        match self.rules.choose_ai_action(self.current) {
            Some(location) => self.apply(location),
            None => {
                debug!("AI has no move");
                false
            }
        }
    }

    fn apply(&mut self, location: Location) -> bool {
        let Some(placed) = self.rules.attempt_action(location, self.current) else {
            debug!(%location, "action rejected");
            return false;
        };

        debug!(%location, %placed, "action accepted");
        self.events.push(BoardEvent::PiecePlaced {
            location: placed,
            owner: self.current,
        });
        self.end_of_turn();
        true
    }

    /// Decide the game or pass the turn.
    fn end_of_turn(&mut self) {
        match self.rules.is_terminal() {
            Some(result) => self.finish(result),
            None => self.current = self.current.other(),
        }
    }

    fn finish(&mut self, result: GameResult) {
        info!(?result, "game over");
        self.lifecycle = Lifecycle::Over(result);
        self.events.push(BoardEvent::GameOver(result));
    }

    // === State strings ===

    pub fn state_string(&self) -> String {
        self.rules.state_string()
    }

    pub fn initial_state_string(&self) -> String {
        self.rules.initial_state_string()
    }

    /// Import a board. Returns `false` and keeps the current state if the
    /// string is rejected.
    pub fn set_state_string(&mut self, state: &str) -> bool {
        match self.try_set_state_string(state) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "state string rejected");
                false
            }
        }
    }

    /// Import a board, reporting why it was rejected.
    ///
    /// On success the player on move is the one with fewer pieces (player 0
    /// on a tie), and a decided position ends the game immediately.
    pub fn try_set_state_string(&mut self, state: &str) -> Result<(), StateStringError> {
        if self.lifecycle == Lifecycle::NotStarted {
            return Err(StateStringError::NotSetUp);
        }
        self.rules.set_state_string(state)?;

        let pieces = self.rules.pieces();
        let mut counts = PlayerMap::with_value(PLAYER_COUNT, 0usize);
        self.events.push(BoardEvent::BoardCleared);
        for &(location, owner) in &pieces {
            if let Some(count) = counts.try_get_mut(owner) {
                *count += 1;
            }
            self.events.push(BoardEvent::PiecePlaced { location, owner });
        }

        let (first, second) = (PlayerId::new(0), PlayerId::new(1));
        self.current = if counts[second] < counts[first] { second } else { first };
        self.lifecycle = Lifecycle::InProgress;

        if let Some(result) = self.rules.is_terminal() {
            self.finish(result);
        }
        info!(pieces = pieces.len(), player = %self.current, "state imported");
        Ok(())
    }

    // === Presentation callbacks ===

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect4::Connect4;
    use crate::games::tictactoe::TicTacToe;

    fn connect4() -> GameSession {
        let mut session = GameSession::new(Box::new(Connect4::new()));
        session.set_up_board();
        session
    }

    #[test]
    fn test_new_session_not_started() {
        let mut session = GameSession::new(Box::new(Connect4::new()));
        assert_eq!(session.lifecycle(), Lifecycle::NotStarted);
        assert!(!session.action_on_cell(Location::new(0, 0)));
        assert!(!session.update_ai());
        assert!(!session.set_state_string(&session.initial_state_string()));
    }

    #[test]
    fn test_stop_before_setup_is_safe() {
        let mut session = GameSession::new(Box::new(TicTacToe::new()));
        session.stop_game();
        assert_eq!(session.lifecycle(), Lifecycle::NotStarted);
        assert_eq!(session.drain_events(), vec![BoardEvent::BoardCleared]);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = connect4();
        assert_eq!(session.current_player_index(), 0);

        assert!(session.action_on_cell(Location::new(3, 0)));
        assert_eq!(session.current_player_index(), 1);

        assert!(session.action_on_cell(Location::new(3, 0)));
        assert_eq!(session.current_player_index(), 0);
    }

    #[test]
    fn test_rejected_action_keeps_turn() {
        let mut session = connect4();
        assert!(!session.action_on_cell(Location::new(9, 0)));
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.state_string(), session.initial_state_string());
    }

    #[test]
    fn test_events_for_moves() {
        let mut session = connect4();
        session.drain_events();

        session.action_on_cell(Location::new(1, 0));
        assert_eq!(
            session.drain_events(),
            vec![BoardEvent::PiecePlaced {
                location: Location::new(1, 5),
                owner: PlayerId::new(0),
            }]
        );
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_ai_flags() {
        let mut session = connect4();
        assert!(!session.is_ai_controlled(PlayerId::new(1)));
        assert!(!session.needs_ai_move());

        session.set_ai_controlled(PlayerId::new(0), true);
        assert!(session.is_ai_controlled(PlayerId::new(0)));
        assert!(session.needs_ai_move());

        session.set_ai_controlled(PlayerId::new(7), true);
        assert!(!session.is_ai_controlled(PlayerId::new(7)));
    }

    #[test]
    fn test_reset_keeps_ai_flags() {
        let mut session = connect4();
        session.set_ai_controlled(PlayerId::new(1), true);
        session.action_on_cell(Location::new(0, 0));

        session.reset();

        assert!(session.is_in_progress());
        assert_eq!(session.current_player_index(), 0);
        assert!(session.is_ai_controlled(PlayerId::new(1)));
        assert_eq!(session.state_string(), session.initial_state_string());
    }

    #[test]
    fn test_tictactoe_has_no_ai_move() {
        let mut session = GameSession::new(Box::new(TicTacToe::new()));
        session.set_up_board();
        session.set_ai_controlled(PlayerId::new(0), true);

        assert!(!session.needs_ai_move());
        assert!(!session.update_ai());
        assert_eq!(session.current_player_index(), 0);
    }
}
