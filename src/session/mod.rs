//! Game sessions: the controller the presentation layer talks to.
//!
//! ## Lifecycle
//!
//! `NotStarted -> InProgress -> Over(Winner | Draw)`. `set_up_board` starts
//! a game, `stop_game` returns to `NotStarted`, and moves after the game is
//! decided are rejected.
//!
//! ## Usage
//!
//! ```rust
//! use rust_boardgame::core::{Location, PlayerId};
//! use rust_boardgame::games::connect4::Connect4Builder;
//! use rust_boardgame::session::GameSession;
//!
//! let mut session = GameSession::new(Box::new(Connect4Builder::new().search_depth(3).build()));
//! session.set_up_board();
//! session.set_ai_controlled(PlayerId::new(1), true);
//!
//! // One call per frame: a human click, or an AI move when it is the AI's turn.
//! assert!(session.action_on_cell(Location::new(3, 0)));
//! if session.needs_ai_move() {
//!     session.update_ai();
//! }
//! assert_eq!(session.current_player_index(), 0);
//! ```

pub mod events;
pub mod game_session;

pub use events::BoardEvent;
pub use game_session::{GameSession, Lifecycle};
