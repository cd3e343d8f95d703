//! Game session record: the unit persisted and retrieved by a store.

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Lifecycle state of a game session.
///
/// `Started` and `Running` are non-terminal; `Win` and `Draw` are terminal
/// and absorbing, rejecting all further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameState {
    /// Board empty, no move made yet.
    Started,
    /// At least one move made, no winner, empty cells remain.
    Running,
    /// A full line of one marker exists.
    Win,
    /// Board full with no winner.
    Draw,
}

impl GameState {
    /// Returns true for `Win` and `Draw`, the absorbing states.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Win | GameState::Draw)
    }
}

/// One in-progress or completed game.
///
/// Created once with an empty board in [`GameState::Started`] and mutated
/// only through accepted moves. The session exclusively owns its board;
/// deletion is a store concern, never the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) id: SessionId,
    pub(crate) players: [Player; 2],
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) last_marker: Option<Marker>,
    pub(crate) winner: Option<Marker>,
    pub(crate) version: u64,
}

impl GameSession {
    /// Creates a new session with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateMarker`] when both players claim the
    /// same marker, or [`GameError::InvalidSize`] when `board_size` is zero.
    #[instrument(skip(players))]
    pub fn new(id: SessionId, players: [Player; 2], board_size: usize) -> Result<Self, GameError> {
        if players[0].marker() == players[1].marker() {
            return Err(GameError::DuplicateMarker(*players[0].marker()));
        }
        let board = Board::new(board_size)?;
        info!(session_id = %id, board_size, "Creating new game session");
        Ok(Self {
            id,
            players,
            board,
            state: GameState::Started,
            last_marker: None,
            winner: None,
            version: 0,
        })
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the two players.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player placing the given marker, if registered.
    pub fn player_for(&self, marker: Marker) -> Option<&Player> {
        self.players.iter().find(|p| *p.marker() == marker)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the marker that played most recently, or `None` before the
    /// first move.
    pub fn last_marker(&self) -> Option<Marker> {
        self.last_marker
    }

    /// Returns the winning marker once the session reaches [`GameState::Win`].
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Returns the optimistic-concurrency version.
    ///
    /// Starts at 0 and advances with every accepted move; stores use it to
    /// reject stale snapshots (see [`crate::GameStore::save`]).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns a one-line status summary for display.
    pub fn status_string(&self) -> String {
        match self.state {
            GameState::Started => "Ready to start".to_string(),
            GameState::Running => match self.last_marker {
                Some(marker) => format!("In progress. {} to move.", marker.opponent()),
                None => "In progress.".to_string(),
            },
            GameState::Win => match self.winner {
                Some(marker) => format!("Game over. {marker} wins!"),
                None => "Game over.".to_string(),
            },
            GameState::Draw => "Game over. Draw!".to_string(),
        }
    }
}
