//! Rule violation taxonomy.
//!
//! Every variant is a deterministic rejection of an invalid request, not a
//! system fault. Callers must correct the request rather than retry it, and
//! no failure leaves a session or board partially mutated.

use crate::session::GameState;
use crate::types::Marker;
use derive_more::{Display, Error};

/// Error raised when a board operation or move request is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board creation requested with a size below the minimum of 1.
    #[display("Invalid board size {_0}, must be at least 1")]
    InvalidSize(#[error(not(source))] usize),

    /// Move coordinates fall outside the board.
    #[display("Position ({row},{col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Board dimension.
        size: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({row},{col}) is already occupied")]
    CellOccupied {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },

    /// The marker that just played attempted to play again.
    #[display("{_0} has already played, it is the other player's turn")]
    NotPlayerTurn(#[error(not(source))] Marker),

    /// A move was attempted after the game reached a terminal state.
    #[display("Game already ended in state {_0}")]
    GameAlreadyEnded(#[error(not(source))] GameState),

    /// Both players in a roster claimed the same marker.
    #[display("Both players claim marker {_0}, markers must be distinct")]
    DuplicateMarker(#[error(not(source))] Marker),
}
