//! Rules engine: move validation and state derivation.
//!
//! [`apply_move`] is a pure snapshot transform: it reads one session
//! snapshot, validates the proposed move, and returns the updated snapshot.
//! The input session is never mutated, so a rejected move leaves no trace.

mod win;

pub use win::check_winner;

use crate::error::GameError;
use crate::session::{GameSession, GameState};
use crate::types::Marker;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A proposed move: a marker placed at a cell.
///
/// Moves are first-class domain values that can be validated before
/// application, serialized, and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Move {
    /// Target row index.
    row: usize,
    /// Target column index.
    col: usize,
    /// The marker being placed.
    marker: Marker,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({},{})", self.marker, self.row, self.col)
    }
}

/// Validates a move against the session and computes the resulting session.
///
/// Validation order: terminal state, bounds, occupancy, turn. All checks run
/// before any write, so a failure leaves the session wholly unchanged. On
/// success the marker is placed, `last_marker` is updated, the session
/// version advances, and the new state is derived: `Win` if a line through
/// the played cell is complete, `Draw` if the board filled without one,
/// `Running` otherwise.
///
/// Turn enforcement compares against the last-played marker rather than an
/// explicit turn owner: with exactly two distinct markers, "not the marker
/// that just played" is strict alternation. The first move accepts either
/// marker.
///
/// # Errors
///
/// - [`GameError::GameAlreadyEnded`] when the session is in a terminal state.
/// - [`GameError::OutOfBounds`] when the coordinates fall outside the board.
/// - [`GameError::CellOccupied`] when the target cell is already marked.
/// - [`GameError::NotPlayerTurn`] when the same marker plays twice in a row.
#[instrument(skip(session), fields(session_id = %session.id()))]
pub fn apply_move(session: &GameSession, mv: Move) -> Result<GameSession, GameError> {
    if session.state().is_terminal() {
        warn!(state = %session.state(), "Move attempted on ended game");
        return Err(GameError::GameAlreadyEnded(session.state()));
    }

    session.board().get(mv.row, mv.col).and_then(|cell| {
        if cell.is_empty() {
            Ok(())
        } else {
            Err(GameError::CellOccupied {
                row: mv.row,
                col: mv.col,
            })
        }
    })?;

    if session.last_marker() == Some(mv.marker) {
        warn!(marker = %mv.marker, "Marker played out of turn");
        return Err(GameError::NotPlayerTurn(mv.marker));
    }

    let mut next = session.clone();
    next.board.set(mv.row, mv.col, mv.marker)?;
    next.last_marker = Some(mv.marker);
    next.version += 1;

    if let Some(winner) = check_winner(next.board(), mv.row, mv.col) {
        next.winner = Some(winner);
        next.state = GameState::Win;
    } else if next.board().is_full() {
        next.state = GameState::Draw;
    } else {
        next.state = GameState::Running;
    }

    info!(%mv, state = %next.state(), "Move applied");
    Ok(next)
}
