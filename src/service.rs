//! Orchestration over a store: start, play, fetch.
//!
//! The service composes the store collaborator with the rules engine:
//! fetch a snapshot, transform it, persist the result. It adds no game
//! logic of its own.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::{Move, apply_move};
use crate::session::{GameSession, SessionId};
use crate::store::{GameStore, StoreError};
use crate::types::Player;
use derive_more::{Display, Error, From};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, instrument};

/// Error raised by service operations: either a rule violation or a store
/// failure, surfaced unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ServiceError {
    /// The move or creation request violated the game rules.
    #[display("{_0}")]
    Rules(GameError),
    /// The store rejected the operation.
    #[display("{_0}")]
    Store(StoreError),
}

/// Game service over a session store.
///
/// Session ids are opaque; this service mints them from a process-local
/// counter. Uniqueness across processes is the store's concern.
#[derive(Debug)]
pub struct GameService<S> {
    store: S,
    next_id: AtomicU64,
}

impl<S: GameStore> GameService<S> {
    /// Creates a service over the given store.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self {
            store,
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn mint_id(&self) -> SessionId {
        format!("game-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Starts a new game: fresh session with an empty board, persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Rules`] for an invalid roster or board size,
    /// or [`ServiceError::Store`] when the minted id collides.
    #[instrument(skip(self, players))]
    pub fn start_game(
        &self,
        players: [Player; 2],
        config: GameConfig,
    ) -> Result<GameSession, ServiceError> {
        let session = GameSession::new(self.mint_id(), players, config.board_size)?;
        self.store.create(session.clone())?;
        info!(session_id = %session.id(), "Game started");
        Ok(session)
    }

    /// Plays one move: load, apply, save, return the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] for an unknown session id or when a
    /// concurrent writer saved first (stale snapshot), or
    /// [`ServiceError::Rules`] when the move is rejected; a rejected move
    /// persists nothing.
    #[instrument(skip(self))]
    pub fn play(&self, id: &str, mv: Move) -> Result<GameSession, ServiceError> {
        let session = self.store.load(id)?;
        let updated = apply_move(&session, mv)?;
        self.store.save(updated.clone())?;
        Ok(updated)
    }

    /// Fetches the current snapshot of a session.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] for an unknown session id.
    #[instrument(skip(self))]
    pub fn fetch(&self, id: &str) -> Result<GameSession, ServiceError> {
        Ok(self.store.load(id)?)
    }
}
