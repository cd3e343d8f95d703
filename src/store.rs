//! Session store seam: the external persistence collaborator.
//!
//! The engine never touches a store directly. Callers load a session, run
//! [`crate::apply_move`], then save the result. Implementations must
//! guarantee at most one effective writer per session id across that whole
//! sequence, here via optimistic versioning: every accepted move advances
//! the session version, and a save that does not advance the stored version
//! is rejected as stale.

use crate::session::{GameSession, SessionId};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Error raised by session store operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// No session exists with the given id.
    #[display("No session found with id {_0}")]
    NotFound(#[error(not(source))] SessionId),

    /// A session with the given id already exists.
    #[display("Session {_0} already exists")]
    AlreadyExists(#[error(not(source))] SessionId),

    /// The saved snapshot is stale: the store already holds that version
    /// or a newer one.
    #[display("Session {id} is stale: store holds version {stored}, save carried {attempted}")]
    Conflict {
        /// Session id.
        id: SessionId,
        /// Version currently stored.
        stored: u64,
        /// Version carried by the rejected snapshot.
        attempted: u64,
    },
}

/// Persistence boundary for game sessions.
///
/// Implementations own write serialization: at most one effective writer
/// per session id, via optimistic versioning or a per-id lock.
pub trait GameStore {
    /// Inserts a new session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] when the id is taken.
    fn create(&self, session: GameSession) -> Result<(), StoreError>;

    /// Loads the session with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    fn load(&self, id: &str) -> Result<GameSession, StoreError>;

    /// Persists an updated session snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the session was never created,
    /// or [`StoreError::Conflict`] when the snapshot's version does not
    /// advance the stored one (another writer saved first).
    fn save(&self, session: GameSession) -> Result<(), StoreError>;
}

/// In-memory store backed by a mutex-guarded map.
///
/// The map lock serializes individual operations; lost updates across a
/// load, transform, save sequence are prevented by the version check in
/// [`GameStore::save`]. Cheap to clone; clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists all stored session ids.
    #[instrument(skip(self))]
    pub fn list_ids(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    fn create(&self, session: GameSession) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(session.id()) {
            warn!("Session already exists");
            return Err(StoreError::AlreadyExists(session.id().to_string()));
        }
        info!("Session created");
        sessions.insert(session.id().to_string(), session);
        Ok(())
    }

    #[instrument(skip(self))]
    fn load(&self, id: &str) -> Result<GameSession, StoreError> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            StoreError::NotFound(id.to_string())
        })
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    fn save(&self, session: GameSession) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let Some(stored) = sessions.get(session.id()) else {
            warn!("Saving unknown session");
            return Err(StoreError::NotFound(session.id().to_string()));
        };
        if session.version() <= stored.version() {
            warn!(
                stored = stored.version(),
                attempted = session.version(),
                "Stale snapshot rejected"
            );
            return Err(StoreError::Conflict {
                id: session.id().to_string(),
                stored: stored.version(),
                attempted: session.version(),
            });
        }
        sessions.insert(session.id().to_string(), session);
        debug!("Session updated");
        Ok(())
    }
}
