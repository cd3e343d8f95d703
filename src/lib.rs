//! Gridgame - turn-based grid game rules engine.
//!
//! Two players take turns marking cells on an NxN grid until one completes
//! a line (row, column, or diagonal) or the grid fills with no winner.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked cell grid with line accessors
//! - **Rules**: [`apply_move`], a pure snapshot-in/snapshot-out transform
//! - **Session**: the persisted game record (board, state, roster)
//! - **Store**: persistence seam ([`GameStore`]) with an in-memory impl
//! - **Service**: start/play/fetch orchestration over a store
//!
//! # Example
//!
//! ```
//! use gridgame::{GameConfig, GameService, GameState, Marker, MemoryStore, Move, Player};
//!
//! # fn main() -> Result<(), gridgame::ServiceError> {
//! let service = GameService::new(MemoryStore::new());
//! let players = [Player::new(Marker::X, "Alice"), Player::new(Marker::O, "Bob")];
//! let session = service.start_game(players, GameConfig::default())?;
//!
//! let session = service.play(session.id(), Move::new(0, 0, Marker::X))?;
//! assert_eq!(session.state(), GameState::Running);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod rules;
mod service;
mod session;
mod store;
mod types;

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Rules engine
pub use rules::{Move, apply_move, check_winner};

// Crate-level exports - Service orchestration
pub use service::{GameService, ServiceError};

// Crate-level exports - Session record
pub use session::{GameSession, GameState, SessionId};

// Crate-level exports - Store seam
pub use store::{GameStore, MemoryStore, StoreError};

// Crate-level exports - Domain types
pub use types::{Cell, Marker, Player};
