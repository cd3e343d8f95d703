//! Core domain types shared by the board, rules, and session layers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Marker {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if no mark has been placed in this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker occupying this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(marker) => write!(f, "{marker}"),
        }
    }
}

/// A participant in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Which marker this player places.
    marker: Marker,
    /// Display name.
    name: String,
}

impl Player {
    /// Creates a player with the given marker and display name.
    pub fn new(marker: Marker, name: impl Into<String>) -> Self {
        Self {
            marker,
            name: name.into(),
        }
    }
}
