//! Square game board: bounds-checked cell storage and line reads.

use crate::error::GameError;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// NxN grid of cells, N fixed at construction.
///
/// Cells are stored in row-major order. Every access is bounds-checked and
/// an occupied cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order (`row * size + col`).
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < 1 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Returns the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when either coordinate is outside
    /// `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Places a marker into an empty cell.
    ///
    /// Mutates exactly the target cell; on any error the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the board,
    /// or [`GameError::CellOccupied`] when the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::Occupied(marker);
        Ok(())
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the cells of row `i` in column order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is outside the board; line reads are internal to win
    /// detection, which only scans lines through an already-validated cell.
    pub fn row(&self, i: usize) -> Vec<Cell> {
        assert!(i < self.size, "row index within board");
        (0..self.size)
            .map(|col| self.cells[i * self.size + col])
            .collect()
    }

    /// Returns the cells of column `i` in row order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is outside the board.
    pub fn column(&self, i: usize) -> Vec<Cell> {
        assert!(i < self.size, "column index within board");
        (0..self.size)
            .map(|row| self.cells[row * self.size + i])
            .collect()
    }

    /// Returns the main diagonal (cells where row equals column).
    pub fn main_diagonal(&self) -> Vec<Cell> {
        (0..self.size)
            .map(|i| self.cells[i * self.size + i])
            .collect()
    }

    /// Returns the anti-diagonal (cells where row plus column equals size - 1).
    pub fn anti_diagonal(&self) -> Vec<Cell> {
        (0..self.size)
            .map(|i| self.cells[i * self.size + (self.size - 1 - i)])
            .collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                result.push_str(&self.cells[row * self.size + col].to_string());
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}
