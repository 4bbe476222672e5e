//! The 3x3 board.

use crate::error::GameError;
use crate::types::{Cell, Move, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board, stored row-major.
///
/// A cell moves from [`Cell::Empty`] to a mark exactly once. [`Board::set`]
/// refuses to overwrite or clear a cell, so a board only ever gains marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board. Every call returns a fresh value.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Returns the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GameError::OutOfRange { row, col })
    }

    /// Returns the cell targeted by a move.
    pub fn cell(&self, mv: Move) -> Result<Cell, GameError> {
        self.get(mv.row(), mv.col())
    }

    /// Places a mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for bad coordinates, `CellOccupied` if the cell already
    /// holds a mark, `InvalidMark` if `mark` is [`Cell::Empty`].
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, mark: Cell) -> Result<(), GameError> {
        let mv = Move::new(row, col)?;
        if mark.is_empty() {
            return Err(GameError::InvalidMark);
        }
        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(mv));
        }
        *cell = mark;
        Ok(())
    }

    /// Places a mark at the coordinates of `mv`.
    pub fn place(&mut self, mv: Move, mark: Cell) -> Result<(), GameError> {
        self.set(mv.row(), mv.col(), mark)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Move::from_index(i))
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
