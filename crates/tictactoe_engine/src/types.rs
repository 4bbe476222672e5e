//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// One square of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Free square.
    #[default]
    Empty,
    /// Mark of the human player (X).
    PlayerMark,
    /// Mark of the automated opponent (O).
    OpponentMark,
}

impl Cell {
    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Chat symbol for this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => ".",
            Cell::PlayerMark => "X",
            Cell::OpponentMark => "O",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A board coordinate chosen by one of the players.
///
/// Construction through [`Move::new`] guarantees both indices are in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Move`].
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = GameError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    /// Creates a move, checking the coordinates.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Builds a move from a row-major index (0-8).
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Row index (0-2).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    /// Parses the two-digit callback encoding: row digit then column digit.
    ///
    /// Only `"00"` through `"22"` are accepted.
    pub fn from_callback(data: &str) -> Option<Self> {
        let &[r, c] = data.as_bytes() else {
            return None;
        };
        let digit = |b: u8| matches!(b, b'0'..=b'2').then(|| usize::from(b - b'0'));
        Some(Self {
            row: digit(r)?,
            col: digit(c)?,
        })
    }

    /// Two-digit callback encoding of this move.
    pub fn to_callback(&self) -> String {
        format!("{}{}", self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}
