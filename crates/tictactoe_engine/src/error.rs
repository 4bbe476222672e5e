//! Contract errors raised by the engine.
//!
//! An occupied cell chosen by the player is not an error: the state machine
//! reports it as [`Outcome::Rejected`](crate::Outcome::Rejected). The variants
//! here mean a caller routed something the engine can never accept.

use crate::types::Move;

/// Error raised when an engine contract is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Row or column outside `0..=2`.
    #[display("Coordinates ({}, {}) are out of range (must be 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Move),

    /// Attempted to write `Empty` into a cell.
    #[display("Cells can only be set to a player or opponent mark")]
    InvalidMark,

    /// A move was routed to a session that is not in progress.
    #[display("Session is not in progress")]
    InvalidState,

    /// The opponent was asked to move on a full board.
    #[display("No legal move available: board is full")]
    NoLegalMove,
}
