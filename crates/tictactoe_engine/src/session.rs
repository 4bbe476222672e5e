//! Per-user game session and its move-processing state machine.

use crate::board::Board;
use crate::error::GameError;
use crate::opponent::Opponent;
use crate::rules::{has_winner, is_full};
use crate::types::{Cell, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle state of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Terminal. The session is replaced on the next start.
    Finished,
}

/// Why a player move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    CellOccupied,
}

/// Result of processing one player move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both sides moved, game goes on.
    #[display("continue")]
    Continue,
    /// The player completed a line.
    #[display("player won")]
    PlayerWon,
    /// The opponent completed a line.
    #[display("opponent won")]
    OpponentWon,
    /// Board filled with no line.
    #[display("draw")]
    Draw,
    /// Move ignored, board unchanged.
    #[display("rejected: {}", _0)]
    Rejected(RejectReason),
}

impl Outcome {
    /// True for outcomes that end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::PlayerWon | Outcome::OpponentWon | Outcome::Draw)
    }
}

/// One user's game: board plus phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    phase: Phase,
}

impl Session {
    /// Starts a new game on an empty board.
    #[instrument]
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::InProgress,
        }
    }

    pub(crate) fn from_parts(board: Board, phase: Phase) -> Self {
        Self { board, phase }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Processes one player move and, if the game goes on, the opponent's
    /// reply.
    ///
    /// The board is checked after every single placement, so a win found
    /// right after a placement belongs to whoever just placed.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the session is finished, `OutOfRange` for a move
    /// outside the board, `NoLegalMove` if the opponent cannot move. Both mean the caller routed the event wrongly.
    #[instrument(skip(self, opponent), fields(row = mv.row(), col = mv.col()))]
    pub fn process_player_move(
        &mut self,
        mv: Move,
        opponent: &dyn Opponent,
    ) -> Result<Outcome, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::InvalidState);
        }

        if !self.board.cell(mv)?.is_empty() {
            debug!("Player picked an occupied cell");
            return Ok(Outcome::Rejected(RejectReason::CellOccupied));
        }

        self.board.place(mv, Cell::PlayerMark)?;
        if has_winner(&self.board) {
            return Ok(self.finish(Outcome::PlayerWon));
        }
        if is_full(&self.board) {
            return Ok(self.finish(Outcome::Draw));
        }

        let reply = opponent.choose_move(&self.board)?;
        self.board.place(reply, Cell::OpponentMark)?;
        debug!(row = reply.row(), col = reply.col(), "Opponent replied");
        if has_winner(&self.board) {
            return Ok(self.finish(Outcome::OpponentWon));
        }
        if is_full(&self.board) {
            return Ok(self.finish(Outcome::Draw));
        }

        Ok(Outcome::Continue)
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.phase = Phase::Finished;
        info!(%outcome, "Game finished");
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}
