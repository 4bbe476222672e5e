//! Move selection for the automated opponent.

use crate::board::Board;
use crate::error::GameError;
use crate::types::Move;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

/// Picks one of the empty cells uniformly at random.
///
/// # Errors
///
/// `NoLegalMove` if the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, GameError> {
    let mv = board
        .empty_cells()
        .choose(rng)
        .ok_or(GameError::NoLegalMove)?;
    debug!(row = mv.row(), col = mv.col(), "Opponent chose cell");
    Ok(mv)
}

/// Something that can answer the player's move.
pub trait Opponent: Send + Sync {
    /// Chooses a legal move on `board`.
    fn choose_move(&self, board: &Board) -> Result<Move, GameError>;
}

/// Opponent that plays uniformly at random among legal cells.
#[derive(Debug)]
pub enum RandomOpponent {
    /// Draws from the thread-local RNG.
    Entropy,
    /// Draws from a seeded RNG shared by every caller.
    Seeded(Mutex<StdRng>),
}

impl RandomOpponent {
    /// Opponent backed by OS entropy.
    pub fn new() -> Self {
        Self::Entropy
    }

    /// Reproducible opponent.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&self, board: &Board) -> Result<Move, GameError> {
        match self {
            Self::Entropy => choose_move(board, &mut rand::thread_rng()),
            Self::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                choose_move(board, &mut *rng)
            }
        }
    }
}
