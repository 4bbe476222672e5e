//! Tic-tac-toe engine for a chat bot.
//!
//! Pure, synchronous game logic: the board, win and draw rules, a random
//! opponent, the per-user session state machine, and the keyed session store
//! that serializes events per user.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Move, Outcome, RandomOpponent, SessionStore};
//!
//! let store = SessionStore::new();
//! let opponent = RandomOpponent::seeded(7);
//! let outcome = store.with_session("alice", |session| {
//!     session.process_player_move(Move::new(1, 1)?, &opponent)
//! })?;
//! assert_eq!(outcome, Outcome::Continue);
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod opponent;
pub mod rules;
mod session;
mod store;
mod types;

pub use board::Board;
pub use error::GameError;
pub use opponent::{Opponent, RandomOpponent, choose_move};
pub use rules::{has_winner, is_draw, is_full};
pub use session::{Outcome, Phase, RejectReason, Session};
pub use store::{SessionHandle, SessionStore, UserId, lock};
pub use types::{Cell, Move, SIZE};
