//! Gateway error types.

use tictactoe_engine::GameError;

/// Error raised while handling an inbound event.
///
/// Either variant rejects the event. An occupied cell is not an error; it
/// renders as a retry prompt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GatewayError {
    /// Command was neither `start` nor a two-digit cell coordinate.
    #[display("Invalid command {:?}: expected `start` or a cell like `12`", _0)]
    InvalidCommand(#[error(not(source))] String),

    /// The engine refused the event. Points at a routing bug.
    #[display("Game error: {}", _0)]
    #[from]
    Game(GameError),
}
