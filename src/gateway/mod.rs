//! Boundary between the chat transport and the game engine.
//!
//! The gateway turns an [`InboundEvent`] into a session-store lookup and a
//! state-machine call, then turns the result into a [`RenderInstruction`].

mod error;
mod event;
mod render;

pub use error::GatewayError;
pub use event::{Command, InboundEvent};
pub use render::{Button, Prompt, RenderInstruction};

use std::sync::Arc;
use tictactoe_engine::{Move, Opponent, Outcome, Session, SessionStore, lock};
use tracing::{debug, error, info, instrument, warn};

/// Routes chat events to per-user game sessions.
#[derive(Clone)]
pub struct Gateway {
    store: SessionStore,
    opponent: Arc<dyn Opponent>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("sessions", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway over `store` answering moves with `opponent`.
    #[instrument(skip_all)]
    pub fn new(store: SessionStore, opponent: Arc<dyn Opponent>) -> Self {
        info!("Creating gateway");
        Self { store, opponent }
    }

    /// The session store behind this gateway.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handles one inbound event.
    ///
    /// Returns `Ok(None)` when the event is dropped: a move from a user with
    /// no game in progress.
    ///
    /// # Errors
    ///
    /// `InvalidCommand` for malformed payloads, `Game` if the engine refuses
    /// the move.
    #[instrument(skip(self, event), fields(user_id = %event.user_id, command = %event.command))]
    pub fn handle(&self, event: &InboundEvent) -> Result<Option<RenderInstruction>, GatewayError> {
        let command = event.parse_command().inspect_err(|e| {
            warn!(error = %e, "Rejecting malformed event");
        })?;
        match command {
            Command::Start => Ok(Some(self.start(&event.user_id))),
            Command::Play(mv) => self.play(&event.user_id, mv),
        }
    }

    /// Starts a fresh game for the user, replacing any existing one.
    ///
    /// The reset and the render happen under one lock, so a concurrent move
    /// cannot land between them.
    #[instrument(skip(self))]
    pub fn start(&self, user_id: &str) -> RenderInstruction {
        self.store.with_session(user_id, |session| {
            *session = Session::start();
            info!("Game started");
            RenderInstruction::new(user_id, session.board(), Prompt::YourTurn)
        })
    }

    /// Plays the user's move and renders the result.
    ///
    /// A finished session keeps its final board until the next start, and
    /// moves sent to it are dropped.
    #[instrument(skip(self), fields(row = mv.row(), col = mv.col()))]
    pub fn play(&self, user_id: &str, mv: Move) -> Result<Option<RenderInstruction>, GatewayError> {
        let Some(handle) = self.store.get(user_id) else {
            debug!("Dropping move: no game started");
            return Ok(None);
        };
        let mut session = lock(&handle);
        if !session.is_in_progress() {
            debug!("Dropping move: game already finished");
            return Ok(None);
        }

        let outcome = session
            .process_player_move(mv, self.opponent.as_ref())
            .inspect_err(|e| error!(error = %e, "Engine rejected move"))?;

        match outcome {
            Outcome::Rejected(reason) => debug!(%reason, "Asking player to retry"),
            Outcome::Continue => debug!("Game continues"),
            terminal => info!(outcome = %terminal, "Game over"),
        }

        Ok(Some(RenderInstruction::new(
            user_id,
            session.board(),
            Prompt::from_outcome(outcome),
        )))
    }
}
