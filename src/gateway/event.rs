//! Inbound events from the messaging platform.

use super::GatewayError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Move, UserId};
use tracing::instrument;

/// One event delivered by the chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct InboundEvent {
    /// Who sent it.
    pub user_id: UserId,
    /// Raw command: `start` or the two-digit callback data of a button.
    pub command: String,
}

impl InboundEvent {
    /// Parses the command payload.
    pub fn parse_command(&self) -> Result<Command, GatewayError> {
        self.command.parse()
    }
}

/// A parsed inbound command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new game, discarding any current one.
    Start,
    /// Place the player's mark.
    Play(Move),
}

impl std::str::FromStr for Command {
    type Err = GatewayError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("start") || s.eq_ignore_ascii_case("/start") {
            return Ok(Command::Start);
        }
        Move::from_callback(s)
            .map(Command::Play)
            .ok_or_else(|| GatewayError::InvalidCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        for raw in ["start", "/start", " START "] {
            assert_eq!(raw.parse::<Command>(), Ok(Command::Start));
        }
    }

    #[test]
    fn test_parse_move() {
        let event = InboundEvent::new("u".to_string(), "21".to_string());
        assert_eq!(
            event.parse_command(),
            Ok(Command::Play(Move::new(2, 1).unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_other_payloads() {
        for raw in ["", "33", "1", "111", "stop", "1-1"] {
            assert!(
                matches!(raw.parse::<Command>(), Err(GatewayError::InvalidCommand(_))),
                "accepted {raw:?}"
            );
        }
    }
}
