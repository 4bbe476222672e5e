//! Tic-tac-toe chat bot.
//!
//! A user plays X against a random opponent through button-style callbacks.
//!
//! # Architecture
//!
//! - **Engine** (`tictactoe_engine`): board, rules, opponent, sessions
//! - **Gateway**: inbound events to engine calls, outcomes to render
//!   instructions
//! - **Transports**: JSON webhook and a terminal console
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tictactoe_bot::{Gateway, InboundEvent, Prompt};
//! use tictactoe_engine::{RandomOpponent, SessionStore};
//!
//! let gateway = Gateway::new(SessionStore::new(), Arc::new(RandomOpponent::seeded(1)));
//! let render = gateway
//!     .handle(&InboundEvent::new("alice".into(), "start".into()))?
//!     .expect("start always renders");
//! assert_eq!(render.message, Prompt::YourTurn);
//! # Ok::<(), tictactoe_bot::GatewayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod gateway;
pub mod webhook;

pub use config::{BotConfig, ConfigError};
pub use gateway::{
    Button, Command, Gateway, GatewayError, InboundEvent, Prompt, RenderInstruction,
};
