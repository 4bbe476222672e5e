//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. They never mutate the board and can
//! be called any number of times.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::has_winner;
