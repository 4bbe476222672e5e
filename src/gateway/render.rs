//! Outbound render instructions for the chat transport.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Outcome, SIZE, UserId};

/// Which message the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Prompt {
    /// The player should place a mark.
    YourTurn,
    /// The player completed a line.
    YouWon,
    /// The opponent completed a line.
    YouLost,
    /// Board filled with no line.
    Draw,
    /// The chosen cell was taken; same board, pick again.
    InvalidMoveRetry,
}

impl Prompt {
    /// Maps a move outcome to the message shown afterwards.
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Continue => Prompt::YourTurn,
            Outcome::PlayerWon => Prompt::YouWon,
            Outcome::OpponentWon => Prompt::YouLost,
            Outcome::Draw => Prompt::Draw,
            Outcome::Rejected(_) => Prompt::InvalidMoveRetry,
        }
    }

    /// Chat text for this prompt.
    pub fn text(self) -> &'static str {
        match self {
            Prompt::YourTurn => "Your move (X)!\nPlace X to a free spot.",
            Prompt::YouWon => "Congratulations! You won!",
            Prompt::YouLost => "Oops! You lost. Try again!",
            Prompt::Draw => "It's a draw!",
            Prompt::InvalidMoveRetry => "That spot is taken.\nPlace X to a free spot.",
        }
    }

    /// True if the game is over after this prompt.
    pub fn is_game_over(self) -> bool {
        matches!(self, Prompt::YouWon | Prompt::YouLost | Prompt::Draw)
    }
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Button {
    /// Text on the button: the cell symbol.
    pub label: String,
    /// Payload sent back when pressed: the two-digit cell coordinate.
    pub callback_data: String,
}

/// What the transport should show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Recipient.
    pub user_id: UserId,
    /// Cell symbols, row-major.
    pub board: [[String; SIZE]; SIZE],
    /// Message kind.
    pub message: Prompt,
    /// Message text.
    pub text: String,
    /// 3x3 button grid. Empty once the game is over.
    pub keyboard: Vec<Vec<Button>>,
    /// True when the board no longer accepts moves.
    pub game_over: bool,
}

impl RenderInstruction {
    /// Renders `board` with `message` for `user_id`.
    pub fn new(user_id: impl Into<UserId>, board: &Board, message: Prompt) -> Self {
        let game_over = message.is_game_over();
        let keyboard = if game_over {
            Vec::new()
        } else {
            keyboard(board)
        };
        Self {
            user_id: user_id.into(),
            board: (*board.rows()).map(|row| row.map(|cell| cell.symbol().to_string())),
            message,
            text: message.text().to_string(),
            keyboard,
            game_over,
        }
    }

    /// Plain-text rendering: the board, a blank line, then the message.
    pub fn to_plain_text(&self) -> String {
        let grid = self
            .board
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{grid}\n\n{}", self.text)
    }
}

/// Buttons for every cell, laid out like the board.
fn keyboard(board: &Board) -> Vec<Vec<Button>> {
    board
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| Button::new(cell.symbol().to_string(), format!("{r}{c}")))
                .collect()
        })
        .collect()
}
