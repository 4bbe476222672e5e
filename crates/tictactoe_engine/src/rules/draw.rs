//! Draw detection logic for tic-tac-toe.

use super::win::has_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no three-in-a-row.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Cell::PlayerMark,
                    'O' => Cell::OpponentMark,
                    _ => continue,
                };
                board.set(r, c, mark).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
