//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// The eight lines of the board as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if any line holds three identical marks.
///
/// The result does not say who won. Callers infer the winner from whoever
/// placed the last mark, which only holds if this is checked after every
/// single placement.
#[instrument(skip(board))]
pub fn has_winner(board: &Board) -> bool {
    let rows = board.rows();
    LINES.iter().any(|&[a, b, c]| {
        let first = rows[a.0][a.1];
        first != Cell::Empty && first == rows[b.0][b.1] && first == rows[c.0][c.1]
    })
}
