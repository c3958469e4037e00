//! Text rendering of the board.

use reversi_core::{Board, Square, BOARD_SIZE};

/// Column header followed by one labelled line per row.
///
/// Black is `X`, White is `O`, empty squares are `.`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  a b c d e f g h\n");
    for y in 1..=BOARD_SIZE as i32 {
        out.push_str(&y.to_string());
        for x in 1..=BOARD_SIZE as i32 {
            if let Some(square) = Square::new(x, y) {
                out.push(' ');
                out.push(board.get(square).symbol());
            }
        }
        out.push('\n');
    }
    out
}
