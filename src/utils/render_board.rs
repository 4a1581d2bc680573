//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view from the internal bitboards for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::oxo_types::Mark;

/// Render the board to a string for terminal output.
///
/// Row 1 is the top row, matching the row-major cell indexing where cell 0 is
/// the top-left corner.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c\n");

    for row in 0..3u8 {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..3u8 {
            let cell = row * 3 + col;
            match mark_on_cell(board, cell) {
                Some(mark) => out.push(mark.glyph()),
                None => out.push('·'),
            }

            if col < 2 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c");

    out
}

fn mark_on_cell(board: &Board, cell: u8) -> Option<Mark> {
    let mask = 1u16 << cell;

    for mark in [Mark::Nought, Mark::Cross] {
        if board.occupancy[mark.index()] & mask != 0 {
            return Some(mark);
        }
    }

    None
}
