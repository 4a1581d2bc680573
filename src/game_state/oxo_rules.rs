//! Canonical rule constants and terminal-position evaluation.
//!
//! This module stores the eight fixed winning-line masks and the pure
//! occupancy-level predicates (winner, draw, winning line) that the board,
//! the search, and the session surface all share.

use crate::game_state::oxo_types::{BitBoard, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: u8 = 9;

/// All nine cell bits set.
pub const FULL_BOARD: BitBoard = 0x1FF;

/// The eight winning triples: three rows, three columns, two diagonals.
pub const WIN_MASKS: [BitBoard; 8] = [
    0x007, // top row
    0x038, // middle row
    0x1C0, // bottom row
    0x049, // left column
    0x092, // middle column
    0x124, // right column
    0x111, // main diagonal
    0x054, // anti-diagonal
];

/// Return the mark holding a completed line, if any.
///
/// Under legal play at most one side can have a line; a double match would
/// mean play continued past a finished game, so it is asserted rather than
/// tie-broken.
#[inline]
pub fn winner(nought: BitBoard, cross: BitBoard) -> Option<Mark> {
    let nought_line = WIN_MASKS.iter().any(|&mask| nought & mask == mask);
    let cross_line = WIN_MASKS.iter().any(|&mask| cross & mask == mask);
    debug_assert!(
        !(nought_line && cross_line),
        "both sides hold a line: {nought:#011b} / {cross:#011b}"
    );

    if nought_line {
        Some(Mark::Nought)
    } else if cross_line {
        Some(Mark::Cross)
    } else {
        None
    }
}

/// Return the first completed line mask, if any. Used for highlighting.
#[inline]
pub fn winning_line(nought: BitBoard, cross: BitBoard) -> Option<BitBoard> {
    WIN_MASKS
        .into_iter()
        .find(|&mask| nought & mask == mask || cross & mask == mask)
}

/// True iff every cell is occupied.
#[inline]
pub fn is_full(nought: BitBoard, cross: BitBoard) -> bool {
    nought | cross == FULL_BOARD
}

/// True iff the board is full and nobody holds a line. The winner check is
/// deliberately dominant: a full board containing a completed line is a win.
#[inline]
pub fn is_draw(nought: BitBoard, cross: BitBoard) -> bool {
    is_full(nought, cross) && winner(nought, cross).is_none()
}
