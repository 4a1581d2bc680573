/// Core type definitions for the 3x3 bitboard engine.
/// Marks are represented separately from occupancy so both players' cells can
/// live in a compact `[BitBoard; 2]` layout indexed by `Mark::index`.

pub use crate::game_state::board::Board;

/// Player mark / side to move. Cross always opens from the empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Nought,
    Cross,
}

impl Mark {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Mark::Nought => 0,
            Mark::Cross => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }

    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Mark::Nought => 'O',
            Mark::Cross => 'X',
        }
    }
}

/// Board occupancy as one bit per cell; only the low 9 bits are used.
pub type BitBoard = u16;

/// Board cell index (`0..=8`), row-major with the top-left corner at 0.
pub type Cell = u8;
