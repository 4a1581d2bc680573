//! Core incremental board state representation.
//!
//! `Board` is the central model for the engine. It stores per-mark occupancy
//! bitboards, the side to move, the ply counter, and the incrementally
//! maintained Zobrist key used by make/unmake style search workflows.
//!
//! `apply_move` / `retract_move` form the only mutation path. The pair is
//! strictly symmetric: both directions XOR the same `(cell, mover)` hash
//! constant, so applying and retracting a move restores occupancy, side to
//! move, ply, and key exactly.

use std::error::Error;
use std::fmt;

use crate::game_state::oxo_rules;
use crate::game_state::oxo_types::{BitBoard, Cell, Mark};
use crate::search::zobrist;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The cell index is outside `0..=8`.
    OutOfBounds(Cell),
    /// The target cell is already occupied.
    CellOccupied(Cell),
    /// Retraction targeted a cell the previous mover does not occupy.
    CellVacant(Cell),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(cell) => write!(f, "cell index {cell} is out of bounds"),
            BoardError::CellOccupied(cell) => write!(f, "cell {cell} is already occupied"),
            BoardError::CellVacant(cell) => {
                write!(f, "cell {cell} was not played by the previous mover")
            }
        }
    }
}

impl Error for BoardError {}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Mark),
    Drawn,
}

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [Mark::Nought.index(), Mark::Cross.index()]
    pub occupancy: [BitBoard; 2],
    pub side_to_move: Mark,
    pub zobrist_key: u64,
    pub ply: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Empty board, Cross to open.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            occupancy: [0; 2],
            side_to_move: Mark::Cross,
            zobrist_key: 0,
            ply: 0,
        }
    }

    #[inline]
    pub fn occupied(&self) -> BitBoard {
        self.occupancy[0] | self.occupancy[1]
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.occupied() & (1 << cell) == 0
    }

    /// Cells still open to play, in ascending index order.
    #[inline]
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..oxo_rules::CELL_COUNT).filter(|&cell| self.is_empty(cell))
    }

    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        oxo_rules::winner(self.occupancy[0], self.occupancy[1])
    }

    #[inline]
    pub fn winning_line(&self) -> Option<BitBoard> {
        oxo_rules::winning_line(self.occupancy[0], self.occupancy[1])
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == oxo_rules::FULL_BOARD
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        oxo_rules::is_draw(self.occupancy[0], self.occupancy[1])
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::WonBy(mark),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Place the current mover's mark on `cell` and flip the side to move.
    pub fn apply_move(&mut self, cell: Cell) -> BoardResult<()> {
        if cell >= oxo_rules::CELL_COUNT {
            return Err(BoardError::OutOfBounds(cell));
        }
        if !self.is_empty(cell) {
            return Err(BoardError::CellOccupied(cell));
        }

        let mover = self.side_to_move;
        self.occupancy[mover.index()] |= 1 << cell;
        self.zobrist_key ^= zobrist::cell_mark_key(cell, mover);
        self.side_to_move = mover.opposite();
        self.ply += 1;
        Ok(())
    }

    /// Exact inverse of [`Board::apply_move`] for the most recent mover.
    pub fn retract_move(&mut self, cell: Cell) -> BoardResult<()> {
        if cell >= oxo_rules::CELL_COUNT {
            return Err(BoardError::OutOfBounds(cell));
        }

        let mover = self.side_to_move.opposite();
        if self.occupancy[mover.index()] & (1 << cell) == 0 {
            return Err(BoardError::CellVacant(cell));
        }

        self.occupancy[mover.index()] &= !(1 << cell);
        self.zobrist_key ^= zobrist::cell_mark_key(cell, mover);
        self.side_to_move = mover;
        self.ply -= 1;
        Ok(())
    }
}
