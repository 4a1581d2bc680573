//! Zobrist hashing support for fast position identity in the memoization cache.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging. One constant exists per
//! `(cell, mark)` pair; no side-to-move term is needed because Cross always
//! opens, so the turn is fully determined by occupancy parity.

use std::sync::OnceLock;

use crate::game_state::board::Board;
use crate::game_state::oxo_types::{Cell, Mark};

#[derive(Debug)]
struct ZobristTables {
    cell_mark: [[u64; 2]; 9],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut cell_mark = [[0u64; 2]; 9];
    for cell in &mut cell_mark {
        for mark in cell {
            *mark = next_random_u64(&mut seed);
        }
    }

    ZobristTables { cell_mark }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Return the Zobrist key for a `(cell, mark)` occupancy term.
#[inline]
pub fn cell_mark_key(cell: Cell, mark: Mark) -> u64 {
    tables().cell_mark[cell as usize][mark.index()]
}

/// Compute the full position key from scratch by XOR-combining every occupied
/// cell. The board maintains the same value incrementally; this recomputation
/// exists for initialization and for consistency checks.
pub fn compute_zobrist_key(board: &Board) -> u64 {
    let mut key = 0u64;

    for mark in [Mark::Nought, Mark::Cross] {
        let mut bb = board.occupancy[mark.index()];
        while bb != 0 {
            let cell = bb.trailing_zeros() as Cell;
            key ^= cell_mark_key(cell, mark);
            bb &= bb - 1;
        }
    }

    key
}
