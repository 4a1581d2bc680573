//! Full-width negamax search with transposition-table memoization.
//!
//! The 3x3 game tree is small enough for exhaustive search, so there is no
//! pruning and no move ordering beyond the fixed ascending cell scan. Scores
//! are returned from the perspective of the side to move; each recursion
//! negates the child value before maximizing.
//!
//! Terminal scores are depth-biased (`depth - WIN_SCORE` for the side facing
//! a completed line), which makes faster wins strictly better and slower
//! losses strictly less bad. The bias is relative to the invocation root, so
//! cached values are invocation-scoped and the table is cleared per search.

use crate::game_state::board::{Board, BoardResult};
use crate::game_state::oxo_rules::CELL_COUNT;
use crate::game_state::oxo_types::Cell;
use crate::search::transposition_table::{TranspositionTable, TtStats};

/// Magnitude of an undelayed terminal win score.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Cell>,
    pub best_score: i32,
    pub nodes: u64,
    pub tt_stats: TtStats,
}

/// Search every legal move from `board` and pick the highest-scoring reply,
/// lowest cell index first on ties. `best_move` is `None` on terminal boards.
///
/// The table is cleared up front; within one invocation the depth of a
/// position is fixed by its occupancy, so memoized values stay exact.
pub fn search_best_move(
    board: &mut Board,
    tt: &mut TranspositionTable,
) -> BoardResult<SearchResult> {
    tt.clear();
    search_root(board, Some(tt))
}

/// Reference search without memoization. Exists for benchmarking and for the
/// cache-transparency tests; behavior must match [`search_best_move`] exactly.
pub fn search_best_move_uncached(board: &mut Board) -> BoardResult<SearchResult> {
    search_root(board, None)
}

fn search_root(
    board: &mut Board,
    mut tt: Option<&mut TranspositionTable>,
) -> BoardResult<SearchResult> {
    let mut result = SearchResult::default();

    if board.winner().is_some() || board.is_full() {
        return Ok(result);
    }

    let mut nodes = 0u64;
    let mut best_score = i32::MIN;

    for cell in 0..CELL_COUNT {
        if !board.is_empty(cell) {
            continue;
        }

        board.apply_move(cell)?;
        let score = -negamax(board, tt.as_deref_mut(), 0, &mut nodes)?;
        board.retract_move(cell)?;

        if score > best_score {
            best_score = score;
            result.best_move = Some(cell);
        }
    }

    result.best_score = best_score;
    result.nodes = nodes;
    if let Some(tt) = tt {
        result.tt_stats = tt.stats();
    }
    Ok(result)
}

/// Score `board` for its side to move, `depth` plies below the search root.
pub fn negamax(
    board: &mut Board,
    mut tt: Option<&mut TranspositionTable>,
    depth: u8,
    nodes: &mut u64,
) -> BoardResult<i32> {
    *nodes += 1;

    // Only the side that just moved can hold a completed line, so a present
    // winner always means the side to move has lost.
    if board.winner().is_some() {
        return Ok(i32::from(depth) - WIN_SCORE);
    }

    if let Some(table) = tt.as_deref_mut() {
        if let Some(score) = table.probe(board.zobrist_key) {
            return Ok(score);
        }
    }

    if board.is_full() {
        if let Some(table) = tt.as_deref_mut() {
            table.store(board.zobrist_key, 0);
        }
        return Ok(0);
    }

    let key = board.zobrist_key;
    let mut best = i32::MIN;

    for cell in 0..CELL_COUNT {
        if !board.is_empty(cell) {
            continue;
        }

        board.apply_move(cell)?;
        let score = -negamax(board, tt.as_deref_mut(), depth + 1, nodes)?;
        board.retract_move(cell)?;

        if score > best {
            best = score;
        }
    }

    if let Some(table) = tt {
        table.store(key, best);
    }
    Ok(best)
}
