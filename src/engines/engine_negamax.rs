//! Optimal-play engine backed by exhaustive negamax search.
//!
//! Owns a transposition table reused across moves of one game and reports
//! node counts and cache statistics through the engine info lines.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::search::negamax::search_best_move;
use crate::search::transposition_table::TranspositionTable;

pub struct NegamaxEngine {
    tt: TranspositionTable,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(),
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Oxo Negamax"
    }

    fn new_game(&mut self) {
        self.tt.clear();
    }

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, String> {
        let mut scratch = board.clone();
        let result = search_best_move(&mut scratch, &mut self.tt).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.best_move = result.best_move;
        out.info_lines.push(format!(
            "info score {} nodes {}",
            result.best_score, result.nodes
        ));
        out.info_lines.push(format!(
            "info string tt probes {} hits {} stores {} size_entries {}",
            result.tt_stats.probes,
            result.tt_stats.hits,
            result.tt_stats.stores,
            self.tt.len()
        ));
        log::debug!(
            "negamax engine: best_move {:?} score {} nodes {}",
            result.best_move,
            result.best_score,
            result.nodes
        );

        Ok(out)
    }
}
