//! Engine abstraction layer used by the session surface.
//!
//! Defines a common output payload so different opponent strategies can be
//! selected at runtime behind a single trait interface.

use crate::game_state::board::Board;
use crate::game_state::oxo_types::Cell;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen reply, or `None` when the position has no legal move.
    pub best_move: Option<Cell>,
    /// Human-readable diagnostics accumulated while choosing.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, String>;
}
