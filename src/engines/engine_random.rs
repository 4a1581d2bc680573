//! Random-move engine.
//!
//! Selects uniformly from empty cells and is primarily used for diagnostics,
//! session testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::oxo_types::Cell;

pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Oxo Random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, String> {
        let open: Vec<Cell> = board.empty_cells().collect();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine open_cells {}", open.len()));

        if open.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = open
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random cell")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;

    #[test]
    fn random_engine_picks_a_legal_cell() {
        let mut board = Board::new_game();
        for cell in [0u8, 1, 4] {
            board.apply_move(cell).expect("cell should be empty");
        }

        let mut engine = RandomEngine;
        for _ in 0..32 {
            let out = engine.choose_move(&board).expect("engine should choose");
            let cell = out.best_move.expect("open cells remain");
            assert!(board.is_empty(cell), "picked occupied cell {cell}");
        }
    }

    #[test]
    fn random_engine_returns_none_on_a_full_board() {
        let mut board = Board::new_game();
        for cell in [0u8, 1, 2, 4, 3, 5, 7, 6, 8] {
            board.apply_move(cell).expect("cell should be empty");
        }

        let mut engine = RandomEngine;
        let out = engine.choose_move(&board).expect("engine should answer");
        assert_eq!(out.best_move, None);
    }
}
