//! Game session surface exposed to views and controllers.
//!
//! `GameSession` owns the board and the engine instance and is the only
//! in-process call surface: report a player's cell, ask for the engine reply,
//! and read back a render snapshot. Views never touch engine internals.

use std::error::Error;
use std::fmt;

use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board::{Board, BoardError, GameStatus};
use crate::game_state::oxo_types::{BitBoard, Cell, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move applied, game continues.
    Accepted,
    /// Move refused, state unchanged.
    Rejected(BoardError),
    /// Either this move ended the game, or the game was already over.
    GameOver(GameStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The engine was asked to move on a terminal board.
    NoLegalMove,
    /// The engine failed internally; carries its report.
    EngineFailure(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoLegalMove => write!(f, "no legal move on a terminal board"),
            SessionError::EngineFailure(msg) => write!(f, "engine failure: {msg}"),
        }
    }
}

impl Error for SessionError {}

/// Read-only state snapshot for rendering. The position key is exposed for
/// diagnostics only; correctness never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub nought_cells: BitBoard,
    pub cross_cells: BitBoard,
    pub side_to_move: Mark,
    pub position_key: u64,
    pub status: GameStatus,
    pub winning_line: Option<BitBoard>,
}

pub struct GameSession {
    board: Board,
    engine: Box<dyn Engine>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_engine(Box::new(NegamaxEngine::new()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            board: Board::new_game(),
            engine,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Reset to the empty board with Cross to open; the engine drops its
    /// cached state as well.
    pub fn new_game(&mut self) {
        self.board = Board::new_game();
        self.engine.new_game();
        log::debug!("session: new game");
    }

    /// Apply a human move reported by the view.
    pub fn player_move(&mut self, cell: Cell) -> MoveOutcome {
        let status = self.board.status();
        if status != GameStatus::InProgress {
            return MoveOutcome::GameOver(status);
        }

        if let Err(err) = self.board.apply_move(cell) {
            log::debug!("session: player move {cell} rejected: {err}");
            return MoveOutcome::Rejected(err);
        }

        log::debug!(
            "session: player move {cell}, key {:016x}",
            self.board.zobrist_key
        );
        match self.board.status() {
            GameStatus::InProgress => MoveOutcome::Accepted,
            terminal => MoveOutcome::GameOver(terminal),
        }
    }

    /// Ask the engine for its reply and apply it, returning the cell played.
    pub fn engine_move(&mut self) -> Result<Cell, SessionError> {
        if self.board.status() != GameStatus::InProgress {
            return Err(SessionError::NoLegalMove);
        }

        let out = self
            .engine
            .choose_move(&self.board)
            .map_err(SessionError::EngineFailure)?;
        for line in &out.info_lines {
            log::debug!("session: {line}");
        }

        let cell = out.best_move.ok_or(SessionError::NoLegalMove)?;
        self.board
            .apply_move(cell)
            .map_err(|e| SessionError::EngineFailure(e.to_string()))?;
        log::debug!(
            "session: engine move {cell}, key {:016x}",
            self.board.zobrist_key
        );
        Ok(cell)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nought_cells: self.board.occupancy[Mark::Nought.index()],
            cross_cells: self.board.occupancy[Mark::Cross.index()],
            side_to_move: self.board.side_to_move,
            position_key: self.board.zobrist_key,
            status: self.board.status(),
            winning_line: self.board.winning_line(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, MoveOutcome, SessionError};
    use crate::engines::engine_negamax::NegamaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::{Board, BoardError, GameStatus};
    use crate::game_state::oxo_types::Mark;

    #[test]
    fn occupied_and_out_of_range_cells_are_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.player_move(4), MoveOutcome::Accepted);
        assert_eq!(
            session.player_move(4),
            MoveOutcome::Rejected(BoardError::CellOccupied(4))
        );
        assert_eq!(
            session.player_move(9),
            MoveOutcome::Rejected(BoardError::OutOfBounds(9))
        );
        assert_eq!(session.snapshot().cross_cells, 1 << 4);
    }

    #[test]
    fn engine_self_play_from_the_empty_board_is_a_draw() {
        let mut session = GameSession::new();
        for _ in 0..9 {
            session.engine_move().expect("board is not terminal yet");
            if session.snapshot().status != GameStatus::InProgress {
                break;
            }
        }
        assert_eq!(session.snapshot().status, GameStatus::Drawn);
        assert_eq!(
            session.engine_move(),
            Err(SessionError::NoLegalMove),
            "terminal board must refuse engine moves"
        );
    }

    #[test]
    fn winning_player_move_reports_game_over_and_line() {
        let mut session = GameSession::new();
        // X0 O3 X1 O4 X2 completes the top row.
        for cell in [0u8, 3, 1, 4] {
            assert_eq!(session.player_move(cell), MoveOutcome::Accepted);
        }
        assert_eq!(
            session.player_move(2),
            MoveOutcome::GameOver(GameStatus::WonBy(Mark::Cross))
        );
        assert_eq!(session.snapshot().winning_line, Some(0x007));

        // Further input is answered with the terminal status, unchanged state.
        let before = session.snapshot();
        assert_eq!(
            session.player_move(8),
            MoveOutcome::GameOver(GameStatus::WonBy(Mark::Cross))
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn snapshot_mirrors_the_board() {
        let mut session = GameSession::new();
        session.player_move(4);
        session.player_move(0);

        let snap = session.snapshot();
        assert_eq!(snap.cross_cells, 1 << 4);
        assert_eq!(snap.nought_cells, 1 << 0);
        assert_eq!(snap.side_to_move, Mark::Cross);
        assert_eq!(snap.position_key, session.board().zobrist_key);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.winning_line, None);
    }

    #[test]
    fn new_game_resets_board_and_snapshot() {
        let mut session = GameSession::new();
        session.player_move(4);
        session.new_game();

        let snap = session.snapshot();
        assert_eq!(snap.cross_cells, 0);
        assert_eq!(snap.nought_cells, 0);
        assert_eq!(snap.side_to_move, Mark::Cross);
        assert_eq!(snap.position_key, 0);
        assert_eq!(snap.status, GameStatus::InProgress);
    }

    #[test]
    fn optimal_engine_never_loses_to_random_play() {
        let mut random = RandomEngine;
        let mut optimal = NegamaxEngine::new();

        for _ in 0..25 {
            let mut board = Board::new_game();
            optimal.new_game();

            // Random opens as Cross, the optimal engine answers as Nought.
            while board.status() == GameStatus::InProgress {
                let mover: &mut dyn Engine = if board.side_to_move == Mark::Cross {
                    &mut random
                } else {
                    &mut optimal
                };
                let out = mover.choose_move(&board).expect("engine should choose");
                let cell = out.best_move.expect("non-terminal board has a move");
                board.apply_move(cell).expect("chosen cell should be empty");
            }

            assert_ne!(
                board.status(),
                GameStatus::WonBy(Mark::Cross),
                "optimal defender lost: {board:?}"
            );
        }
    }
}
