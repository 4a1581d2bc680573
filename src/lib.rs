//! Crate root module declarations for the Oxo engine project.
//!
//! This file exposes all top-level subsystems (game state, search, engines,
//! session surface, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod oxo_rules;
    pub mod oxo_types;
}

pub mod search {
    pub mod negamax;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod grid_notation;
    pub mod render_board;
}
