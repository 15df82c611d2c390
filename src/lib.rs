//! Crate root module declarations for the X-Rudder engine project.
//!
//! Exposes the game state model, move generation, search, engines, and the
//! utility helpers so the binary, tests, and benchmarks share module paths.

pub mod errors;
pub mod player;

pub mod game_state {
    pub mod game_state;
    pub mod rudder_rules;
    pub mod rudder_types;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod kernel_ordering;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_human;
    pub mod engine_minimax_ab;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod coordinates;
    pub mod match_harness;
    pub mod render_game_state;
}
