//! Move-selection abstraction shared by players and the match harness.
//!
//! Search engines, interactive input, and the random baseline all sit behind
//! the same trait so a `Player` can be bound to any of them at runtime.

use crate::errors::EngineError;
use crate::game_state::rudder_types::{GameState, Move};

/// Per-request overrides. `None` falls back to the engine's configuration.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `game_state` is left untouched.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError>;
}
