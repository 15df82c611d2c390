//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a baseline opponent and in
//! harness tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::EngineError;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "X-Rudder Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let legal_moves = generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMoves(game_state.side_to_move()))?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
