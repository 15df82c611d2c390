//! Alpha-beta minimax engine.
//!
//! Wraps `alpha_beta_search` with a fixed default depth, an injected board
//! scorer, kernel-ring move ordering, and a hard-coded opening that skips the
//! search on the first ply(s).

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::EngineError;
use crate::game_state::rudder_types::*;
use crate::move_generation::kernel_ordering::{board_centre, max_radius, ring_cells};
use crate::move_generation::move_generator::{MoveOrdering, OrderedMoveGenerator};
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig};
use crate::search::board_scoring::{BoardScorer, NeighborhoodScorer, PatternScorer, ScorerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniMaxConfig {
    pub search: SearchConfig,
    pub ordering: MoveOrdering,
    /// Turns below this value play the fixed opening instead of searching.
    pub book_plies: u32,
    /// Seed for the within-ring shuffle. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MiniMaxConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ordering: MoveOrdering::default(),
            book_plies: 1,
            seed: None,
        }
    }
}

pub struct MiniMaxEngine<S: BoardScorer> {
    scorer: S,
    config: MiniMaxConfig,
    generator: OrderedMoveGenerator,
}

impl<S: BoardScorer> MiniMaxEngine<S> {
    pub fn new(scorer: S) -> Self {
        Self::with_config(scorer, MiniMaxConfig::default())
    }

    pub fn with_config(scorer: S, config: MiniMaxConfig) -> Self {
        Self {
            scorer,
            config,
            generator: OrderedMoveGenerator::new(config.ordering, config.seed),
        }
    }

    #[inline]
    pub fn config(&self) -> &MiniMaxConfig {
        &self.config
    }

    /// Best move for the side to move using the configured depth.
    pub fn choose(&mut self, game_state: &GameState) -> Result<Move, EngineError> {
        self.choose_move(game_state, &SearchParams::default())?
            .best_move
            .ok_or(EngineError::NoLegalMoves(game_state.side_to_move()))
    }
}

/// Fixed opening: the board centre, or the nearest empty cell around it in
/// ring order when the centre is taken. `None` when the mover cannot place.
pub fn opening_move(game_state: &GameState) -> Option<Move> {
    if game_state.pieces_left(game_state.side_to_move()) == 0 {
        return None;
    }
    let centre = board_centre(game_state);
    let mut ring = Vec::new();
    for radius in 0..=max_radius(game_state, centre) {
        ring_cells(game_state, centre, radius, &mut ring);
        if let Some(&(x, y)) = ring.iter().find(|&&(x, y)| game_state.get_space(x, y).is_empty()) {
            return Some(Move::place(x, y));
        }
    }
    None
}

impl<S: BoardScorer> Engine for MiniMaxEngine<S> {
    fn name(&self) -> &str {
        "X-Rudder MiniMax-AB"
    }

    fn new_game(&mut self) {
        self.generator = OrderedMoveGenerator::new(self.config.ordering, self.config.seed);
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let mut out = EngineOutput::default();

        if game_state.get_winner().is_some() {
            return Err(EngineError::GameOver);
        }

        if game_state.get_turn() < self.config.book_plies {
            if let Some(mv) = opening_move(game_state) {
                out.best_move = Some(mv);
                out.info_lines.push("info string opening move".to_owned());
                return Ok(out);
            }
        }

        let config = SearchConfig {
            // A depth-0 search only evaluates and never yields a move.
            max_depth: params.depth.unwrap_or(self.config.search.max_depth).max(1),
            movetime_ms: params.movetime_ms.or(self.config.search.movetime_ms),
        };
        let mut workspace = game_state.clone();
        let result = alpha_beta_search(&mut workspace, &mut self.generator, &self.scorer, config);

        debug!(
            turn = game_state.get_turn(),
            depth = result.reached_depth,
            score = result.best_score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed_ms,
            timed_out = result.timed_out,
            "search finished"
        );

        let Some(best_move) = result.best_move else {
            return Err(EngineError::NoLegalMoves(game_state.side_to_move()));
        };
        out.best_move = Some(best_move);
        out.score = Some(result.best_score);
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        Ok(out)
    }
}

/// Boxed engine for a scorer chosen at runtime.
pub fn minimax_engine(kind: ScorerKind, config: MiniMaxConfig) -> Box<dyn Engine> {
    match kind {
        ScorerKind::Neighborhood => Box::new(MiniMaxEngine::with_config(NeighborhoodScorer, config)),
        ScorerKind::PatternBalanced => {
            Box::new(MiniMaxEngine::with_config(PatternScorer::balanced(), config))
        }
        ScorerKind::PatternAggressive => {
            Box::new(MiniMaxEngine::with_config(PatternScorer::aggressive(), config))
        }
    }
}
