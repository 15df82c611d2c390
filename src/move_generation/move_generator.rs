use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::rudder_types::*;
use crate::move_generation::kernel_ordering::KernelMoveGenerator;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

/// Source of legal moves for the side to move, in search order.
///
/// Every generator yields the same set of moves; only the order differs.
pub trait MoveGenerator: Send {
    fn generate_legal_moves_into(&mut self, game_state: &GameState, out: &mut Vec<Move>);

    fn generate_legal_moves(&mut self, game_state: &GameState) -> Vec<Move> {
        let mut out = Vec::new();
        self.generate_legal_moves_into(game_state, &mut out);
        out
    }
}

/// Enumeration order used by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Rows bottom to top, columns left to right.
    Raster,
    /// Chebyshev rings around the last touched cell.
    Kernel { shuffle: bool },
}

impl Default for MoveOrdering {
    fn default() -> Self {
        MoveOrdering::Kernel { shuffle: true }
    }
}

/// Concrete generator selected by a `MoveOrdering`.
#[derive(Debug, Clone)]
pub enum OrderedMoveGenerator {
    Raster(LegalMoveGenerator),
    Kernel(KernelMoveGenerator),
}

impl OrderedMoveGenerator {
    /// `seed` fixes the within-ring shuffle; `None` draws from OS entropy.
    pub fn new(ordering: MoveOrdering, seed: Option<u64>) -> Self {
        match ordering {
            MoveOrdering::Raster => OrderedMoveGenerator::Raster(LegalMoveGenerator),
            MoveOrdering::Kernel { shuffle: false } => {
                OrderedMoveGenerator::Kernel(KernelMoveGenerator::new(None))
            }
            MoveOrdering::Kernel { shuffle: true } => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                OrderedMoveGenerator::Kernel(KernelMoveGenerator::new(Some(rng)))
            }
        }
    }
}

impl MoveGenerator for OrderedMoveGenerator {
    fn generate_legal_moves_into(&mut self, game_state: &GameState, out: &mut Vec<Move>) {
        match self {
            OrderedMoveGenerator::Raster(g) => g.generate_legal_moves_into(game_state, out),
            OrderedMoveGenerator::Kernel(g) => g.generate_legal_moves_into(game_state, out),
        }
    }
}
