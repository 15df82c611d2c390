//! Move-path enumeration (perft) over the in-place make/undo workspace.
//!
//! Used to verify that undo is an exact inverse across whole trees and as a
//! raw move-generation benchmark.

use crate::game_state::rudder_types::*;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub placements: u64,
    pub shifts: u64,
    pub wins: u64,
    pub draws: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.placements += rhs.placements;
        self.shifts += rhs.shifts;
        self.wins += rhs.wins;
        self.draws += rhs.draws;
    }
}

/// Count leaf paths `depth` plies below `game_state`. Finished games are not
/// expanded further.
pub fn perft<G: MoveGenerator>(generator: &mut G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_legal_moves(game_state);
    let mut total = PerftCounts::default();

    for mv in &moves {
        game_state.apply_unchecked(mv);
        let outcome = game_state.get_winner();
        if depth == 1 || outcome.is_some() {
            total.nodes += 1;
            if mv.is_shift() {
                total.shifts += 1;
            } else {
                total.placements += 1;
            }
            match outcome {
                Some(Outcome::Win(_)) => total.wins += 1,
                Some(Outcome::Draw) => total.draws += 1,
                None => {}
            }
        } else {
            total.merge(perft(generator, game_state, depth - 1));
        }
        game_state.undo_move();
    }

    total
}

/// Reference count that clones the state per child instead of undoing.
pub fn perft_by_copy<G: MoveGenerator>(generator: &mut G, game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generator.generate_legal_moves(game_state);
    let mut nodes = 0;
    for mv in &moves {
        let mut child = game_state.clone();
        child.apply_unchecked(mv);
        nodes += if depth == 1 || child.get_winner().is_some() {
            1
        } else {
            perft_by_copy(generator, &child, depth - 1)
        };
    }
    nodes
}
