//! Spatially localized move ordering.
//!
//! Cells are visited in expanding Chebyshev rings around the kernel, which is
//! the destination of the most recent move (board centre before any move).
//! The rings cover the whole board, so the move set is unchanged; only the
//! order moves toward the action. With an RNG, cells are shuffled inside each
//! ring, which only changes which of several equal-valued moves is chosen.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game_state::rudder_types::*;
use crate::move_generation::legal_move_generator::push_cell_moves;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone)]
pub struct KernelMoveGenerator {
    rng: Option<StdRng>,
    ring: Vec<(i32, i32)>,
}

impl KernelMoveGenerator {
    pub fn new(rng: Option<StdRng>) -> Self {
        Self {
            rng,
            ring: Vec::new(),
        }
    }
}

impl MoveGenerator for KernelMoveGenerator {
    fn generate_legal_moves_into(&mut self, game_state: &GameState, out: &mut Vec<Move>) {
        out.clear();
        let kernel = kernel_of(game_state);
        for radius in 0..=max_radius(game_state, kernel) {
            ring_cells(game_state, kernel, radius, &mut self.ring);
            if let Some(rng) = self.rng.as_mut() {
                self.ring.shuffle(rng);
            }
            for &(x, y) in &self.ring {
                push_cell_moves(game_state, x, y, out);
            }
        }
    }
}

#[inline]
pub fn board_centre(game_state: &GameState) -> (i32, i32) {
    (game_state.width() as i32 / 2, game_state.height() as i32 / 2)
}

/// Most recently touched cell, or the board centre on a fresh board.
pub fn kernel_of(game_state: &GameState) -> (i32, i32) {
    game_state
        .last_move()
        .map(|mv| mv.destination())
        .unwrap_or_else(|| board_centre(game_state))
}

/// Largest ring radius that still contains an on-board cell.
pub fn max_radius(game_state: &GameState, kernel: (i32, i32)) -> i32 {
    let (kx, ky) = kernel;
    let w = game_state.width() as i32;
    let h = game_state.height() as i32;
    kx.max(w - 1 - kx).max(ky).max(h - 1 - ky).max(0)
}

/// On-board cells at exactly Chebyshev distance `radius`, in raster order.
pub fn ring_cells(game_state: &GameState, kernel: (i32, i32), radius: i32, out: &mut Vec<(i32, i32)>) {
    out.clear();
    let (kx, ky) = kernel;
    for y in ky - radius..=ky + radius {
        for x in kx - radius..=kx + radius {
            if chebyshev((x, y), kernel) == radius && game_state.in_bounds(x, y) {
                out.push((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    fn midgame() -> GameState {
        let mut state = GameState::new(7, 6, 6, 6);
        for mv in [
            Move::place(3, 3),
            Move::place(2, 2),
            Move::place(5, 1),
            Move::place(0, 5),
            Move::shift(3, 3, 4, 4),
        ] {
            state.make_move(&mv).expect("legal setup move");
        }
        state
    }

    #[test]
    fn kernel_follows_last_destination() {
        let state = midgame();
        assert_eq!(kernel_of(&state), (4, 4));
        assert_eq!(kernel_of(&GameState::new(7, 6, 1, 1)), (3, 3));
    }

    #[test]
    fn rings_partition_the_board() {
        let state = midgame();
        let kernel = kernel_of(&state);
        let mut seen = HashSet::new();
        let mut ring = Vec::new();
        for r in 0..=max_radius(&state, kernel) {
            ring_cells(&state, kernel, r, &mut ring);
            for cell in &ring {
                assert!(seen.insert(*cell), "cell {cell:?} visited twice");
            }
        }
        assert_eq!(seen.len(), 7 * 6);
    }

    #[test]
    fn kernel_order_yields_same_move_set_as_raster() {
        let state = midgame();
        let raster: HashSet<Move> = generate_legal_moves(&state).into_iter().collect();
        for rng in [None, Some(StdRng::seed_from_u64(7))] {
            let mut generator = KernelMoveGenerator::new(rng);
            let moves = generator.generate_legal_moves(&state);
            assert_eq!(moves.len(), raster.len());
            assert_eq!(moves.iter().copied().collect::<HashSet<_>>(), raster);
        }
    }

    #[test]
    fn closest_cells_come_first() {
        let state = midgame();
        let mut generator = KernelMoveGenerator::new(None);
        let moves = generator.generate_legal_moves(&state);
        let distances: Vec<i32> = moves
            .iter()
            .map(|m| chebyshev(m.source().unwrap_or(m.destination()), (4, 4)))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let state = midgame();
        let a = KernelMoveGenerator::new(Some(StdRng::seed_from_u64(99))).generate_legal_moves(&state);
        let b = KernelMoveGenerator::new(Some(StdRng::seed_from_u64(99))).generate_legal_moves(&state);
        assert_eq!(a, b);
    }
}
