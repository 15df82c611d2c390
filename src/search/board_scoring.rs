//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static scoring to `BoardScorer`, so
//! heuristics can be swapped per experiment without touching search code.
//! Scores share the sign convention of terminal scores: positive favours `O`.

use crate::game_state::rudder_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score with positive values favouring `O` and negative favouring `X`.
    fn score(&self, game_state: &GameState) -> i32;
}

impl<F> BoardScorer for F
where
    F: Fn(&GameState) -> i32 + Send + Sync,
{
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        self(game_state)
    }
}

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Visit every occupied cell that has a full 3x3 neighbourhood on the board.
#[inline]
fn for_each_interior_piece(game_state: &GameState, mut f: impl FnMut(i32, i32, i32)) {
    let width = game_state.width() as i32;
    let height = game_state.height() as i32;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let v = game_state.get_space(x, y).value();
            if v != 0 {
                f(x, y, v);
            }
        }
    }
}

/// Sums the flanking columns of every interior piece.
///
/// All three rows of each flanking column count once. This is a flat
/// variant: the running-sum form that weights the row below, the centre row
/// and the row above 3, 2 and 1 is not reproduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborhoodScorer;

impl BoardScorer for NeighborhoodScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mut h = 0;
        for_each_interior_piece(game_state, |x, y, _| {
            for dy in -1..=1 {
                h += game_state.get_space(x - 1, y + dy).value() + game_state.get_space(x + 1, y + dy).value();
            }
        });
        h
    }
}

/// Rewards partial X shapes.
///
/// Along each diagonal of an interior piece, an own piece one step away adds
/// `adjacent_weight` and an own piece two steps away adds `reach_weight`
/// unless the cell between them holds an opposing piece. A piece flanked on
/// both horizontal sides by the opponent cannot complete an X and loses
/// `flank_penalty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternScorer {
    pub adjacent_weight: i32,
    pub reach_weight: i32,
    pub flank_penalty: i32,
}

impl PatternScorer {
    pub const fn balanced() -> Self {
        Self {
            adjacent_weight: 4,
            reach_weight: 1,
            flank_penalty: 6,
        }
    }

    pub const fn aggressive() -> Self {
        Self {
            adjacent_weight: 6,
            reach_weight: 2,
            flank_penalty: 3,
        }
    }
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::balanced()
    }
}

impl BoardScorer for PatternScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let at = |x: i32, y: i32| game_state.get_space(x, y).value();
        let mut total = 0;

        for_each_interior_piece(game_state, |x, y, v| {
            let mut piece_score = 0;
            for (dx, dy) in DIAGONALS {
                let near = at(x + dx, y + dy);
                let far = at(x + 2 * dx, y + 2 * dy);
                if near == v {
                    piece_score += self.adjacent_weight;
                }
                if near != -v && far == v {
                    piece_score += self.reach_weight;
                }
            }
            if at(x - 1, y) + at(x + 1, y) == -2 * v {
                piece_score -= self.flank_penalty;
            }
            total += v * piece_score;
        });

        total
    }
}

/// Evaluation choices exposed to configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    Neighborhood,
    #[default]
    PatternBalanced,
    PatternAggressive,
}
