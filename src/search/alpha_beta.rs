//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search works on a single mutable `GameState`: every candidate is
//! applied, searched, and undone before the next sibling is tried. Scores
//! are absolute (positive favours `O`); the pruned search is written as
//! negamax, while the unpruned reference keeps the explicit max/min split so
//! the two formulations check each other.

use std::time::Instant;

use tracing::trace;

use crate::game_state::rudder_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Magnitude of a decided game. Dwarfs every heuristic score.
pub const WIN_MAGNITUDE: i32 = 1_000_000;

const INF: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Soft budget checked between root candidates.
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            movetime_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`, positive favouring `O`.
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub timed_out: bool,
}

/// Score of a finished game `depth` plies above the horizon. Wins found with
/// more depth remaining are faster and score further from zero.
#[inline]
pub fn terminal_score(outcome: Outcome, depth: u8) -> i32 {
    match outcome {
        Outcome::Win(side) => side.sign() * (WIN_MAGNITUDE + i32::from(depth)),
        Outcome::Draw => 0,
    }
}

#[inline]
pub fn is_win_score(score: i32) -> bool {
    score.abs() >= WIN_MAGNITUDE
}

/// Alpha-beta search for the side to move. `game_state` is used as the
/// workspace and is restored before returning.
pub fn alpha_beta_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started = Instant::now();
    let perspective = game_state.side_to_move().sign();
    let mut result = SearchResult::default();

    if let Some(outcome) = game_state.get_winner() {
        result.best_score = terminal_score(outcome, config.max_depth);
        result.nodes = 1;
        return result;
    }
    let moves = if config.max_depth == 0 {
        Vec::new()
    } else {
        generator.generate_legal_moves(game_state)
    };
    if moves.is_empty() {
        result.best_score = scorer.score(game_state);
        result.nodes = 1;
        return result;
    }

    let mut nodes = 1u64;
    let mut alpha = -INF;
    let beta = INF;
    let mut best = -INF;

    for mv in &moves {
        game_state.apply_unchecked(mv);
        let score = -negamax(
            game_state,
            generator,
            scorer,
            config.max_depth - 1,
            -beta,
            -alpha,
            &mut nodes,
        );
        game_state.undo_move();

        trace!(?mv, score = score * perspective, "root candidate");
        if score > best {
            best = score;
            result.best_move = Some(*mv);
        }
        if best > alpha {
            alpha = best;
        }

        if let Some(budget) = config.movetime_ms {
            if started.elapsed().as_millis() >= u128::from(budget) {
                result.timed_out = true;
                break;
            }
        }
    }

    result.best_score = best * perspective;
    result.reached_depth = config.max_depth;
    result.nodes = nodes;
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}

/// Value from the perspective of the side to move.
fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let perspective = game_state.side_to_move().sign();

    if let Some(outcome) = game_state.get_winner() {
        return terminal_score(outcome, depth) * perspective;
    }
    if depth == 0 {
        return scorer.score(game_state) * perspective;
    }

    let moves = generator.generate_legal_moves(game_state);
    // Locked position without a winner: score it like a horizon leaf.
    if moves.is_empty() {
        return scorer.score(game_state) * perspective;
    }

    let mut best = -INF;
    for mv in &moves {
        game_state.apply_unchecked(mv);
        let score = -negamax(game_state, generator, scorer, depth - 1, -beta, -alpha, nodes);
        game_state.undo_move();

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Unpruned minimax with the same conventions as `alpha_beta_search`.
pub fn full_minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
) -> SearchResult {
    let started = Instant::now();
    let mut result = SearchResult::default();
    let mut nodes = 1u64;

    if let Some(outcome) = game_state.get_winner() {
        result.best_score = terminal_score(outcome, depth);
        result.nodes = nodes;
        return result;
    }
    let moves = if depth == 0 {
        Vec::new()
    } else {
        generator.generate_legal_moves(game_state)
    };
    if moves.is_empty() {
        result.best_score = scorer.score(game_state);
        result.nodes = nodes;
        return result;
    }

    let maximizing = game_state.side_to_move() == Side::O;
    let mut best = if maximizing { -INF } else { INF };
    for mv in &moves {
        game_state.apply_unchecked(mv);
        let value = minimax_value_counted(game_state, generator, scorer, depth - 1, &mut nodes);
        game_state.undo_move();

        let improves = if maximizing { value > best } else { value < best };
        if improves {
            best = value;
            result.best_move = Some(*mv);
        }
    }

    result.best_score = best;
    result.reached_depth = depth;
    result.nodes = nodes;
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}

/// Exact minimax value of `game_state` searched `depth` plies deep.
pub fn minimax_value<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
) -> i32 {
    let mut nodes = 0;
    minimax_value_counted(game_state, generator, scorer, depth, &mut nodes)
}

fn minimax_value_counted<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if let Some(outcome) = game_state.get_winner() {
        return terminal_score(outcome, depth);
    }
    if depth == 0 {
        return scorer.score(game_state);
    }
    let moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return scorer.score(game_state);
    }

    if game_state.side_to_move() == Side::O {
        max_value(game_state, generator, scorer, depth, &moves, nodes)
    } else {
        min_value(game_state, generator, scorer, depth, &moves, nodes)
    }
}

fn max_value<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
    moves: &[Move],
    nodes: &mut u64,
) -> i32 {
    let mut best = -INF;
    for mv in moves {
        game_state.apply_unchecked(mv);
        best = best.max(minimax_value_counted(game_state, generator, scorer, depth - 1, nodes));
        game_state.undo_move();
    }
    best
}

fn min_value<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &mut G,
    scorer: &S,
    depth: u8,
    moves: &[Move],
    nodes: &mut u64,
) -> i32 {
    let mut best = INF;
    for mv in moves {
        game_state.apply_unchecked(mv);
        best = best.min(minimax_value_counted(game_state, generator, scorer, depth - 1, nodes));
        game_state.undo_move();
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::kernel_ordering::KernelMoveGenerator;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::{NeighborhoodScorer, PatternScorer};

    fn play(state: &mut GameState, moves: &[Move]) {
        for mv in moves {
            state.make_move(mv).expect("legal setup move");
        }
    }

    fn places(cells: &[(i32, i32)]) -> Vec<Move> {
        cells.iter().map(|(x, y)| Move::place(*x, *y)).collect()
    }

    /// Small positions with both placements and shifts available.
    fn small_positions() -> Vec<GameState> {
        let mut positions = Vec::new();

        positions.push(GameState::new(4, 4, 3, 3));

        let mut p = GameState::new(4, 4, 3, 3);
        play(&mut p, &places(&[(1, 1), (2, 2)]));
        positions.push(p);

        let mut p = GameState::new(5, 5, 3, 4);
        play(&mut p, &places(&[(2, 2), (1, 2), (1, 1), (3, 3), (3, 1)]));
        positions.push(p);

        let mut p = GameState::new(5, 5, 3, 4);
        play(&mut p, &places(&[(2, 2), (0, 0), (1, 1), (4, 4), (3, 3), (0, 4)]));
        positions.push(p);

        let mut p = GameState::new(5, 4, 3, 2);
        play(&mut p, &places(&[(1, 1), (2, 1), (3, 2)]));
        play(&mut p, &[Move::shift(2, 1, 2, 2)]);
        positions.push(p);

        positions
    }

    #[test]
    fn depth_zero_returns_eval_only() {
        let mut state = GameState::new_game();
        play(&mut state, &places(&[(5, 5), (0, 0), (4, 4)]));
        let result = alpha_beta_search(
            &mut state,
            &mut LegalMoveGenerator,
            &NeighborhoodScorer,
            SearchConfig {
                max_depth: 0,
                movetime_ms: None,
            },
        );
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, NeighborhoodScorer.score(&state));
    }

    #[test]
    fn takes_an_immediate_win() {
        let mut state = GameState::new_game();
        play(
            &mut state,
            &places(&[(4, 4), (0, 0), (6, 6), (11, 0), (6, 4), (0, 9), (4, 6), (11, 9)]),
        );
        let before = state.clone();
        let result = alpha_beta_search(
            &mut state,
            &mut LegalMoveGenerator,
            &PatternScorer::balanced(),
            SearchConfig::default(),
        );
        assert_eq!(result.best_move, Some(Move::place(5, 5)));
        assert_eq!(result.best_score, -(WIN_MAGNITUDE + 1));
        assert_eq!(state, before, "workspace must be restored");
    }

    #[test]
    fn blocks_an_immediate_loss() {
        let mut state = GameState::new_game();
        play(
            &mut state,
            &places(&[(0, 0), (4, 4), (11, 0), (6, 6), (0, 9), (6, 4), (11, 9), (4, 6)]),
        );
        let mut generator = KernelMoveGenerator::new(None);
        let result = alpha_beta_search(
            &mut state,
            &mut generator,
            &PatternScorer::balanced(),
            SearchConfig::default(),
        );
        assert_eq!(result.best_move, Some(Move::place(5, 5)));
        assert!(!is_win_score(result.best_score));
    }

    #[test]
    fn faster_wins_score_higher() {
        let slow = terminal_score(Outcome::Win(Side::O), 0);
        let fast = terminal_score(Outcome::Win(Side::O), 2);
        assert!(fast > slow);
        assert!(terminal_score(Outcome::Win(Side::X), 2) < terminal_score(Outcome::Win(Side::X), 0));
        assert_eq!(terminal_score(Outcome::Draw, 3), 0);
    }

    #[test]
    fn pruned_and_unpruned_search_agree() {
        let scorer = PatternScorer::balanced();
        for (i, position) in small_positions().into_iter().enumerate() {
            for depth in 1..=3u8 {
                let mut a = position.clone();
                let mut b = position.clone();
                let pruned = alpha_beta_search(
                    &mut a,
                    &mut LegalMoveGenerator,
                    &scorer,
                    SearchConfig {
                        max_depth: depth,
                        movetime_ms: None,
                    },
                );
                let full = full_minimax_search(&mut b, &mut LegalMoveGenerator, &scorer, depth);

                assert_eq!(pruned.best_move, full.best_move, "position {i} depth {depth}");
                assert_eq!(pruned.best_score, full.best_score, "position {i} depth {depth}");
                assert!(pruned.nodes <= full.nodes);
                assert_eq!(a, position);
                assert_eq!(b, position);
            }
        }
    }

    #[test]
    fn ring_ordering_keeps_the_minimax_value() {
        let scorer = PatternScorer::balanced();
        for (i, position) in small_positions().into_iter().enumerate() {
            for depth in 1..=3u8 {
                let mut a = position.clone();
                let mut b = position.clone();
                let ringed = alpha_beta_search(
                    &mut a,
                    &mut KernelMoveGenerator::new(None),
                    &scorer,
                    SearchConfig {
                        max_depth: depth,
                        movetime_ms: None,
                    },
                );
                let full = full_minimax_search(&mut b, &mut LegalMoveGenerator, &scorer, depth);

                assert_eq!(ringed.best_score, full.best_score, "position {i} depth {depth}");
                assert_eq!(a, position);
            }
        }
    }

    #[test]
    fn chosen_move_is_at_least_as_good_as_every_alternative() {
        let scorer = NeighborhoodScorer;
        let depth = 2u8;
        for position in small_positions() {
            let mut workspace = position.clone();
            let mover = workspace.side_to_move();
            let result = alpha_beta_search(
                &mut workspace,
                &mut LegalMoveGenerator,
                &scorer,
                SearchConfig {
                    max_depth: depth,
                    movetime_ms: None,
                },
            );
            let chosen = result.best_move.expect("small positions have moves");

            let mut chosen_value = None;
            let mut values = Vec::new();
            for mv in LegalMoveGenerator.generate_legal_moves(&workspace) {
                workspace.make_move(&mv).expect("generated move is legal");
                let value = mover.sign() * minimax_value(&mut workspace, &mut LegalMoveGenerator, &scorer, depth - 1);
                workspace.undo_move();
                if mv == chosen {
                    chosen_value = Some(value);
                }
                values.push(value);
            }

            let chosen_value = chosen_value.expect("chosen move is legal");
            assert_eq!(chosen_value, mover.sign() * result.best_score);
            assert!(values.iter().all(|v| chosen_value >= *v));
        }
    }

    #[test]
    fn zero_budget_stops_after_first_root_move() {
        let mut state = GameState::new(5, 5, 3, 3);
        play(&mut state, &places(&[(2, 2)]));
        let result = alpha_beta_search(
            &mut state,
            &mut LegalMoveGenerator,
            &NeighborhoodScorer,
            SearchConfig {
                max_depth: 2,
                movetime_ms: Some(0),
            },
        );
        assert!(result.timed_out);
        assert_eq!(result.best_move, Some(Move::place(0, 0)));
    }

    #[test]
    fn finished_game_has_no_best_move() {
        let mut state = GameState::new(3, 3, 1, 0);
        play(&mut state, &places(&[(0, 0), (2, 2)]));
        let result = alpha_beta_search(
            &mut state,
            &mut LegalMoveGenerator,
            &NeighborhoodScorer,
            SearchConfig::default(),
        );
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
    }
}
