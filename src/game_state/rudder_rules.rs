//! Board configuration and the terminal-state rules of X-Rudder.

use crate::game_state::rudder_types::{Outcome, Side};
use crate::game_state::game_state::GameState;

pub const DEFAULT_WIDTH: usize = 12;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_PIECES_PER_SIDE: u32 = 15;
pub const DEFAULT_SHIFTS: u32 = 30;

/// Construction parameters for a `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RudderConfig {
    pub width: usize,
    pub height: usize,
    pub initial_pieces: u32,
    pub initial_shifts: u32,
}

impl Default for RudderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_pieces: DEFAULT_PIECES_PER_SIDE,
            initial_shifts: DEFAULT_SHIFTS,
        }
    }
}

/// Scan for a winning X-shaped cluster, falling back to the draw rule.
///
/// A centre cell with value `v` completes an X when its four diagonal
/// neighbours sum to `4v`, unless both horizontal neighbours belong to the
/// opponent. When the same scan finds clusters for both sides, the player who
/// moved last wins. That tie-break only fires once the second sign shows up in
/// raster order, so the result for multiple clusters depends on scan order.
pub fn find_outcome(game_state: &GameState) -> Option<Outcome> {
    let width = game_state.width() as i32;
    let height = game_state.height() as i32;
    let at = |x: i32, y: i32| game_state.value_at(x, y);

    let mut winner: Option<i32> = None;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let v = at(x, y);
            if v == 0 {
                continue;
            }

            let diagonals = at(x - 1, y - 1) + at(x + 1, y + 1) + at(x + 1, y - 1) + at(x - 1, y + 1);
            let flanked = at(x - 1, y) + at(x + 1, y) == -2 * v;
            if 4 * v != diagonals || flanked {
                continue;
            }

            if winner == Some(-v) {
                return Some(Outcome::Win(last_mover(game_state.get_turn())));
            }
            winner = Some(v);
        }
    }

    match winner {
        Some(v) if v < 0 => Some(Outcome::Win(Side::X)),
        Some(_) => Some(Outcome::Win(Side::O)),
        None if is_exhausted(game_state) => Some(Outcome::Draw),
        None => None,
    }
}

#[inline]
fn last_mover(turn: u32) -> Side {
    if turn % 2 == 0 {
        Side::O
    } else {
        Side::X
    }
}

#[inline]
fn is_exhausted(game_state: &GameState) -> bool {
    game_state.shifts_left() == 0
        && game_state.pieces_left(Side::X) == 0
        && game_state.pieces_left(Side::O) == 0
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;
    use crate::game_state::rudder_types::{Move, Outcome, Side};

    /// Play `x_cells` for X and `o_cells` for O alternately, X first. The shorter
    /// list is padded with placements from `filler`.
    fn play(state: &mut GameState, x_cells: &[(i32, i32)], o_cells: &[(i32, i32)], filler: &[(i32, i32)]) {
        let mut filler = filler.iter();
        let plies = x_cells.len().max(o_cells.len());
        for i in 0..plies {
            let x_cell = x_cells.get(i).or_else(|| filler.next()).copied().expect("filler");
            state.make_move(&Move::place(x_cell.0, x_cell.1)).expect("x placement");
            if i + 1 == plies && i >= o_cells.len() {
                break;
            }
            let o_cell = o_cells.get(i).or_else(|| filler.next()).copied().expect("filler");
            state.make_move(&Move::place(o_cell.0, o_cell.1)).expect("o placement");
        }
    }

    const DIAMOND: [(i32, i32); 5] = [(5, 5), (4, 4), (6, 6), (6, 4), (4, 6)];
    const FAR_O: [(i32, i32); 5] = [(0, 0), (11, 0), (0, 9), (11, 9), (2, 0)];

    #[test]
    fn diamond_of_five_wins_only_after_fifth_piece() {
        let mut state = GameState::new_game();
        for (i, (x, y)) in DIAMOND.iter().enumerate() {
            state.make_move(&Move::place(*x, *y)).expect("x placement");
            if i < 4 {
                assert_eq!(state.get_winner(), None, "no win after {} pieces", i + 1);
                state.make_move(&Move::place(FAR_O[i].0, FAR_O[i].1)).expect("o placement");
                assert_eq!(state.get_winner(), None);
            }
        }
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::X)));
    }

    #[test]
    fn flanked_centre_is_not_a_win() {
        let mut state = GameState::new_game();
        play(&mut state, &DIAMOND, &[(4, 5), (6, 5)], &FAR_O);
        assert_eq!(state.get_winner(), None);
    }

    #[test]
    fn single_flank_does_not_block_the_win() {
        let mut state = GameState::new_game();
        play(&mut state, &DIAMOND, &[(4, 5)], &FAR_O);
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::X)));
    }

    #[test]
    fn opposite_clusters_in_one_scan_go_to_last_mover() {
        let mut state = GameState::new_game();
        let x_diamond = [(2, 2), (1, 1), (3, 3), (3, 1), (1, 3)];
        let o_diamond = [(8, 6), (7, 5), (9, 7), (9, 5), (7, 7)];
        // Build X's cluster minus its centre, O's cluster complete, then X closes.
        for i in 1..5 {
            state.make_move(&Move::place(x_diamond[i].0, x_diamond[i].1)).expect("x");
            state.make_move(&Move::place(o_diamond[i].0, o_diamond[i].1)).expect("o");
        }
        state.make_move(&Move::place(0, 9)).expect("x filler");
        state.make_move(&Move::place(o_diamond[0].0, o_diamond[0].1)).expect("o centre");
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::O)));

        state.make_move(&Move::place(x_diamond[0].0, x_diamond[0].1)).expect("x centre");
        // X's cluster is found first in raster order, O's second: X moved last.
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::X)));
    }

    #[test]
    fn two_clusters_of_one_side_keep_that_side_winning() {
        let mut state = GameState::new_game();
        let o_cells = [
            (2, 2), (1, 1), (3, 3), (3, 1), (1, 3),
            (8, 6), (7, 5), (9, 7), (9, 5), (7, 7),
        ];
        // X plays along the top edge, where nothing is interior.
        for (i, (x, y)) in o_cells.iter().enumerate() {
            state.make_move(&Move::place(i as i32, 9)).expect("x filler");
            state.make_move(&Move::place(*x, *y)).expect("o placement");
        }
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::O)));

        state.make_move(&Move::place(10, 9)).expect("x moves last");
        assert_eq!(state.get_turn() % 2, 1);
        assert_eq!(state.get_winner(), Some(Outcome::Win(Side::O)));
    }

    #[test]
    fn exhausted_pools_without_cluster_is_a_draw() {
        let mut state = GameState::new(4, 4, 1, 0);
        state.make_move(&Move::place(0, 0)).expect("x");
        assert_eq!(state.get_winner(), None);
        state.make_move(&Move::place(3, 3)).expect("o");
        assert_eq!(state.get_winner(), Some(Outcome::Draw));
    }

    #[test]
    fn draw_needs_shifts_exhausted_too() {
        let mut state = GameState::new(4, 4, 1, 1);
        state.make_move(&Move::place(0, 0)).expect("x");
        state.make_move(&Move::place(3, 3)).expect("o");
        assert_eq!(state.get_winner(), None);
        state.make_move(&Move::shift(0, 0, 1, 0)).expect("x shift");
        assert_eq!(state.get_winner(), Some(Outcome::Draw));
    }
}
