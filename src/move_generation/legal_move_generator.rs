//! Legal move enumeration for the side to move.
//!
//! Candidates per cell: a placement when the cell is empty and the mover has
//! pieces in reserve, otherwise shifts onto every empty neighbour when the cell
//! holds the mover's piece and shifts remain. Neighbours are visited column
//! by column (`i` outer, `j` inner).

use crate::game_state::rudder_types::*;
use crate::move_generation::move_generator::MoveGenerator;

/// Raster-order generator: rows bottom to top, columns left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves_into(&mut self, game_state: &GameState, out: &mut Vec<Move>) {
        out.clear();
        for y in 0..game_state.height() as i32 {
            for x in 0..game_state.width() as i32 {
                push_cell_moves(game_state, x, y, out);
            }
        }
    }
}

/// All legal moves in raster order.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::new();
    LegalMoveGenerator.generate_legal_moves_into(game_state, &mut out);
    out
}

/// Append the candidate moves rooted at cell `(x, y)`.
pub(crate) fn push_cell_moves(game_state: &GameState, x: i32, y: i32, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move();
    let cell = game_state.get_space(x, y);

    if cell.is_empty() {
        if game_state.pieces_left(mover) > 0 {
            out.push(Move::place(x, y));
        }
    } else if cell.is_side(mover) && game_state.shifts_left() > 0 {
        for i in x - 1..=x + 1 {
            for j in y - 1..=y + 1 {
                if (i, j) != (x, y) && game_state.in_bounds(i, j) && game_state.get_space(i, j).is_empty() {
                    out.push(Move::shift(x, y, i, j));
                }
            }
        }
    }
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    let mover = game_state.side_to_move();
    let has_empty = game_state.cells.iter().any(|c| c.is_empty());
    if game_state.pieces_left(mover) > 0 && has_empty {
        return true;
    }
    if game_state.shifts_left() == 0 {
        return false;
    }

    (0..game_state.height() as i32).any(|y| {
        (0..game_state.width() as i32).any(|x| {
            game_state.get_space(x, y).is_side(mover)
                && (-1..=1).any(|dx| {
                    (-1..=1).any(|dy| {
                        (dx, dy) != (0, 0)
                            && game_state.in_bounds(x + dx, y + dy)
                            && game_state.get_space(x + dx, y + dy).is_empty()
                    })
                })
        })
    })
}
