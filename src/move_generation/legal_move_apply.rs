//! In-place make/undo for `GameState`.
//!
//! `make_move` validates first and mutates second, so a rejected move leaves
//! the state untouched. `undo_move` is the exact inverse of the last applied
//! record; the search relies on this instead of copying states.

use crate::errors::InvalidMove;
use crate::game_state::rudder_types::*;
use crate::move_generation::legal_move_generator::has_legal_move;

impl GameState {
    /// Check `mv` for the side to move without applying it.
    pub fn check_move(&self, mv: &Move) -> Result<(), InvalidMove> {
        let (x, y) = mv.destination();
        if !self.in_bounds(x, y) {
            return Err(InvalidMove::OutOfBounds { x, y });
        }
        if !self.get_space(x, y).is_empty() {
            return Err(InvalidMove::Occupied { x, y });
        }

        let mover = self.side_to_move();
        match mv.source() {
            Some((px, py)) => {
                if !self.in_bounds(px, py) {
                    return Err(InvalidMove::SourceOutOfBounds { x: px, y: py });
                }
                if !self.get_space(px, py).is_side(mover) {
                    return Err(InvalidMove::NotOwnPiece { x: px, y: py });
                }
                if chebyshev((px, py), (x, y)) > 1 {
                    return Err(InvalidMove::ShiftTooFar);
                }
                if self.shifts_left == 0 {
                    return Err(InvalidMove::NoShiftsLeft);
                }
            }
            None => {
                if self.pieces_left[mover.index()] == 0 {
                    return Err(InvalidMove::NoPiecesLeft { side: mover });
                }
            }
        }

        Ok(())
    }

    pub fn make_move(&mut self, mv: &Move) -> Result<(), InvalidMove> {
        self.check_move(mv)?;
        self.apply_unchecked(mv);
        Ok(())
    }

    /// Apply a move already known to be legal (generated moves only).
    pub(crate) fn apply_unchecked(&mut self, mv: &Move) {
        let mover = self.side_to_move();
        let to = self.index(mv.x(), mv.y());

        match mv.source() {
            Some((px, py)) => {
                let from = self.index(px, py);
                self.cells[to] = self.cells[from];
                self.cells[from] = Cell::Empty;
                self.shifts_left -= 1;
            }
            None => {
                self.cells[to] = Cell::Occupied(mover);
                self.pieces_left[mover.index()] -= 1;
            }
        }

        self.history.push(UndoState {
            mover,
            mv: Some(*mv),
        });
        self.turn += 1;
    }

    /// Revert the last history record. Does nothing on an empty history.
    pub fn undo_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };
        self.turn -= 1;

        let Some(mv) = record.mv else {
            return;
        };
        let to = self.index(mv.x(), mv.y());
        match mv.source() {
            Some((px, py)) => {
                let from = self.index(px, py);
                self.cells[from] = self.cells[to];
                self.cells[to] = Cell::Empty;
                self.shifts_left += 1;
            }
            None => {
                self.cells[to] = Cell::Empty;
                self.pieces_left[record.mover.index()] += 1;
            }
        }
    }

    /// Skip the turn of a side that has no legal move.
    pub fn pass_turn(&mut self) -> Result<(), InvalidMove> {
        if has_legal_move(self) {
            return Err(InvalidMove::PassWithLegalMoves);
        }
        self.history.push(UndoState {
            mover: self.side_to_move(),
            mv: None,
        });
        self.turn += 1;
        Ok(())
    }

    #[inline]
    pub fn has_legal_move(&self) -> bool {
        has_legal_move(self)
    }
}
