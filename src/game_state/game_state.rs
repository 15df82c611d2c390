//! Core mutable board state.
//!
//! `GameState` is the central model for the engine. It stores the cell grid,
//! per-side piece reserves, the shared shift pool, the turn counter, and the
//! history stack that backs exact make/undo workflows. Mutation lives in
//! `move_generation::legal_move_apply`.

use crate::game_state::rudder_rules::{find_outcome, RudderConfig};
use crate::game_state::rudder_types::*;

/// Incremental game state optimized for in-place make/undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    width: usize,
    height: usize,
    // Row-major, `y * width + x`.
    pub(crate) cells: Vec<Cell>,

    // [side]
    pub(crate) pieces_left: [u32; 2],
    pub(crate) shifts_left: u32,

    pub(crate) turn: u32,
    pub(crate) history: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_config(&RudderConfig::default())
    }
}

impl GameState {
    pub fn new(width: usize, height: usize, initial_pieces: u32, initial_shifts: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            pieces_left: [initial_pieces; 2],
            shifts_left: initial_shifts,
            turn: 0,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_config(config: &RudderConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            config.initial_pieces,
            config.initial_shifts,
        )
    }

    /// Standard 12x10 game with 15 pieces per side and 30 shared shifts.
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell at `(x, y)`; out-of-range coordinates read as empty.
    #[inline]
    pub fn get_space(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[self.index(x, y)]
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub(crate) fn value_at(&self, x: i32, y: i32) -> i32 {
        self.get_space(x, y).value()
    }

    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    #[inline]
    pub fn get_turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        Side::for_turn(self.turn)
    }

    #[inline]
    pub fn pieces_left(&self, side: Side) -> u32 {
        self.pieces_left[side.index()]
    }

    #[inline]
    pub fn shifts_left(&self) -> u32 {
        self.shifts_left
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// Most recent move actually played (skipped turns are ignored).
    pub fn last_move(&self) -> Option<Move> {
        self.history.iter().rev().find_map(|entry| entry.mv)
    }

    #[inline]
    pub fn get_winner(&self) -> Option<Outcome> {
        find_outcome(self)
    }

    /// Number of pieces of `side` currently on the board.
    pub fn pieces_on_board(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.is_side(side)).count()
    }
}
