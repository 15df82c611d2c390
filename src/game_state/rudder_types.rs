//! Core value types shared by the board model, move generation, and search.
//!
//! Cells carry a signed value (`X == -1`, `Empty == 0`, `O == +1`) so the win
//! scan and the evaluation functions can work with plain integer sums.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move. `X` is the first player (even turns), `O` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Sign used for cell values and scores. Positive scores favour `O`.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::X => -1,
            Side::O => 1,
        }
    }

    #[inline]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Side::X
        } else {
            Side::O
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(side) => side.sign(),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is_side(self, side: Side) -> bool {
        self == Cell::Occupied(side)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// A placement onto `(x, y)`, or a shift from `source` onto `(x, y)`.
///
/// Coordinates are signed so that out-of-range input survives parsing and is
/// rejected by `GameState::check_move` rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    x: i32,
    y: i32,
    source: Option<(i32, i32)>,
}

impl Move {
    #[inline]
    pub const fn place(x: i32, y: i32) -> Self {
        Self { x, y, source: None }
    }

    #[inline]
    pub const fn shift(prev_x: i32, prev_y: i32, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            source: Some((prev_x, prev_y)),
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn destination(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub const fn source(&self) -> Option<(i32, i32)> {
        self.source
    }

    #[inline]
    pub const fn is_shift(&self) -> bool {
        self.source.is_some()
    }
}

/// Chebyshev (king-move) distance between two cells.
#[inline]
pub fn chebyshev(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}
