use crate::game_state::rudder_types::*;

/// Single history record for `make_move` / `undo_move`.
///
/// `mv == None` marks a skipped turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mover: Side,
    pub mv: Option<Move>,
}
