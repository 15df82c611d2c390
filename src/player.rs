//! A named participant bound to a move-selection strategy.

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::EngineError;
use crate::game_state::rudder_types::{GameState, Move};

pub struct Player {
    name: String,
    engine: Box<dyn Engine>,
    params: SearchParams,
}

impl Player {
    pub fn new(name: impl Into<String>, engine: Box<dyn Engine>) -> Self {
        Self {
            name: name.into(),
            engine,
            params: SearchParams::default(),
        }
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Whether the side to move has any legal move. When false the driver
    /// skips the turn instead of asking for a move.
    #[inline]
    pub fn can_move(&self, game_state: &GameState) -> bool {
        game_state.has_legal_move()
    }

    pub fn select_move(&mut self, game_state: &GameState) -> Result<Move, EngineError> {
        self.engine
            .choose_move(game_state, &self.params)?
            .best_move
            .ok_or(EngineError::NoLegalMoves(game_state.side_to_move()))
    }

    /// Select a move and apply it to `game_state`.
    pub fn make_move(&mut self, game_state: &mut GameState) -> Result<Move, EngineError> {
        let mv = self.select_move(game_state)?;
        game_state.make_move(&mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::engines::engine_human::HumanEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn make_move_applies_the_selected_move() {
        let mut state = GameState::new_game();
        let human = HumanEngine::new(Cursor::new(b"c 3\n".to_vec()), Vec::new());
        let mut player = Player::new("alice", Box::new(human));
        let mv = player.make_move(&mut state).expect("move");
        assert_eq!(mv, Move::place(2, 2));
        assert_eq!(state.get_turn(), 1);
        assert_eq!(player.name(), "alice");
        assert_eq!(player.engine_name(), "Human");
    }

    #[test]
    fn can_move_reflects_position() {
        let mut state = GameState::new(2, 1, 1, 0);
        let player = Player::new("bot", Box::new(RandomEngine::with_seed(3)));
        assert!(player.can_move(&state));
        state.make_move(&Move::place(0, 0)).expect("x");
        state.make_move(&Move::place(1, 0)).expect("o");
        assert!(!player.can_move(&state));
    }
}
