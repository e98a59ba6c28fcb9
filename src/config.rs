use crate::boards::board::{Color, Ruleset};

/// Options for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub red: Ruleset,
    pub black: Ruleset,
    /// The side typed in by the player. The engine answers for the other one
    /// when `auto_move` is set.
    pub human: Color,
    pub auto_move: bool,
    pub search_depth: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            red: Ruleset::Chess,
            black: Ruleset::Checkers,
            human: Color::Red,
            auto_move: false,
            search_depth: 2,
        }
    }
}

impl GameOptions {
    pub fn ruleset_of(&self, color: Color) -> Ruleset {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    /// True if the engine should move for `turn` without waiting for input.
    pub fn engine_moves_for(&self, turn: Color) -> bool {
        self.auto_move && turn != self.human
    }
}
