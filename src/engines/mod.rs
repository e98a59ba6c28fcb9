use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::boards::board::{Board, Move};

pub mod engine_alpha_beta;
pub mod evaluation;

pub trait Engine {
    fn name(&self) -> &str;
    /// Picks one of the board's playable moves, or `None` when there is none.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

/// Plays a uniformly random playable move from a seeded generator, so a run
/// can be reproduced from its seed.
pub struct RandomEngine {
    rng: Pcg64,
}

impl RandomEngine {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        board.playable_moves().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::board::{make_board, Ruleset};

    #[test]
    fn test_random_engine_is_reproducible() {
        let board = make_board(Ruleset::Chess, Ruleset::Checkers);
        let picks = |seed| {
            let mut engine = RandomEngine::with_seed(seed);
            (0..10).filter_map(|_| engine.choose_move(&board)).collect::<Vec<_>>()
        };
        assert_eq!(picks(7), picks(7));
        assert!(picks(7).iter().all(|mv| board.playable_moves().contains(mv)));
    }

    #[test]
    fn test_random_engine_without_moves() {
        let board = Board::empty(Ruleset::Chess, Ruleset::Chess);
        assert_eq!(RandomEngine::with_seed(1).choose_move(&board), None);
    }
}
