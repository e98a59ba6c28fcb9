use crate::boards::board::Board;

/// Counts the leaf positions reachable in `depth` plies.
///
/// A ply is one call to `perform_move`, so each jump of a capture chain counts
/// separately. A decided game is a leaf regardless of the remaining depth.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 || board.state.winner.is_some() {
        return 1u64;
    }

    let mut node_count = 0u64;
    for mv in board.playable_moves() {
        if let Ok(new_board) = board.perform_move(mv) {
            node_count += perft(&new_board, depth - 1);
        }
    }
    node_count
}

/// Leaf counts per root move, sorted by move notation.
pub fn divide(board: &Board, depth: u8) -> Vec<(String, u64)> {
    let mut result_moves: Vec<(String, u64)> = board
        .playable_moves()
        .into_iter()
        .filter_map(|mv| {
            let new_board = board.perform_move(mv).ok()?;
            Some((mv.as_algebraic(), perft(&new_board, depth.saturating_sub(1))))
        })
        .collect();
    result_moves.sort();
    result_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::board::{make_board, Ruleset};

    #[test]
    fn test_perft_chess() {
        let board = make_board(Ruleset::Chess, Ruleset::Chess);
        assert_eq!(perft(&board, 0), 1u64);
        assert_eq!(perft(&board, 1), 20u64);
        assert_eq!(perft(&board, 2), 400u64);
        assert_eq!(perft(&board, 3), 8902u64);
    }

    #[test]
    fn test_perft_checkers() {
        let board = make_board(Ruleset::Checkers, Ruleset::Checkers);
        assert_eq!(perft(&board, 1), 7u64);
        assert_eq!(perft(&board, 2), 49u64);
    }

    #[test]
    fn test_perft_mixed() {
        let board = make_board(Ruleset::Chess, Ruleset::Checkers);
        assert_eq!(perft(&board, 1), 20u64);
        let board = make_board(Ruleset::Checkers, Ruleset::Chess);
        assert_eq!(perft(&board, 1), 7u64);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let board = make_board(Ruleset::Chess, Ruleset::Checkers);
        let result = divide(&board, 2);
        assert_eq!(result.len(), 20);
        assert_eq!(result.iter().map(|(_, c)| c).sum::<u64>(), perft(&board, 2));
        assert!(result.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
