use crate::boards::board::{Board, CheckersKind, ChessKind, Color, Piece, PieceKind};

/// Material weight of a piece. The chess king weighs nothing: losing it ends
/// the game, which is scored separately.
pub fn piece_value(piece: Piece) -> f64 {
    match piece.kind {
        PieceKind::Checkers(CheckersKind::Double) | PieceKind::Chess(ChessKind::Queen) => 9.0,
        PieceKind::Chess(ChessKind::Rook) => 5.0,
        PieceKind::Chess(ChessKind::Bishop) | PieceKind::Chess(ChessKind::Knight) => 3.0,
        PieceKind::Checkers(CheckersKind::Single)
        | PieceKind::Chess(ChessKind::Pawn)
        | PieceKind::Chess(ChessKind::Pessantable) => 1.0,
        PieceKind::Chess(ChessKind::King) => 0.0,
    }
}

/// Rates a board from red's point of view: higher is better for red.
///
/// A decided game rates as positive infinity for a red win and negative
/// infinity for a black win.
pub fn rate_board(board: &Board) -> f64 {
    match board.state.winner {
        Some(Color::Red) => f64::INFINITY,
        Some(Color::Black) => f64::NEG_INFINITY,
        None => board
            .pieces_with_coordinates()
            .map(|(_, piece)| match piece.color {
                Color::Red => piece_value(piece),
                Color::Black => -piece_value(piece),
            })
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::board::{make_board, Ruleset};

    #[test]
    fn test_start_positions_are_balanced() {
        for red in [Ruleset::Chess, Ruleset::Checkers] {
            for black in [Ruleset::Chess, Ruleset::Checkers] {
                let board = make_board(red, black);
                let expected = match (red, black) {
                    (Ruleset::Chess, Ruleset::Checkers) => 39.0 - 12.0,
                    (Ruleset::Checkers, Ruleset::Chess) => 12.0 - 39.0,
                    _ => 0.0,
                };
                assert_eq!(rate_board(&board), expected, "{} vs {}", red, black);
            }
        }
    }

    #[test]
    fn test_winner_is_infinite() {
        let mut board = make_board(Ruleset::Chess, Ruleset::Chess);
        board.state.winner = Some(Color::Red);
        assert_eq!(rate_board(&board), f64::INFINITY);
        board.state.winner = Some(Color::Black);
        assert_eq!(rate_board(&board), f64::NEG_INFINITY);
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(piece_value(Piece::checkers(Color::Red, CheckersKind::Double)), 9.0);
        assert_eq!(piece_value(Piece::chess(Color::Black, ChessKind::Pessantable)), 1.0);
        assert_eq!(piece_value(Piece::chess(Color::Black, ChessKind::King)), 0.0);
    }
}
