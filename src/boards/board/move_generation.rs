use std::collections::BTreeMap;

use super::{Board, Field, Move, ParseError, PieceKind, Ruleset};

impl Board {
    /// Legal moves of the piece on square `index` (0..64, row-major).
    ///
    /// Empty squares, pieces of the side not to move, and indices past the
    /// board yield no moves.
    pub fn legal_moves_for_square(&self, index: usize) -> Vec<Move> {
        if index >= 64 {
            return Vec::new();
        }
        self.legal_moves_from(Field::from_index(index))
    }

    pub fn legal_moves_from(&self, from: Field) -> Vec<Move> {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.state.turn => match piece.kind {
                PieceKind::Checkers(kind) => self.generate_checkers_moves(from, piece, kind),
                PieceKind::Chess(kind) => self.generate_chess_moves(from, piece, kind),
            },
            _ => Vec::new(),
        }
    }

    /// Legal moves for every square, keyed by index. All 64 keys are present.
    ///
    /// A checkers side that can capture anywhere must capture: every
    /// non-capturing move is then dropped from every square.
    pub fn legal_moves_for_board(&self) -> BTreeMap<usize, Vec<Move>> {
        let mut all_moves: BTreeMap<usize, Vec<Move>> =
            (0..64).map(|index| (index, self.legal_moves_for_square(index))).collect();

        if self.ruleset_of(self.state.turn) == Ruleset::Checkers {
            let can_capture = all_moves.values().flatten().any(|mv| mv.is_capture());
            if can_capture {
                for moves in all_moves.values_mut() {
                    moves.retain(|mv| mv.is_capture());
                }
            }
        }

        all_moves
    }

    /// The moves a driver should choose from, in index order.
    ///
    /// While a capture chain is pending only further captures by the chaining
    /// piece are playable.
    pub fn playable_moves(&self) -> Vec<Move> {
        match self.state.multi_capturing {
            Some(field) => self
                .legal_moves_from(field)
                .into_iter()
                .filter(|mv| mv.is_capture())
                .collect(),
            None => self.legal_moves_for_board().into_values().flatten().collect(),
        }
    }

    /// Resolves user input like `e2e4` or `c3xe5` to a playable move.
    pub fn parse_playable_move(&self, notation: &str) -> Result<Move, ParseError> {
        let squares: String = notation.trim().chars().filter(|&c| c != 'x').collect();
        if squares.len() != 4 || !squares.is_ascii() {
            return Err(ParseError::InvalidMove(notation.to_string()));
        }
        let from = Field::from_algebraic(&squares[0..2])?;
        let to = Field::from_algebraic(&squares[2..4])?;
        self.playable_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or_else(|| ParseError::InvalidMove(notation.to_string()))
    }
}
