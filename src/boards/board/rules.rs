use log::debug;

use super::{Board, CheckersKind, ChessKind, Color, Move, MoveError, Piece, PieceKind, Ruleset, Square};

/// The row a checkers single is kinged on: the far side from where it started.
fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Black => 7,
        Color::Red => 0,
    }
}

impl Board {
    /// Returns the board after `mv` has been played. `self` is left untouched.
    ///
    /// The move is applied as given; callers are expected to take it from
    /// [`Board::legal_moves_for_board`] or [`Board::playable_moves`].
    pub fn perform_move(&self, mv: Move) -> Result<Board, MoveError> {
        for square in [Some(mv.from), Some(mv.to), mv.captured].into_iter().flatten() {
            if !square.on_board() {
                return Err(MoveError::OffBoard { square });
            }
        }

        let moving_piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySourceSquare { square: mv.from })?;
        if moving_piece.color != self.state.turn {
            return Err(MoveError::WrongTurnMove {
                square: mv.from,
                color: moving_piece.color,
                turn: self.state.turn,
            });
        }

        let mut next = self.clone();
        let taken_piece = mv.captured.and_then(|field| next.take(field));
        next.take(mv.from);
        next.put(mv.to, moving_piece);

        next.apply_special_rules(mv, moving_piece, taken_piece);
        Ok(next)
    }

    fn apply_special_rules(&mut self, mv: Move, moving_piece: Piece, taken_piece: Option<Piece>) {
        self.update_winner(taken_piece);

        if moving_piece.kind == PieceKind::Checkers(CheckersKind::Single) && mv.to.row == promotion_row(moving_piece.color)
        {
            // A freshly kinged piece never continues a capture chain
            debug!("{} checker kinged on {}", moving_piece.color, mv.to);
            self.put(mv.to, moving_piece.with_kind(PieceKind::Checkers(CheckersKind::Double)));
            self.end_turn();
        } else if moving_piece.ruleset() == Ruleset::Checkers && mv.is_capture() {
            self.state.multi_capturing = Some(mv.to);
            let can_continue = self.legal_moves_from(mv.to).iter().any(|m| m.is_capture());
            if can_continue {
                debug!("{} continues capturing from {}", moving_piece.color, mv.to);
            } else {
                self.end_turn();
            }
        } else {
            self.end_turn();
        }

        self.update_en_passant(mv, moving_piece);
    }

    /// Capturing a chess king wins outright; otherwise a side left without
    /// pieces loses.
    fn update_winner(&mut self, taken_piece: Option<Piece>) {
        let winner = match taken_piece {
            Some(Piece {
                color,
                kind: PieceKind::Chess(ChessKind::King),
            }) => Some(color.opposite()),
            _ if !self.has_pieces(Color::Black) => Some(Color::Red),
            _ if !self.has_pieces(Color::Red) => Some(Color::Black),
            _ => None,
        };
        if let Some(color) = winner {
            debug!("{} wins", color);
            self.state.winner = Some(color);
        }
    }

    fn end_turn(&mut self) {
        self.state.multi_capturing = None;
        self.state.turn = self.state.turn.opposite();
    }

    /// Pessantable pawns revert after one move; a pawn that just advanced two
    /// rows becomes pessantable.
    fn update_en_passant(&mut self, mv: Move, moving_piece: Piece) {
        for square in self.squares.iter_mut().flatten() {
            if let Square::Occupied(piece) = square {
                if piece.kind == PieceKind::Chess(ChessKind::Pessantable) {
                    piece.kind = PieceKind::Chess(ChessKind::Pawn);
                }
            }
        }

        if moving_piece.kind == PieceKind::Chess(ChessKind::Pawn) && (mv.from.row - mv.to.row).abs() == 2 {
            debug!("pawn on {} is pessantable", mv.to);
            self.put(mv.to, moving_piece.with_kind(PieceKind::Chess(ChessKind::Pessantable)));
        }
    }
}
