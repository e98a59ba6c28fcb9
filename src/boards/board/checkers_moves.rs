use super::{Board, CheckersKind, Color, Field, Move, Piece};

// Offsets as seen by black, which advances toward row 7.
const SINGLE_DIRECTIONS: [Field; 2] = [Field::new(1, 1), Field::new(1, -1)];
const DOUBLE_DIRECTIONS: [Field; 4] = [Field::new(1, 1), Field::new(1, -1), Field::new(-1, 1), Field::new(-1, -1)];

/// Direction offsets a checkers piece may move along, flipped for red.
fn directions(color: Color, kind: CheckersKind) -> Vec<Field> {
    let offsets: &[Field] = match kind {
        CheckersKind::Single => &SINGLE_DIRECTIONS,
        CheckersKind::Double => &DOUBLE_DIRECTIONS,
    };
    match color {
        Color::Black => offsets.to_vec(),
        Color::Red => offsets.iter().map(|offset| offset.scale(-1)).collect(),
    }
}

impl Board {
    /// Generates the simple advances and single-jump captures of a checkers piece.
    ///
    /// Only the jumps available right now are returned. Continuing a chain is a
    /// state transition handled by `perform_move` through `multi_capturing`.
    pub(crate) fn generate_checkers_moves(&self, from: Field, piece: Piece, kind: CheckersKind) -> Vec<Move> {
        let offsets = directions(piece.color, kind);
        let mut moves = Vec::with_capacity(8);

        for &offset in &offsets {
            let to = from + offset;
            if self.is_vacant(to) {
                moves.push(Move::new(from, to));
            }
        }

        for &offset in &offsets {
            let jumped = from + offset;
            match self.piece_at(jumped) {
                Some(victim) if victim.color != piece.color => {
                    let to = from + offset.scale(2);
                    if self.is_vacant(to) {
                        moves.push(Move::capturing(from, to, jumped));
                    }
                }
                _ => {}
            }
        }

        moves
    }
}
