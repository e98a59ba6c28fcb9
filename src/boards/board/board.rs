use super::model::{CheckersKind, ChessKind, Color, Field, GameState, Piece, Ruleset, Square};

/// An 8x8 position with the ruleset each side plays and the turn state.
///
/// Red always sits at the bottom (rows 5-7) and black at the top (rows 0-2).
/// Boards are value snapshots: every transition produces a new `Board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Square; 8]; 8],
    pub red: Ruleset,
    pub black: Ruleset,
    pub state: GameState,
}

const CHESS_BACK_ROW: [ChessKind; 8] = [
    ChessKind::Rook,
    ChessKind::Knight,
    ChessKind::Bishop,
    ChessKind::Queen,
    ChessKind::King,
    ChessKind::Bishop,
    ChessKind::Knight,
    ChessKind::Rook,
];

/// Builds the standard starting position, red to move.
pub fn make_board(red: Ruleset, black: Ruleset) -> Board {
    Board::new(red, black)
}

impl Board {
    /// Creates an empty board with red to move.
    pub fn empty(red: Ruleset, black: Ruleset) -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
            red,
            black,
            state: GameState::default(),
        }
    }

    /// Creates the starting position for the given rulesets.
    pub fn new(red: Ruleset, black: Ruleset) -> Self {
        let mut board = Self::empty(red, black);

        match black {
            Ruleset::Chess => {
                board.fill_chess_back_row(0, Color::Black);
                board.fill_row(1, |_| Some(Piece::chess(Color::Black, ChessKind::Pawn)));
            }
            Ruleset::Checkers => {
                for row in 0..3 {
                    board.fill_checkers_row(row, Color::Black);
                }
            }
        }

        match red {
            Ruleset::Chess => {
                board.fill_row(6, |_| Some(Piece::chess(Color::Red, ChessKind::Pawn)));
                board.fill_chess_back_row(7, Color::Red);
            }
            Ruleset::Checkers => {
                for row in 5..8 {
                    board.fill_checkers_row(row, Color::Red);
                }
            }
        }

        board
    }

    fn fill_row(&mut self, row: usize, piece_at: impl Fn(usize) -> Option<Piece>) {
        for col in 0..8 {
            self.squares[row][col] = piece_at(col).map_or(Square::Empty, Square::Occupied);
        }
    }

    fn fill_chess_back_row(&mut self, row: usize, color: Color) {
        self.fill_row(row, |col| Some(Piece::chess(color, CHESS_BACK_ROW[col])));
    }

    /// Checkers pieces stand on the squares where row + col is odd.
    fn fill_checkers_row(&mut self, row: usize, color: Color) {
        self.fill_row(row, |col| {
            ((row + col) % 2 == 1).then(|| Piece::checkers(color, CheckersKind::Single))
        });
    }

    pub fn ruleset_of(&self, color: Color) -> Ruleset {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    /// Returns the piece on `field`, or `None` for empty and off-board fields.
    pub fn piece_at(&self, field: Field) -> Option<Piece> {
        if !field.on_board() {
            return None;
        }
        self.squares[field.row as usize][field.col as usize].piece()
    }

    /// True if `field` is on the board and empty.
    pub fn is_vacant(&self, field: Field) -> bool {
        field.on_board() && self.piece_at(field).is_none()
    }

    pub(crate) fn put(&mut self, field: Field, piece: Piece) {
        self.squares[field.row as usize][field.col as usize] = Square::Occupied(piece);
    }

    pub(crate) fn take(&mut self, field: Field) -> Option<Piece> {
        let square = &mut self.squares[field.row as usize][field.col as usize];
        let piece = square.piece();
        *square = Square::Empty;
        piece
    }

    /// Returns an iterator over all pieces on the board with their coordinates, in index order.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (Field, Piece)> + '_ {
        (0..64).filter_map(move |index| {
            let field = Field::from_index(index);
            self.piece_at(field).map(|piece| (field, piece))
        })
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces_with_coordinates().any(|(_, piece)| piece.color == color)
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8 {
            board_representation.push_str(&format!("{} │", 8 - row));
            for col in 0..8 {
                let c = match self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", c));
            }
            board_representation.push_str(&format!(" {}\n", 8 - row));

            if row < 7 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::PieceKind;
    use super::*;

    fn count(board: &Board, color: Color, kind: PieceKind) -> usize {
        board
            .pieces_with_coordinates()
            .filter(|(_, p)| p.color == color && p.kind == kind)
            .count()
    }

    #[test]
    fn test_chess_starting_position() {
        let board = make_board(Ruleset::Chess, Ruleset::Chess);
        assert_eq!(board.piece_at(Field::new(7, 4)), Some(Piece::chess(Color::Red, ChessKind::King)));
        assert_eq!(board.piece_at(Field::new(7, 3)), Some(Piece::chess(Color::Red, ChessKind::Queen)));
        assert_eq!(board.piece_at(Field::new(0, 4)), Some(Piece::chess(Color::Black, ChessKind::King)));
        assert_eq!(board.piece_at(Field::new(0, 3)), Some(Piece::chess(Color::Black, ChessKind::Queen)));
        assert_eq!(count(&board, Color::Red, PieceKind::Chess(ChessKind::Pawn)), 8);
        assert_eq!(count(&board, Color::Black, PieceKind::Chess(ChessKind::Pawn)), 8);
        assert_eq!(board.pieces_with_coordinates().count(), 32);
        assert_eq!(board.state, GameState::default());
    }

    #[test]
    fn test_checkers_starting_position() {
        let board = make_board(Ruleset::Checkers, Ruleset::Checkers);
        let single = PieceKind::Checkers(CheckersKind::Single);
        assert_eq!(count(&board, Color::Red, single), 12);
        assert_eq!(count(&board, Color::Black, single), 12);
        assert_eq!(board.piece_at(Field::new(0, 1)).map(|p| p.color), Some(Color::Black));
        assert_eq!(board.piece_at(Field::new(0, 0)), None);
        assert_eq!(board.piece_at(Field::new(1, 0)).map(|p| p.color), Some(Color::Black));
        assert_eq!(board.piece_at(Field::new(5, 0)).map(|p| p.color), Some(Color::Red));
        assert_eq!(board.piece_at(Field::new(7, 0)).map(|p| p.color), Some(Color::Red));
        assert_eq!(board.piece_at(Field::new(6, 0)), None);
        for row in 3..5 {
            for col in 0..8 {
                assert!(board.is_vacant(Field::new(row, col)));
            }
        }
    }

    #[test]
    fn test_mixed_starting_position() {
        let board = make_board(Ruleset::Chess, Ruleset::Checkers);
        assert_eq!(board.ruleset_of(Color::Red), Ruleset::Chess);
        assert_eq!(board.ruleset_of(Color::Black), Ruleset::Checkers);
        assert_eq!(count(&board, Color::Red, PieceKind::Chess(ChessKind::Pawn)), 8);
        assert_eq!(count(&board, Color::Black, PieceKind::Checkers(CheckersKind::Single)), 12);
    }

    #[test]
    fn test_piece_at_off_board() {
        let board = make_board(Ruleset::Chess, Ruleset::Chess);
        assert_eq!(board.piece_at(Field::new(-1, 0)), None);
        assert_eq!(board.piece_at(Field::new(0, 8)), None);
        assert!(!board.is_vacant(Field::new(8, 8)));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = make_board(Ruleset::Checkers, Ruleset::Chess);
        let mut copy = board.clone();
        copy.take(Field::new(7, 0));
        assert!(board.piece_at(Field::new(7, 0)).is_some());
        assert!(copy.piece_at(Field::new(7, 0)).is_none());
    }

    #[test]
    fn test_render_to_string() {
        let board = make_board(Ruleset::Chess, Ruleset::Checkers);
        let rendered = board.render_to_string();
        assert!(rendered.starts_with("    a   b"));
        assert!(rendered.contains("1 │ R │ N │ B │ Q │ K │ B │ N │ R │ 1"));
        assert!(rendered.contains("8 │   │ c │   │ c │   │ c │   │ c │ 8"));
    }
}
