use super::{Board, ChessKind, Color, Field, Move, Piece, PieceKind};

// All offsets are expressed in the canonical orientation where the mover's home
// row is 0 and pawns advance toward row 7.
const PAWN_START_ROW: i8 = 1;
const FORWARD: Field = Field::new(1, 0);

const KNIGHT_MOVES: [Field; 8] = [
    Field::new(-2, -1),
    Field::new(-1, -2),
    Field::new(1, -2),
    Field::new(2, -1),
    Field::new(2, 1),
    Field::new(1, 2),
    Field::new(-1, 2),
    Field::new(-2, 1),
];
const KING_MOVES: [Field; 8] = [
    Field::new(-1, -1),
    Field::new(-1, 0),
    Field::new(-1, 1),
    Field::new(0, -1),
    Field::new(0, 1),
    Field::new(1, -1),
    Field::new(1, 0),
    Field::new(1, 1),
];
const BISHOP_DIRECTIONS: [Field; 4] = [Field::new(-1, -1), Field::new(-1, 1), Field::new(1, -1), Field::new(1, 1)];
const ROOK_DIRECTIONS: [Field; 4] = [Field::new(0, -1), Field::new(0, 1), Field::new(-1, 0), Field::new(1, 0)];
const QUEEN_DIRECTIONS: [Field; 8] = [
    Field::new(-1, -1),
    Field::new(-1, 1),
    Field::new(1, -1),
    Field::new(1, 1),
    Field::new(0, -1),
    Field::new(0, 1),
    Field::new(-1, 0),
    Field::new(1, 0),
];

/// A read-only view of the board from one color's side.
///
/// Black already advances toward row 7, so its view is the board itself. Red's
/// view is row-reversed: fields are mirrored on the way in and the generated
/// moves mirrored back on the way out. The stored board is never reoriented.
struct Orientation<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Orientation<'a> {
    fn new(board: &'a Board, color: Color) -> Self {
        Self { board, color }
    }

    /// Maps between board and canonical coordinates. The mapping is its own inverse.
    fn map(&self, field: Field) -> Field {
        match self.color {
            Color::Black => field,
            Color::Red => field.reversed(),
        }
    }

    fn piece_at(&self, field: Field) -> Option<Piece> {
        self.board.piece_at(self.map(field))
    }

    fn is_vacant(&self, field: Field) -> bool {
        field.on_board() && self.piece_at(field).is_none()
    }

    fn is_opponent(&self, piece: Piece) -> bool {
        piece.color != self.color
    }

    fn to_board(&self, mv: Move) -> Move {
        Move {
            from: self.map(mv.from),
            to: self.map(mv.to),
            captured: mv.captured.map(|field| self.map(field)),
        }
    }

    fn generate_pawn_moves(&self, from: Field) -> Vec<Move> {
        let mut moves = Vec::new();

        // Forward advances never capture
        let one_forward = from + FORWARD;
        if self.is_vacant(one_forward) {
            moves.push(Move::new(from, one_forward));

            let two_forward = one_forward + FORWARD;
            if from.row == PAWN_START_ROW && self.is_vacant(two_forward) {
                moves.push(Move::new(from, two_forward));
            }
        }

        // Capture diagonally, or en passant against a pawn that just passed alongside
        for dx in [-1, 1] {
            let target = from + Field::new(1, dx);
            if !target.on_board() {
                continue;
            }
            match self.piece_at(target) {
                Some(piece) => {
                    if self.is_opponent(piece) {
                        moves.push(Move::capturing(from, target, target));
                    }
                }
                None => {
                    let passed = from + Field::new(0, dx);
                    if let Some(piece) = self.piece_at(passed) {
                        if self.is_opponent(piece) && piece.kind == PieceKind::Chess(ChessKind::Pessantable) {
                            moves.push(Move::capturing(from, target, passed));
                        }
                    }
                }
            }
        }

        moves
    }

    /// Generates moves for pieces jumping to a fixed set of offsets (knight, king).
    fn generate_moves_from_offsets(&self, from: Field, offsets: &[Field]) -> Vec<Move> {
        let mut moves = Vec::new();

        for &offset in offsets {
            let to = from + offset;
            if !to.on_board() {
                continue;
            }
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if self.is_opponent(piece) {
                        moves.push(Move::capturing(from, to, to));
                    }
                }
            }
        }
        moves
    }

    /// Generates sliding piece moves (bishop, rook, queen).
    ///
    /// Each direction is walked until the edge of the board or the first
    /// occupied square, which ends the beam with a capture if it is an opponent.
    fn generate_sliding_moves(&self, from: Field, directions: &[Field]) -> Vec<Move> {
        let mut moves = Vec::new();

        for &direction in directions {
            let mut to = from + direction;
            while to.on_board() {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if self.is_opponent(piece) {
                            moves.push(Move::capturing(from, to, to));
                        }
                        break; // Block sliding
                    }
                }
                to = to + direction;
            }
        }

        moves
    }
}

impl Board {
    /// Generates the moves of a chess piece. No check or pin logic applies: a king
    /// may move onto an attacked square and be captured like any other piece.
    pub(crate) fn generate_chess_moves(&self, from: Field, piece: Piece, kind: ChessKind) -> Vec<Move> {
        let view = Orientation::new(self, piece.color);
        let origin = view.map(from);

        let moves = match kind {
            ChessKind::Pawn | ChessKind::Pessantable => view.generate_pawn_moves(origin),
            ChessKind::Knight => view.generate_moves_from_offsets(origin, &KNIGHT_MOVES),
            ChessKind::King => view.generate_moves_from_offsets(origin, &KING_MOVES),
            ChessKind::Bishop => view.generate_sliding_moves(origin, &BISHOP_DIRECTIONS),
            ChessKind::Rook => view.generate_sliding_moves(origin, &ROOK_DIRECTIONS),
            ChessKind::Queen => view.generate_sliding_moves(origin, &QUEEN_DIRECTIONS),
        };

        moves.into_iter().map(|mv| view.to_board(mv)).collect()
    }
}
