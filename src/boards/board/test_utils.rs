use super::{Board, CheckersKind, ChessKind, Color, Field, Move, Piece, Ruleset};

/// Builds a board from eight row strings, rank 8 first.
///
/// `.` is an empty square, `c`/`d` are checkers singles and doubles,
/// `p e n b r q k` are chess pieces with `e` a pessantable pawn. Lowercase is
/// black, uppercase is red.
pub fn board_from_diagram(red: Ruleset, black: Ruleset, turn: Color, rows: [&str; 8]) -> Board {
    let mut board = Board::empty(red, black);
    board.state.turn = turn;

    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), 8, "row {} must have 8 squares: {:?}", row, line);
        for (col, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Black };
            let piece = match c.to_ascii_lowercase() {
                'c' => Piece::checkers(color, CheckersKind::Single),
                'd' => Piece::checkers(color, CheckersKind::Double),
                'p' => Piece::chess(color, ChessKind::Pawn),
                'e' => Piece::chess(color, ChessKind::Pessantable),
                'n' => Piece::chess(color, ChessKind::Knight),
                'b' => Piece::chess(color, ChessKind::Bishop),
                'r' => Piece::chess(color, ChessKind::Rook),
                'q' => Piece::chess(color, ChessKind::Queen),
                'k' => Piece::chess(color, ChessKind::King),
                _ => panic!("unknown piece character {:?}", c),
            };
            board.put(Field::new(row as i8, col as i8), piece);
        }
    }

    board
}

pub fn assert_moves<I: IntoIterator<Item = Move>>(generated: I, expected: Vec<&str>) {
    let mut generated: Vec<String> = generated.into_iter().map(|m| m.as_algebraic()).collect();
    generated.sort();
    let mut expected: Vec<String> = expected.into_iter().map(String::from).collect();
    expected.sort();
    assert_eq!(generated, expected);
}

/// Looks up a playable move by its algebraic notation.
pub fn find_move(board: &Board, notation: &str) -> Move {
    board
        .playable_moves()
        .into_iter()
        .find(|m| m.as_algebraic() == notation)
        .unwrap_or_else(|| panic!("{} is not playable on\n{}", notation, board.render_to_string()))
}
