use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// The rule system a side plays by. Each color is assigned one independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruleset {
    Chess,
    Checkers,
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum CheckersKind {
    Single,
    Double,
}

/// `Pessantable` is a pawn that advanced two rows on the previous move and may be
/// taken en passant during the opponent's next move only.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum ChessKind {
    Pawn,
    Pessantable,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Checkers(CheckersKind),
    Chess(ChessKind),
}

impl PieceKind {
    pub fn ruleset(&self) -> Ruleset {
        match self {
            PieceKind::Checkers(_) => Ruleset::Checkers,
            PieceKind::Chess(_) => Ruleset::Chess,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }
}

/// A board coordinate. Row 0 is black's home row, row 7 is red's.
///
/// Fields are also used as offsets, so both axes are signed and a field may lie
/// off the board; check [`Field::on_board`] before indexing.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Field {
    pub row: i8,
    pub col: i8,
}

/// A single step of play. A checkers capture chain is a sequence of these, one
/// jump each, threaded through [`GameState::multi_capturing`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: Field,
    pub to: Field,
    pub captured: Option<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub turn: Color,
    /// Square of the checkers piece that must keep capturing before the turn passes.
    pub multi_capturing: Option<Field>,
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: Color::Red,
            multi_capturing: None,
            winner: None,
        }
    }
}

impl Piece {
    pub fn chess(color: Color, kind: ChessKind) -> Self {
        Self {
            color,
            kind: PieceKind::Chess(kind),
        }
    }

    pub fn checkers(color: Color, kind: CheckersKind) -> Self {
        Self {
            color,
            kind: PieceKind::Checkers(kind),
        }
    }

    pub fn ruleset(&self) -> Ruleset {
        self.kind.ruleset()
    }

    pub fn with_kind(self, kind: PieceKind) -> Self {
        Self { kind, ..self }
    }

    /// Red pieces render upper case, black lower case.
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Checkers(CheckersKind::Single) => 'c',
            PieceKind::Checkers(CheckersKind::Double) => 'd',
            PieceKind::Chess(ChessKind::Pawn) => 'p',
            PieceKind::Chess(ChessKind::Pessantable) => 'e',
            PieceKind::Chess(ChessKind::Knight) => 'n',
            PieceKind::Chess(ChessKind::Bishop) => 'b',
            PieceKind::Chess(ChessKind::Rook) => 'r',
            PieceKind::Chess(ChessKind::Queen) => 'q',
            PieceKind::Chess(ChessKind::King) => 'k',
        };
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl Field {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Maps a linear index in `0..64` to its field, row-major.
    pub fn from_index(index: usize) -> Self {
        Self::new((index / 8) as i8, (index % 8) as i8)
    }

    /// Linear index of an on-board field.
    pub fn index(&self) -> usize {
        debug_assert!(self.on_board());
        self.row as usize * 8 + self.col as usize
    }

    pub fn on_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn scale(&self, scalar: i8) -> Self {
        Self::new(self.row * scalar, self.col * scalar)
    }

    /// Mirrors the field across the horizontal midline.
    pub fn reversed(&self) -> Self {
        Self::new(7 - self.row, self.col)
    }

    /// Parses a square like "e2". Files run a..h left to right, rank 1 is row 7.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, ParseError> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = (file as u8 - b'a') as i8;
                let row = 7 - (rank as u8 - b'1') as i8;
                Ok(Self::new(row, col))
            }
            _ => Err(ParseError::InvalidSquare(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        format!("{}{}", file, rank)
    }
}

impl Add for Field {
    type Output = Field;

    fn add(self, other: Field) -> Field {
        Field::new(self.row + other.row, self.col + other.col)
    }
}

impl Move {
    pub fn new(from: Field, to: Field) -> Self {
        Self { from, to, captured: None }
    }

    pub fn capturing(from: Field, to: Field, captured: Field) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn as_algebraic(&self) -> String {
        let separator = if self.is_capture() { "x" } else { "" };
        format!("{}{}{}", self.from.as_algebraic(), separator, self.to.as_algebraic())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "white" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            _ => Err(ParseError::UnknownColor(s.to_string())),
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ruleset::Chess => write!(f, "chess"),
            Ruleset::Checkers => write!(f, "checkers"),
        }
    }
}

impl FromStr for Ruleset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chess" => Ok(Ruleset::Chess),
            "checkers" | "draughts" => Ok(Ruleset::Checkers),
            _ => Err(ParseError::UnknownRuleset(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.on_board() {
            write!(f, "{}", self.as_algebraic())
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}
