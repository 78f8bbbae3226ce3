use std::fmt;

use crate::error::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn step for this side.
    pub fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row from which this side's pawns may advance two squares.
    pub fn pawn_home_row(&self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Rooks, bishops and queens need an unobstructed line.
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// Classifies one of the twelve chess glyphs.
    pub fn from_symbol(symbol: char) -> ChessResult<Self> {
        let (side, kind) = match symbol {
            '♔' => (Side::White, PieceKind::King),
            '♕' => (Side::White, PieceKind::Queen),
            '♖' => (Side::White, PieceKind::Rook),
            '♗' => (Side::White, PieceKind::Bishop),
            '♘' => (Side::White, PieceKind::Knight),
            '♙' => (Side::White, PieceKind::Pawn),
            '♚' => (Side::Black, PieceKind::King),
            '♛' => (Side::Black, PieceKind::Queen),
            '♜' => (Side::Black, PieceKind::Rook),
            '♝' => (Side::Black, PieceKind::Bishop),
            '♞' => (Side::Black, PieceKind::Knight),
            '♟' => (Side::Black, PieceKind::Pawn),
            _ => return Err(ChessError::InvalidSymbol(symbol)),
        };
        Ok(Self { side, kind })
    }

    pub fn symbol(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// FEN letter, upper case for white.
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    pub fn from_char(c: char) -> ChessResult<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(ChessError::InvalidSymbol(c)),
        };
        let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
        Ok(Self { side, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board coordinate. Row 0 is black's back rank, row 7 white's.
///
/// Fields are private so every value is inside the board.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    row: u8,
    col: u8,
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> ChessResult<Self> {
        if row > 7 || col > 7 {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Index into a row-major 64 tile list, as used by the board view.
    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(index: usize) -> ChessResult<Self> {
        if index >= 64 {
            return Err(ChessError::InvalidIndex(index));
        }
        Ok(Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        })
    }

    /// Parses coordinate text like "e2".
    pub fn from_algebraic(algebraic: &str) -> ChessResult<Self> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Self {
                row: b'8' - rank as u8,
                col: file as u8 - b'a',
            }),
            _ => Err(ChessError::InvalidAlgebraic(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }

    /// Adds a delta, returning `None` when it leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = ChessField> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| ChessField { row, col }))
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    pub fn from_algebraic(algebraic: &str) -> ChessResult<Self> {
        if algebraic.len() != 4 || !algebraic.is_ascii() {
            return Err(ChessError::InvalidMove(algebraic.to_string()));
        }
        let from = ChessField::from_algebraic(&algebraic[0..2])?;
        let to = ChessField::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = 8 - row; // row 0 is rank 8
    format!("{}{}", file, rank)
}
