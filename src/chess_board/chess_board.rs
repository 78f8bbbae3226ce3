use lazy_static::lazy_static;

use super::{fen, ChessField, Piece, Side};
use crate::error::ChessResult;

/// Glyph layout of a new game, row 0 first.
pub const INITIAL_LAYOUT: [&str; 8] = [
    "♜♞♝♛♚♝♞♜",
    "♟♟♟♟♟♟♟♟",
    "",
    "",
    "",
    "",
    "♙♙♙♙♙♙♙♙",
    "♖♘♗♕♔♗♘♖",
];

lazy_static! {
    static ref STARTING_BOARD: ChessBoard = ChessBoard::from_layout(&INITIAL_LAYOUT)
        .unwrap_or_else(|e| unreachable!("initial layout is well formed: {}", e));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard 32 piece setup.
    pub fn starting_position() -> Self {
        STARTING_BOARD.clone()
    }

    /// Builds a board from rows of piece glyphs. Missing trailing squares are empty.
    pub fn from_layout(rows: &[&str; 8]) -> ChessResult<Self> {
        let mut board = ChessBoard::new();
        for (row, symbols) in rows.iter().enumerate() {
            for (col, symbol) in symbols.chars().enumerate() {
                let field = ChessField::new(row as u8, col as u8)?;
                board.set(field, Some(Piece::from_symbol(symbol)?));
            }
        }
        Ok(board)
    }

    /// Delegates placement parsing to the `fen` module.
    pub fn from_fen(text: &str) -> ChessResult<(Self, Side)> {
        fen::from_fen(text)
    }

    pub fn to_fen(&self, side_to_move: Side) -> String {
        fen::to_fen(self, side_to_move)
    }

    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        self.squares[field.row() as usize][field.col() as usize]
    }

    pub fn is_empty(&self, field: ChessField) -> bool {
        self.piece_at(field).is_none()
    }

    pub fn set(&mut self, field: ChessField, piece: Option<Piece>) {
        self.squares[field.row() as usize][field.col() as usize] = piece;
    }

    /// Removes and returns whatever stands on `field`.
    pub fn take(&mut self, field: ChessField) -> Option<Piece> {
        self.squares[field.row() as usize][field.col() as usize].take()
    }

    /// Moves the piece on `from` to `to` and returns the discarded occupant of `to`.
    /// Does not check legality.
    pub fn relocate(&mut self, from: ChessField, to: ChessField) -> Option<Piece> {
        let piece = self.take(from);
        let captured = self.take(to);
        self.set(to, piece);
        captured
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ChessField::all().filter_map(move |field| self.piece_at(field).map(|piece| (field, piece)))
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.pieces_with_coordinates().filter(|(_, p)| p.side == side).count()
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  +---+---+---+---+---+---+---+---+\n");
        for row in 0..8 {
            board_representation.push_str(&format!("{} |", 8 - row));
            for col in 0..8 {
                let symbol = match self.squares[row][col] {
                    Some(piece) => piece.to_char(),
                    None => ' ',
                };
                board_representation.push_str(&format!(" {} |", symbol));
            }
            board_representation.push_str(&format!(" {}\n", 8 - row));
            board_representation.push_str("  +---+---+---+---+---+---+---+---+\n");
        }
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation
    }
}
