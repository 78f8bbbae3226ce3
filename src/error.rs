//! Error types for the board and the rules engine.
//!
//! `ChessError` covers malformed input (coordinates, symbols, placement
//! strings). `MoveRejection` is the reason code returned when a move is
//! refused; it is an expected outcome, not a fault.

use thiserror::Error;

use crate::chess_board::{PieceKind, Side};

/// Malformed input handed to the board or the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square outside the 8x8 board
    #[error("square ({row}, {col}) is outside the board (must be 0-7)")]
    OutOfBounds { row: u8, col: u8 },

    /// Tile index outside the 64 tiles
    #[error("tile index {0} is outside the board (must be 0-63)")]
    InvalidIndex(usize),

    /// Character that is not one of the piece symbols
    #[error("unknown piece symbol: {0:?}")]
    InvalidSymbol(char),

    /// Coordinate text that is not "a1".."h8"
    #[error("invalid square: {0}")]
    InvalidAlgebraic(String),

    /// Move text that is not two coordinates, e.g. "e2e4"
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// Placement string that cannot be read
    #[error("invalid position: {0}")]
    InvalidFen(String),
}

/// Result type alias for board operations
pub type ChessResult<T> = Result<T, ChessError>;

/// Why a move attempt was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Source and destination are the same square
    #[error("piece must leave its square")]
    NullMove,

    /// Nothing stands on the source square
    #[error("no piece to move")]
    EmptySource,

    /// The piece belongs to the side that is not on move
    #[error("it's {to_move}'s turn")]
    NotYourTurn { to_move: Side },

    /// The destination holds a piece of the mover's own side
    #[error("cannot capture own piece")]
    OwnPieceAtDestination,

    /// The piece cannot move like that, or its path is blocked
    #[error("illegal {kind} move")]
    IllegalPattern { kind: PieceKind },
}

impl MoveRejection {
    pub fn is_turn_violation(&self) -> bool {
        matches!(self, MoveRejection::NotYourTurn { .. })
    }
}
