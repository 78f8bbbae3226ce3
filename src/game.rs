//! A running game: the board, whose turn it is, and the single mutation
//! path for accepted moves.

use log::debug;

use crate::chess_board::{validate_move, ChessBoard, ChessField, Piece, Side};
use crate::error::{ChessResult, MoveRejection};

/// Side to move plus the number of accepted moves so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    side: Side,
    moves_played: u32,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn {
    pub fn new() -> Self {
        Self::starting_with(Side::White)
    }

    pub fn starting_with(side: Side) -> Self {
        Self { side, moves_played: 0 }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Hands the move to the other side. Call once per accepted move.
    pub fn advance(&mut self) {
        self.side = self.side.opposite();
        self.moves_played += 1;
    }
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub from: ChessField,
    pub to: ChessField,
    pub captured: Option<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: ChessBoard,
    turn: Turn,
    start: (ChessBoard, Side),
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard setup, white to move.
    pub fn new() -> Self {
        Self::from_position(ChessBoard::starting_position(), Side::White)
    }

    /// Starts from an arbitrary board. `restart` returns to this position.
    pub fn from_position(board: ChessBoard, side_to_move: Side) -> Self {
        Self {
            board: board.clone(),
            turn: Turn::starting_with(side_to_move),
            start: (board, side_to_move),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let (board, side) = ChessBoard::from_fen(fen)?;
        Ok(Self::from_position(board, side))
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn side_to_move(&self) -> Side {
        self.turn.side()
    }

    /// Legality only, the game is left untouched.
    pub fn check_move(&self, from: ChessField, to: ChessField) -> Result<(), MoveRejection> {
        validate_move(&self.board, self.turn.side(), from, to)
    }

    /// Plays the move if it is legal. A rejected move changes nothing.
    pub fn apply_move(&mut self, from: ChessField, to: ChessField) -> Result<MoveOutcome, MoveRejection> {
        if let Err(rejection) = self.check_move(from, to) {
            debug!("{} rejected {}{}: {}", self.turn.side(), from, to, rejection);
            return Err(rejection);
        }

        let piece = self.board.piece_at(from).ok_or(MoveRejection::EmptySource)?;
        let captured = self.board.relocate(from, to);
        self.turn.advance();

        match captured {
            Some(victim) => debug!("{} {}{} captures {}", piece, from, to, victim),
            None => debug!("{} {}{}", piece, from, to),
        }

        Ok(MoveOutcome {
            piece,
            from,
            to,
            captured,
        })
    }

    /// Throws the current game away and sets up the starting position again.
    pub fn restart(&mut self) {
        let (board, side) = self.start.clone();
        *self = Self::from_position(board, side);
        debug!("game restarted, {} to move", side);
    }

    pub fn status_text(&self) -> String {
        format!("{}'s Turn", self.turn.side())
    }
}
