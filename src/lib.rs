//! Two-player chess board with a move-legality engine.
//!
//! The engine answers whether a piece may move from one square to another
//! following its movement pattern, the side to move and the no-self-capture
//! rule. Check, castling, en passant and promotion are not modelled.

pub mod chess_board;
pub mod error;
pub mod game;
pub mod ui;

pub use chess_board::{ChessBoard, ChessField, Move, Piece, PieceKind, Side};
pub use error::{ChessError, ChessResult, MoveRejection};
pub use game::{Game, MoveOutcome, Turn};

#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn play_with_ui() {
    if let Err(e) = ui::setup_ui(Game::new()) {
        log::error!("board window failed: {}", e);
    }
}
