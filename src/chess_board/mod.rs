pub mod fen;
pub mod model;
pub use model::{ChessField, Move, Piece, PieceKind, Side};

mod chess_board;
pub mod move_validation;
pub mod path;
pub mod perft;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::{ChessBoard, INITIAL_LAYOUT};
pub use move_validation::{is_legal_move, legal_destinations, validate_move};
pub use path::path_is_clear;
pub use perft::{legal_moves, perft, perft_divide, perft_divide_with_total};
