use super::{ChessBoard, ChessField, Piece, Side};
use crate::error::{ChessError, ChessResult};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Parses a FEN style position. Only the piece placement and the side to
/// move are read; later fields are ignored.
pub fn from_fen(fen: &str) -> ChessResult<(ChessBoard, Side)> {
    let mut board = ChessBoard::new();
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let Some(placement) = parts.first() else {
        return Err(ChessError::InvalidFen(String::from("empty position")));
    };

    // Parse board squares, first rank string is row 0
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidFen(format!("expected 8 rows, found {}", rows.len())));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0usize;

        for c in row.chars() {
            if col_index > 7 {
                return Err(ChessError::InvalidFen(format!("too many squares in row {}", row_index)));
            }
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(ChessError::InvalidFen(format!("invalid empty run {} in row {}", c, row_index)));
                }
                col_index += skip as usize;
            } else {
                let piece = Piece::from_char(c)
                    .map_err(|_| ChessError::InvalidFen(format!("invalid piece character: {}", c)))?;
                board.set(ChessField::new(row_index as u8, col_index as u8)?, Some(piece));
                col_index += 1;
            }
        }
        if col_index != 8 {
            return Err(ChessError::InvalidFen(format!(
                "row {} covers {} squares instead of 8",
                row_index, col_index
            )));
        }
    }

    // Parse side to move
    let side = match parts.get(1) {
        None | Some(&"w") => Side::White,
        Some(&"b") => Side::Black,
        Some(other) => return Err(ChessError::InvalidFen(format!("invalid side to move: {}", other))),
    };

    Ok((board, side))
}

pub fn to_fen(board: &ChessBoard, side_to_move: Side) -> String {
    let mut board_representation = String::new();

    for row in 0..8 {
        let mut empty_count = 0;

        for col in 0..8 {
            match board.squares[row][col] {
                Some(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row < 7 {
            board_representation.push('/');
        }
    }

    let side = match side_to_move {
        Side::White => "w",
        Side::Black => "b",
    };
    format!("{} {}", board_representation, side)
}
