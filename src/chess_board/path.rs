use super::{ChessBoard, ChessField};

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a rank, file or diagonal; the direction is not
/// validated here.
pub fn path_is_clear(board: &ChessBoard, from: ChessField, to: ChessField) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(d_row, d_col) {
            Some(next) => next,
            None => return true,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(algebraic: &str) -> ChessField {
        ChessField::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn adjacent_squares_are_clear() {
        let board = ChessBoard::starting_position();
        assert!(path_is_clear(&board, field("a1"), field("a2")));
        assert!(path_is_clear(&board, field("e1"), field("f2")));
    }

    #[test]
    fn own_pawn_blocks_rook() {
        let board = ChessBoard::starting_position();
        assert!(!path_is_clear(&board, field("a1"), field("a3")));
        assert!(!path_is_clear(&board, field("c1"), field("e3")));
    }

    #[test]
    fn endpoints_are_not_inspected() {
        let board = ChessBoard::starting_position();
        // both endpoints occupied, nothing between
        assert!(path_is_clear(&board, field("a1"), field("b1")));
        // a7 is occupied but it is the destination
        assert!(path_is_clear(&board, field("a3"), field("a7")));
    }

    #[test]
    fn open_lines_in_every_direction() {
        let (board, _) = ChessBoard::from_fen("8/8/8/3Q4/8/8/8/8 w").unwrap();
        let queen = field("d5");
        for target in ["d8", "d1", "a5", "h5", "a8", "h1", "g8", "a2"] {
            assert!(path_is_clear(&board, queen, field(target)), "{}", target);
        }
    }

    #[test]
    fn blocker_in_the_middle() {
        let (board, _) = ChessBoard::from_fen("8/8/8/3Q1p2/8/8/8/8 w").unwrap();
        assert!(!path_is_clear(&board, field("d5"), field("h5")));
        assert!(path_is_clear(&board, field("d5"), field("f5")));
    }
}
