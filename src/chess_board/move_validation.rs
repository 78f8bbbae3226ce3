use super::path::path_is_clear;
use super::{ChessBoard, ChessField, Piece, PieceKind, Side};
use crate::error::MoveRejection;

const KNIGHT_MOVES: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];

/// Decides whether the side `to_move` may move the piece on `from` to `to`.
///
/// Only the movement pattern of each piece is checked; check, castling,
/// en passant and promotion are not part of these rules.
pub fn validate_move(board: &ChessBoard, to_move: Side, from: ChessField, to: ChessField) -> Result<(), MoveRejection> {
    if from == to {
        return Err(MoveRejection::NullMove);
    }

    let piece = board.piece_at(from).ok_or(MoveRejection::EmptySource)?;

    if piece.side != to_move {
        return Err(MoveRejection::NotYourTurn { to_move });
    }

    let target = board.piece_at(to);
    if matches!(target, Some(t) if t.side == piece.side) {
        return Err(MoveRejection::OwnPieceAtDestination);
    }

    if follows_pattern(board, piece, from, to) {
        Ok(())
    } else {
        Err(MoveRejection::IllegalPattern { kind: piece.kind })
    }
}

pub fn is_legal_move(board: &ChessBoard, to_move: Side, from: ChessField, to: ChessField) -> bool {
    validate_move(board, to_move, from, to).is_ok()
}

/// All squares the piece on `from` may move to.
pub fn legal_destinations(board: &ChessBoard, to_move: Side, from: ChessField) -> Vec<ChessField> {
    ChessField::all()
        .filter(|&to| is_legal_move(board, to_move, from, to))
        .collect()
}

fn follows_pattern(board: &ChessBoard, piece: Piece, from: ChessField, to: ChessField) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    let straight = (d_row == 0) != (d_col == 0);
    let diagonal = d_row.abs() == d_col.abs();

    match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, piece.side, from, to, d_row, d_col),
        PieceKind::Rook => straight && path_is_clear(board, from, to),
        PieceKind::Bishop => diagonal && path_is_clear(board, from, to),
        PieceKind::Queen => (straight || diagonal) && path_is_clear(board, from, to),
        PieceKind::Knight => KNIGHT_MOVES.contains(&(d_row, d_col)),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
    }
}

fn pawn_pattern(board: &ChessBoard, side: Side, from: ChessField, to: ChessField, d_row: i8, d_col: i8) -> bool {
    let forward = side.forward();
    let destination_empty = board.is_empty(to);

    // Single step
    if d_row == forward && d_col == 0 {
        return destination_empty;
    }

    // Double step from the home row, both squares must be free
    if d_row == 2 * forward && d_col == 0 {
        let step_free = from.offset(forward, 0).is_some_and(|step| board.is_empty(step));
        return from.row() == side.pawn_home_row() && step_free && destination_empty;
    }

    // Diagonal capture, own pieces were already excluded
    if d_row == forward && d_col.abs() == 1 {
        return !destination_empty;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::test_utils::assert_destinations;

    fn field(algebraic: &str) -> ChessField {
        ChessField::from_algebraic(algebraic).unwrap()
    }

    fn rc(row: u8, col: u8) -> ChessField {
        ChessField::new(row, col).unwrap()
    }

    fn position(fen: &str) -> (ChessBoard, Side) {
        ChessBoard::from_fen(fen).unwrap()
    }

    #[test]
    fn null_move_is_rejected() {
        let board = ChessBoard::starting_position();
        assert_eq!(validate_move(&board, Side::White, rc(6, 4), rc(6, 4)), Err(MoveRejection::NullMove));
        assert_eq!(validate_move(&board, Side::White, rc(4, 4), rc(4, 4)), Err(MoveRejection::NullMove));
    }

    #[test]
    fn empty_source_is_rejected() {
        let board = ChessBoard::starting_position();
        assert_eq!(validate_move(&board, Side::White, rc(4, 4), rc(3, 4)), Err(MoveRejection::EmptySource));
    }

    #[test]
    fn pawn_two_step_opening() {
        let board = ChessBoard::starting_position();
        assert!(is_legal_move(&board, Side::White, rc(6, 4), rc(4, 4)));
        assert!(is_legal_move(&board, Side::Black, rc(1, 3), rc(3, 3)));
    }

    #[test]
    fn pawn_three_step_is_illegal() {
        let board = ChessBoard::starting_position();
        assert_eq!(
            validate_move(&board, Side::White, rc(6, 4), rc(3, 4)),
            Err(MoveRejection::IllegalPattern { kind: PieceKind::Pawn })
        );
    }

    #[test]
    fn rook_blocked_by_own_pawn() {
        let board = ChessBoard::starting_position();
        assert_eq!(
            validate_move(&board, Side::White, rc(7, 0), rc(5, 0)),
            Err(MoveRejection::IllegalPattern { kind: PieceKind::Rook })
        );
    }

    #[test]
    fn wrong_side_is_turn_violation() {
        let board = ChessBoard::starting_position();
        let result = validate_move(&board, Side::White, rc(1, 3), rc(3, 3));
        assert_eq!(result, Err(MoveRejection::NotYourTurn { to_move: Side::White }));
        assert!(result.unwrap_err().is_turn_violation());
    }

    #[test]
    fn king_cannot_take_own_pawn() {
        let board = ChessBoard::starting_position();
        assert_eq!(
            validate_move(&board, Side::White, rc(7, 4), rc(6, 4)),
            Err(MoveRejection::OwnPieceAtDestination)
        );
    }

    #[test]
    fn pawn_diagonal_needs_a_target() {
        let (board, _) = position("8/8/8/3p4/4P3/8/8/8 w");
        assert!(is_legal_move(&board, Side::White, field("e4"), field("d5")));
        assert!(!is_legal_move(&board, Side::White, field("e4"), field("f5")));
        assert!(is_legal_move(&board, Side::Black, field("d5"), field("e4")));
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let (board, _) = position("8/8/8/4p3/4P3/8/8/8 w");
        assert!(!is_legal_move(&board, Side::White, field("e4"), field("e5")));
        assert!(!is_legal_move(&board, Side::Black, field("e5"), field("e4")));
    }

    #[test]
    fn pawn_double_step_needs_free_path() {
        let (board, _) = position("8/8/8/8/8/4n3/4P3/8 w");
        assert!(!is_legal_move(&board, Side::White, field("e2"), field("e4")));
        let (board, _) = position("8/8/8/8/4n3/8/4P3/8 w");
        assert!(!is_legal_move(&board, Side::White, field("e2"), field("e4")));
        assert!(is_legal_move(&board, Side::White, field("e2"), field("e3")));
    }

    #[test]
    fn pawn_double_step_only_from_home_row() {
        let (board, _) = position("8/8/8/8/8/4P3/8/8 w");
        assert!(!is_legal_move(&board, Side::White, field("e3"), field("e5")));
        let (board, _) = position("8/8/4p3/8/8/8/8/8 b");
        assert!(!is_legal_move(&board, Side::Black, field("e6"), field("e4")));
    }

    #[test]
    fn pawns_do_not_move_backwards() {
        let (board, _) = position("8/8/8/3p4/4P3/8/8/8 w");
        assert!(!is_legal_move(&board, Side::White, field("e4"), field("e3")));
        assert!(!is_legal_move(&board, Side::Black, field("d5"), field("d6")));
    }

    #[test]
    fn pawn_destinations_from_start() {
        let board = ChessBoard::starting_position();
        assert_destinations(legal_destinations(&board, Side::White, field("e2")), vec!["e3", "e4"]);
        assert_destinations(legal_destinations(&board, Side::Black, field("c7")), vec!["c6", "c5"]);
    }

    #[test]
    fn knight_destinations_from_start() {
        let board = ChessBoard::starting_position();
        assert_destinations(legal_destinations(&board, Side::White, field("b1")), vec!["a3", "c3"]);
        assert_destinations(legal_destinations(&board, Side::Black, field("g8")), vec!["f6", "h6"]);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let (board, _) = position("8/8/8/2ppp3/2pNp3/2ppp3/8/8 w");
        assert_destinations(
            legal_destinations(&board, Side::White, field("d4")),
            vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"],
        );
    }

    #[test]
    fn blocked_pieces_have_no_destinations() {
        let board = ChessBoard::starting_position();
        for square in ["a1", "c1", "d1", "e1", "f1", "h1"] {
            assert_destinations(legal_destinations(&board, Side::White, field(square)), vec![]);
        }
    }

    #[test]
    fn rook_moves() {
        let (board, _) = position("8/8/8/8/3R2p1/8/8/8 w");
        assert_destinations(
            legal_destinations(&board, Side::White, field("d4")),
            vec!["d1", "d2", "d3", "d5", "d6", "d7", "d8", "a4", "b4", "c4", "e4", "f4", "g4"],
        );
    }

    #[test]
    fn bishop_moves() {
        let (board, _) = position("8/8/8/8/3B4/8/1P6/8 w");
        assert_destinations(
            legal_destinations(&board, Side::White, field("d4")),
            vec!["c3", "e3", "f2", "g1", "c5", "b6", "a7", "e5", "f6", "g7", "h8"],
        );
    }

    #[test]
    fn queen_moves() {
        let (board, _) = position("8/8/8/8/8/2p5/1Q6/8 w");
        assert_destinations(
            legal_destinations(&board, Side::White, field("b2")),
            vec![
                "a1", "b1", "c1", "a2", "c2", "d2", "e2", "f2", "g2", "h2", "a3", "c3", "b3", "b4", "b5", "b6",
                "b7", "b8",
            ],
        );
    }

    #[test]
    fn queen_rejects_knight_shape() {
        let (board, _) = position("8/8/8/8/3Q4/8/8/8 w");
        assert_eq!(
            validate_move(&board, Side::White, field("d4"), field("e6")),
            Err(MoveRejection::IllegalPattern { kind: PieceKind::Queen })
        );
    }

    #[test]
    fn king_moves() {
        let (board, _) = position("8/8/8/8/8/8/3P4/3K4 w");
        assert_destinations(legal_destinations(&board, Side::White, field("d1")), vec!["c1", "e1", "c2", "e2"]);
        assert!(!is_legal_move(&board, Side::White, field("d1"), field("f1")));
    }

    #[test]
    fn capture_scenario_after_two_openings() {
        let (board, _) = position("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w");
        assert!(is_legal_move(&board, Side::White, rc(4, 4), rc(3, 3)));
    }
}
