use super::move_validation::legal_destinations;
use super::{ChessBoard, Move, Side};

/// Every move `side` may make on `board`.
pub fn legal_moves(board: &ChessBoard, side: Side) -> Vec<Move> {
    board
        .pieces_with_coordinates()
        .filter(|(_, piece)| piece.side == side)
        .flat_map(|(from, _)| {
            legal_destinations(board, side, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Counts the move sequences of length `depth` starting with `side` to move.
pub fn perft(board: &ChessBoard, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1u64;
    }

    let mut node_count = 0u64;
    for mv in legal_moves(board, side) {
        let mut new_board = board.clone();
        new_board.relocate(mv.from, mv.to);
        node_count += perft(&new_board, side.opposite(), depth - 1);
    }
    node_count
}

/// Per first move counts, sorted by move text. Empty at depth 0, where the
/// only sequence is the empty one.
pub fn perft_divide(board: &ChessBoard, side: Side, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut result_moves: Vec<(Move, u64)> = legal_moves(board, side)
        .into_iter()
        .map(|mv| {
            let mut new_board = board.clone();
            new_board.relocate(mv.from, mv.to);
            (mv, perft(&new_board, side.opposite(), depth - 1))
        })
        .collect();
    result_moves.sort_by_key(|(mv, _)| mv.as_algebraic());
    result_moves
}

/// Divide plus the total node count, which agrees with `perft` at every depth.
pub fn perft_divide_with_total(board: &ChessBoard, side: Side, depth: u8) -> (Vec<(Move, u64)>, u64) {
    let result_moves = perft_divide(board, side, depth);
    let total = if depth == 0 {
        1
    } else {
        result_moves.iter().map(|(_, count)| count).sum()
    };
    (result_moves, total)
}
