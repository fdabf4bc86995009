//! Move generation.
//!
//! Every piece kind has one generator function. [`legal_moves`] dispatches
//! through [`GENERATORS`], a table indexed by
//! [`PieceKind::index`](chessboard_core::PieceKind::index).
//!
//! Generators only ever ask the board two questions: whether a coordinate is
//! occupied, and whether two coordinates hold opposing pieces. Off-board
//! coordinates answer "occupied" to the first and "no" to the second, so no
//! generator needs its own bounds check.

use chessboard_core::{Color, Coord, Square};

use crate::{Board, SquareSet};

/// Signature shared by all generators: board, origin, and the moving color.
pub type Generator = fn(&Board, Square, Color) -> SquareSet;

/// Generator for each piece kind, indexed by
/// [`PieceKind::index`](chessboard_core::PieceKind::index).
pub const GENERATORS: [Generator; 6] = [
    pawn_moves,
    knight_moves,
    bishop_moves,
    rook_moves,
    queen_moves,
    king_moves,
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (-1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (-1, 1),
    (1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns the destinations available to the piece on `from`.
///
/// An empty square yields an empty set.
pub fn legal_moves(board: &Board, from: Square) -> SquareSet {
    match board.piece_at(from) {
        Some(piece) => GENERATORS[piece.kind().index()](board, from, piece.color()),
        None => SquareSet::EMPTY,
    }
}

/// Pawns advance one square onto an empty square, two from their starting
/// rank when both squares are empty, and capture one square diagonally
/// forward.
pub fn pawn_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let origin = from.coord();
    let step = color.pawn_direction();

    let front = origin.offset(0, step);
    if !board.is_occupied(front) {
        add(&mut moves, front);

        if from.rank() == color.pawn_rank() {
            let double = origin.offset(0, 2 * step);
            if !board.is_occupied(double) {
                add(&mut moves, double);
            }
        }
    }

    for file_delta in [-1, 1] {
        let target = origin.offset(file_delta, step);
        if board.holds_opposing_pair(origin, target) {
            add(&mut moves, target);
        }
    }

    moves
}

pub fn knight_moves(board: &Board, from: Square, _color: Color) -> SquareSet {
    jumps(board, from, &KNIGHT_DELTAS)
}

pub fn bishop_moves(board: &Board, from: Square, _color: Color) -> SquareSet {
    rays(board, from, &DIAGONALS)
}

pub fn rook_moves(board: &Board, from: Square, _color: Color) -> SquareSet {
    rays(board, from, &ORTHOGONALS)
}

pub fn queen_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    bishop_moves(board, from, color) | rook_moves(board, from, color)
}

pub fn king_moves(board: &Board, from: Square, _color: Color) -> SquareSet {
    jumps(board, from, &KING_DELTAS)
}

/// Single-step moves to fixed offsets: legal when the target is empty or
/// holds an opposing piece.
fn jumps(board: &Board, from: Square, deltas: &[(i8, i8)]) -> SquareSet {
    let origin = from.coord();
    let mut moves = SquareSet::EMPTY;
    for &(file_delta, rank_delta) in deltas {
        let target = origin.offset(file_delta, rank_delta);
        if !board.is_occupied(target) || board.holds_opposing_pair(target, origin) {
            add(&mut moves, target);
        }
    }
    moves
}

/// Ray walk: each direction adds empty squares until the first occupied
/// coordinate, which is added only if it holds an opposing piece.
fn rays(board: &Board, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let origin = from.coord();
    let mut moves = SquareSet::EMPTY;
    for &(file_delta, rank_delta) in directions {
        let mut target = origin.offset(file_delta, rank_delta);
        loop {
            let occupied = board.is_occupied(target);
            if !occupied || board.holds_opposing_pair(target, origin) {
                add(&mut moves, target);
            }
            if occupied {
                break;
            }
            target = target.offset(file_delta, rank_delta);
        }
    }
    moves
}

#[inline]
fn add(moves: &mut SquareSet, target: Coord) {
    if let Some(sq) = target.square() {
        moves.insert(sq);
    }
}
