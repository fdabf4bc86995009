//! Board occupancy.

use std::collections::BTreeMap;

use chessboard_core::{Color, Coord, Piece, PieceKind, Placement, PlacementError, Square};
use serde::Serialize;

/// The occupant of every square on the board.
///
/// There is exactly one entry per square at all times; an entry is either a
/// piece or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board in the standard starting layout.
    ///
    /// Black's pieces stand on ranks 1 and 2, White's on ranks 7 and 8, with
    /// the back ranks ordered Rook, Knight, Bishop, Queen, King, Bishop,
    /// Knight, Rook from file A to H.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file_idx, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::ALL {
                let file = file_idx as i8;
                let pawn = Coord::new(file, color.pawn_rank().index() as i8);
                let back = Coord::new(file, color.back_rank().index() as i8);
                if let (Some(pawn), Some(back)) = (pawn.square(), back.square()) {
                    board.place(pawn, Piece::new(PieceKind::Pawn, color));
                    board.place(back, Piece::new(kind, color));
                }
            }
        }
        board
    }

    /// Creates a board from a placement string, giving every piece a fresh
    /// identity.
    pub fn from_placement(s: &str) -> Result<Self, PlacementError> {
        Ok(Self::from_layout(&Placement::parse(s)?))
    }

    /// Creates a board from a parsed placement.
    pub fn from_layout(placement: &Placement) -> Self {
        let mut board = Board::empty();
        for (sq, kind, color) in placement.iter() {
            board.place(sq, Piece::new(kind, color));
        }
        board
    }

    /// Returns the layout of this board, without piece identities.
    pub fn placement(&self) -> Placement {
        let mut placement = Placement::empty();
        for (sq, piece) in self.pieces() {
            placement.set(sq, Some((piece.kind(), piece.color())));
        }
        placement
    }

    /// Clears the board and sets up the standard starting layout.
    pub fn reset(&mut self) {
        *self = Board::standard();
    }

    /// Removes every piece.
    pub fn clear_all(&mut self) {
        self.squares = [None; 64];
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece at the given coordinate. Off-board coordinates hold
    /// nothing.
    #[inline]
    pub fn piece_at_coord(&self, coord: Coord) -> Option<Piece> {
        coord.square().and_then(|sq| self.piece_at(sq))
    }

    /// Returns true if the coordinate holds a piece or lies off the board.
    ///
    /// Treating off-board coordinates as occupied is what stops rays at the
    /// board edge and drops off-board jumps from move sets.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        match coord.square() {
            Some(sq) => self.piece_at(sq).is_some(),
            None => true,
        }
    }

    /// Returns true if both coordinates are on the board, both hold pieces,
    /// and the two pieces belong to different players.
    #[inline]
    pub fn holds_opposing_pair(&self, a: Coord, b: Coord) -> bool {
        match (self.piece_at_coord(a), self.piece_at_coord(b)) {
            (Some(first), Some(second)) => first.is_opponent_of(&second),
            _ => false,
        }
    }

    /// Puts a piece on a square, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index() as usize].replace(piece)
    }

    /// Empties a square, returning whatever stood there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Iterates over all 64 squares and their occupants, A1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |sq| (sq, self.piece_at(sq)))
    }

    /// Iterates over occupied squares, A1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(sq, piece)| piece.map(|piece| (sq, piece)))
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|entry| entry.is_some()).count()
    }

    /// Returns a serializable copy of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            placement: self.placement().to_string(),
            squares: self.iter().collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Copy of a board's occupancy, with one entry per square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Layout in placement notation.
    pub placement: String,
    /// Occupant of every square, keyed by square.
    pub squares: BTreeMap<Square, Option<Piece>>,
}
