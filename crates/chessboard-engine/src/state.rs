//! Board, turn and capture bookkeeping for one game.

use chessboard_core::{Color, Coord, Piece, PieceKind, Square};
use serde::Serialize;

use crate::{movegen, Board, SquareSet};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GameOutcome {
    /// The winner took the opposing king.
    KingCaptured { winner: Color },
}

impl GameOutcome {
    pub const fn winner(self) -> Color {
        match self {
            GameOutcome::KingCaptured { winner } => winner,
        }
    }
}

/// Pieces each player has taken from the opponent, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureLedger {
    captured: [Vec<Piece>; 2],
}

impl CaptureLedger {
    /// Records that `by` captured `piece`.
    pub fn record(&mut self, by: Color, piece: Piece) {
        self.captured[by.index()].push(piece);
    }

    /// Returns the pieces `by` has captured.
    pub fn captured_by(&self, by: Color) -> &[Piece] {
        &self.captured[by.index()]
    }

    /// Returns the total number of captures by both players.
    pub fn len(&self) -> usize {
        self.captured.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        for pieces in &mut self.captured {
            pieces.clear();
        }
    }
}

/// A piece moved from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// Everything about a game except what is currently selected.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    captures: CaptureLedger,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Black moves first.
    pub const FIRST_TO_MOVE: Color = Color::Black;

    /// Creates a game in the standard starting layout.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Self::FIRST_TO_MOVE)
    }

    /// Creates a game from an arbitrary board and player to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            captures: CaptureLedger::default(),
            outcome: None,
        }
    }

    /// Clears the board and sets up a fresh game.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Self::FIRST_TO_MOVE;
        self.captures.clear();
        self.outcome = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn captures(&self) -> &CaptureLedger {
        &self.captures
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Returns true once a king has been captured.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Hands the move to the other player.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Returns true if the coordinate holds a piece or lies off the board.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.board.is_occupied(coord)
    }

    /// Returns true if both coordinates hold pieces of different players.
    #[inline]
    pub fn holds_opposing_pair(&self, a: Coord, b: Coord) -> bool {
        self.board.holds_opposing_pair(a, b)
    }

    /// Returns the destinations of the piece on `from`, or an empty set if
    /// the square is empty or the piece does not belong to the player to
    /// move.
    pub fn movable_from(&self, from: Square) -> SquareSet {
        match self.board.piece_at(from) {
            Some(piece) if piece.color() == self.turn => movegen::legal_moves(&self.board, from),
            _ => SquareSet::EMPTY,
        }
    }

    /// Moves the piece on `from` to `to`, recording any capture and ending
    /// the game if the captured piece was a king.
    ///
    /// Legality is the caller's concern; this only updates the bookkeeping.
    /// Returns `None` if `from` is empty. The turn is not switched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<CommittedMove> {
        let piece = self.board.clear(from)?;
        let captured = self.board.place(to, piece);

        if let Some(victim) = captured {
            self.captures.record(piece.color(), victim);
            if victim.kind() == PieceKind::King {
                self.outcome = Some(GameOutcome::KingCaptured {
                    winner: piece.color(),
                });
            }
        }

        Some(CommittedMove {
            piece,
            from,
            to,
            captured,
        })
    }

    /// Removes every piece; used when the session closes. The ledger and
    /// outcome survive so the result can still be reported.
    pub fn clear(&mut self) {
        self.board.clear_all();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn new_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::Black);
        assert!(state.captures().is_empty());
        assert!(!state.is_over());
        assert_eq!(state.board().occupied_count(), 32);
    }

    #[test]
    fn switch_turn_alternates() {
        let mut state = GameState::new();
        state.switch_turn();
        assert_eq!(state.turn(), Color::White);
        state.switch_turn();
        assert_eq!(state.turn(), Color::Black);
    }

    #[test]
    fn movable_only_for_player_to_move() {
        let state = GameState::new();
        assert_eq!(state.movable_from(sq("B1")).len(), 2);
        assert!(state.movable_from(sq("B8")).is_empty());
        assert!(state.movable_from(sq("D4")).is_empty());
    }

    #[test]
    fn apply_quiet_move() {
        let mut state = GameState::new();
        let mv = state.apply_move(sq("E2"), sq("E4")).unwrap();
        assert_eq!(mv.piece.kind(), PieceKind::Pawn);
        assert_eq!(mv.captured, None);
        assert_eq!(state.board().piece_at(sq("E2")), None);
        assert_eq!(state.board().piece_at(sq("E4")), Some(mv.piece));
        assert_eq!(state.board().occupied_count(), 32);
        assert_eq!(state.turn(), Color::Black);
    }

    #[test]
    fn apply_move_from_empty_square() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(sq("E4"), sq("E5")), None);
        assert_eq!(state.board().occupied_count(), 32);
    }

    #[test]
    fn capture_is_ledgered() {
        let board = Board::from_placement("8/8/8/3r4/8/3N4/8/8").unwrap();
        let mut state = GameState::from_board(board, Color::Black);
        let mv = state.apply_move(sq("D4"), sq("D6")).unwrap();
        let victim = mv.captured.unwrap();
        assert_eq!(victim.kind(), PieceKind::Knight);
        assert_eq!(state.captures().captured_by(Color::Black), &[victim]);
        assert!(state.captures().captured_by(Color::White).is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn king_capture_ends_game() {
        let board = Board::from_placement("8/8/8/3r4/8/3K4/8/8").unwrap();
        let mut state = GameState::from_board(board, Color::Black);
        state.apply_move(sq("D4"), sq("D6")).unwrap();
        assert_eq!(
            state.outcome(),
            Some(GameOutcome::KingCaptured {
                winner: Color::Black
            })
        );
        assert_eq!(state.outcome().map(GameOutcome::winner), Some(Color::Black));
    }

    #[test]
    fn occupancy_queries() {
        let state = GameState::new();
        assert!(state.is_occupied(Coord::new(0, 0)));
        assert!(!state.is_occupied(Coord::new(3, 3)));
        assert!(state.is_occupied(Coord::new(-1, 4)));
        assert!(state.holds_opposing_pair(Coord::new(0, 1), Coord::new(0, 6)));
        assert!(!state.holds_opposing_pair(Coord::new(0, 1), Coord::new(1, 1)));
        assert!(!state.holds_opposing_pair(Coord::new(0, 1), Coord::new(0, 4)));
        assert!(!state.holds_opposing_pair(Coord::new(0, 1), Coord::new(8, 8)));
    }

    #[test]
    fn reset_clears_everything() {
        let board = Board::from_placement("8/8/8/3r4/8/3K4/8/8").unwrap();
        let mut state = GameState::from_board(board, Color::White);
        state.apply_move(sq("D4"), sq("D6"));
        state.reset();
        assert_eq!(state.turn(), Color::Black);
        assert!(state.captures().is_empty());
        assert!(!state.is_over());
        assert_eq!(state.board().occupied_count(), 32);
    }
}
