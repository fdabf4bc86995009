//! The selection state machine.
//!
//! [`Game`] turns square activations into selections, committed moves and
//! cancellations, and tells a [`Renderer`] what changed:
//! - activating one of the mover's pieces that can move selects it and
//!   highlights its destinations
//! - activating a highlighted destination commits the move
//! - activating anything else cancels the selection

use chessboard_core::{Color, Coord, PlacementError, Square};
use tracing::{debug, info};

use crate::event::{Flow, InputEvent};
use crate::render::{Renderer, SquarePaint};
use crate::state::{CaptureLedger, CommittedMove, GameOutcome, GameState};
use crate::{Board, SquareSet};

/// What is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece is selected; `candidates` is never empty.
    Selecting { active: Square, candidates: SquareSet },
}

impl Selection {
    /// Returns the selected square, if any.
    pub fn active(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selecting { active, .. } => Some(*active),
        }
    }

    /// Returns the highlighted destinations, empty when idle.
    pub fn candidates(&self) -> SquareSet {
        match self {
            Selection::Idle => SquareSet::EMPTY,
            Selection::Selecting { candidates, .. } => *candidates,
        }
    }

    /// Returns every highlighted square: the selected one and its
    /// destinations.
    pub fn highlighted(&self) -> SquareSet {
        match self {
            Selection::Idle => SquareSet::EMPTY,
            Selection::Selecting { active, candidates } => {
                *candidates | SquareSet::from_square(*active)
            }
        }
    }
}

/// Why an activation changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The coordinate is not on the board.
    OffBoard,
    /// No piece stands on the square.
    EmptySquare,
    /// The piece belongs to the player not on move.
    NotYourTurn,
    /// The piece has nowhere to go.
    NoMoves,
    /// A king has already been captured.
    GameOver,
}

/// Result of activating a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// A piece was selected.
    Selected { square: Square, candidates: SquareSet },
    /// The selected piece moved and the turn passed.
    Moved(CommittedMove),
    /// The selection was dropped without moving.
    Cancelled { square: Square },
}

/// A game in progress, plus what the user has selected in it.
///
/// The game never owns its renderer; every call that draws takes one.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    selection: Selection,
}

impl Game {
    /// Creates a game in the standard starting layout, Black to move.
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Creates a game from existing state, with nothing selected.
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            selection: Selection::Idle,
        }
    }

    /// Creates a game from a placement string and the player to move.
    pub fn from_placement(placement: &str, turn: Color) -> Result<Self, PlacementError> {
        let board = Board::from_placement(placement)?;
        Ok(Self::from_state(GameState::from_board(board, turn)))
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    #[inline]
    pub fn captures(&self) -> &CaptureLedger {
        self.state.captures()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Starts a fresh game and redraws the whole board.
    pub fn reset<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.state.reset();
        self.selection = Selection::Idle;
        self.draw_board(renderer);
        info!(turn = %self.turn(), "new game");
    }

    /// Draws every square and every piece.
    pub fn draw_board<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let highlighted = self.selection.highlighted();
        for sq in Square::all() {
            if highlighted.contains(sq) {
                self.highlight(renderer, sq);
            } else {
                self.repaint(renderer, sq);
            }
        }
    }

    /// Feeds one input event to the game.
    pub fn handle_event<R: Renderer + ?Sized>(&mut self, event: InputEvent, renderer: &mut R) -> Flow {
        match event {
            InputEvent::Quit => Flow::Quit,
            InputEvent::SquareActivated(coord) => {
                self.activate(coord, renderer);
                Flow::Continue
            }
            InputEvent::KeyUp => Flow::Continue,
        }
    }

    /// Activates the square at `coord`.
    pub fn activate<R: Renderer + ?Sized>(&mut self, coord: Coord, renderer: &mut R) -> Transition {
        let transition = if self.state.is_over() {
            Transition::Ignored(IgnoreReason::GameOver)
        } else {
            match self.selection {
                Selection::Idle => self.select(coord, renderer),
                Selection::Selecting { active, candidates } => {
                    match coord.square().filter(|sq| candidates.contains(*sq)) {
                        Some(target) => self.commit(active, target, renderer),
                        None => self.cancel(active, renderer),
                    }
                }
            }
        };
        debug!(square = %coord, ?transition, "square activated");
        transition
    }

    /// Clears the board at the end of a session.
    pub fn close(&mut self) {
        self.selection = Selection::Idle;
        self.state.clear();
    }

    fn select<R: Renderer + ?Sized>(&mut self, coord: Coord, renderer: &mut R) -> Transition {
        let Some(square) = coord.square() else {
            return Transition::Ignored(IgnoreReason::OffBoard);
        };
        let Some(piece) = self.board().piece_at(square) else {
            return Transition::Ignored(IgnoreReason::EmptySquare);
        };
        if piece.color() != self.turn() {
            return Transition::Ignored(IgnoreReason::NotYourTurn);
        }
        let candidates = self.state.movable_from(square);
        if candidates.is_empty() {
            return Transition::Ignored(IgnoreReason::NoMoves);
        }

        self.selection = Selection::Selecting {
            active: square,
            candidates,
        };
        for sq in self.selection.highlighted() {
            self.highlight(renderer, sq);
        }
        Transition::Selected { square, candidates }
    }

    fn commit<R: Renderer + ?Sized>(&mut self, from: Square, to: Square, renderer: &mut R) -> Transition {
        let highlighted = self.selection.highlighted();
        self.selection = Selection::Idle;

        let Some(committed) = self.state.apply_move(from, to) else {
            // Selections are only made on occupied squares.
            self.restore(renderer, highlighted);
            return Transition::Cancelled { square: from };
        };
        self.restore(renderer, highlighted);
        self.state.switch_turn();

        match self.state.outcome() {
            Some(outcome) => info!(
                winner = %outcome.winner(),
                "{} captured {} on {}",
                committed.piece,
                committed.captured.map(|p| p.to_string()).unwrap_or_default(),
                to
            ),
            None => info!(piece = %committed.piece, %from, %to, captured = committed.captured.is_some(), "move"),
        }
        Transition::Moved(committed)
    }

    fn cancel<R: Renderer + ?Sized>(&mut self, active: Square, renderer: &mut R) -> Transition {
        let highlighted = self.selection.highlighted();
        self.selection = Selection::Idle;
        self.restore(renderer, highlighted);
        Transition::Cancelled { square: active }
    }

    /// Repaints every square of `squares` with its base shade, once each.
    fn restore<R: Renderer + ?Sized>(&self, renderer: &mut R, squares: SquareSet) {
        for sq in squares {
            self.repaint(renderer, sq);
        }
    }

    fn repaint<R: Renderer + ?Sized>(&self, renderer: &mut R, sq: Square) {
        renderer.set_square_color(sq, SquarePaint::base(sq));
        if let Some(piece) = self.board().piece_at(sq) {
            renderer.draw_piece(sq, &piece);
        }
    }

    fn highlight<R: Renderer + ?Sized>(&self, renderer: &mut R, sq: Square) {
        renderer.set_square_color(sq, SquarePaint::Highlight);
        if let Some(piece) = self.board().piece_at(sq) {
            renderer.draw_piece(sq, &piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandLog, DrawCommand};
    use chessboard_core::{PieceKind, Placement};

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn at(name: &str) -> Coord {
        sq(name).coord()
    }

    fn set(names: &[&str]) -> SquareSet {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn new_game_is_idle() {
        let game = Game::new();
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.turn(), Color::Black);
        assert!(!game.is_over());
    }

    #[test]
    fn reset_draws_every_square() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.reset(&mut log);
        assert_eq!(log.restored().len(), 64);
        let pieces = log
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Piece(..)))
            .count();
        assert_eq!(pieces, 32);
        assert!(log
            .commands()
            .contains(&DrawCommand::Piece(sq("E1"), "BLACK_KING".to_string())));
    }

    #[test]
    fn select_own_piece() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        let transition = game.activate(at("B1"), &mut log);
        assert_eq!(
            transition,
            Transition::Selected {
                square: sq("B1"),
                candidates: set(&["A3", "C3"])
            }
        );
        assert_eq!(game.selection().active(), Some(sq("B1")));
        assert_eq!(game.selection().candidates(), set(&["A3", "C3"]));
        assert_eq!(
            log.painted(SquarePaint::Highlight),
            vec![sq("B1"), sq("A3"), sq("C3")]
        );
        // The selected knight stays visible on its highlighted square.
        assert!(log
            .commands()
            .contains(&DrawCommand::Piece(sq("B1"), "BLACK_KNIGHT".to_string())));
    }

    #[test]
    fn ignored_activations() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        assert_eq!(
            game.activate(at("D4"), &mut log),
            Transition::Ignored(IgnoreReason::EmptySquare)
        );
        assert_eq!(
            game.activate(at("B8"), &mut log),
            Transition::Ignored(IgnoreReason::NotYourTurn)
        );
        assert_eq!(
            game.activate(at("A1"), &mut log),
            Transition::Ignored(IgnoreReason::NoMoves)
        );
        assert_eq!(
            game.activate(Coord::new(-1, 3), &mut log),
            Transition::Ignored(IgnoreReason::OffBoard)
        );
        assert_eq!(game.selection(), &Selection::Idle);
        assert!(log.commands().is_empty());
    }

    #[test]
    fn cancel_restores_highlights_without_moving() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.activate(at("E2"), &mut log);
        log.take();

        let before = game.board().clone();
        let transition = game.activate(at("H5"), &mut log);
        assert_eq!(transition, Transition::Cancelled { square: sq("E2") });
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(log.restored(), vec![sq("E2"), sq("E3"), sq("E4")]);
        assert!(log
            .commands()
            .contains(&DrawCommand::Piece(sq("E2"), "BLACK_PAWN".to_string())));
    }

    #[test]
    fn selecting_another_own_piece_cancels() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.activate(at("E2"), &mut log);
        assert_eq!(
            game.activate(at("D2"), &mut log),
            Transition::Cancelled { square: sq("E2") }
        );
        assert_eq!(game.selection(), &Selection::Idle);
    }

    #[test]
    fn off_board_while_selecting_cancels() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.activate(at("E2"), &mut log);
        assert_eq!(
            game.activate(Coord::new(9, 9), &mut log),
            Transition::Cancelled { square: sq("E2") }
        );
    }

    #[test]
    fn commit_moves_and_switches_turn() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.activate(at("E2"), &mut log);
        log.take();

        let transition = game.activate(at("E4"), &mut log);
        let Transition::Moved(mv) = transition else {
            panic!("expected a move, got {transition:?}");
        };
        assert_eq!((mv.from, mv.to), (sq("E2"), sq("E4")));
        assert_eq!(mv.captured, None);
        assert_eq!(game.board().piece_at(sq("E2")), None);
        assert_eq!(game.board().piece_at(sq("E4")), Some(mv.piece));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), &Selection::Idle);

        // Each highlighted square is restored exactly once.
        assert_eq!(log.restored(), vec![sq("E2"), sq("E3"), sq("E4")]);
        assert_eq!(
            log.commands().last(),
            Some(&DrawCommand::Piece(sq("E4"), "BLACK_PAWN".to_string()))
        );
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.activate(at("E2"), &mut log);
        game.activate(at("E4"), &mut log);
        assert_eq!(
            game.activate(at("D2"), &mut log),
            Transition::Ignored(IgnoreReason::NotYourTurn)
        );
        assert!(matches!(
            game.activate(at("D7"), &mut log),
            Transition::Selected { .. }
        ));
        game.activate(at("D5"), &mut log);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn capture_records_piece() {
        let mut game = Game::from_placement("8/8/8/3r4/8/3N4/8/8", Color::Black).unwrap();
        let mut log = CommandLog::new();
        game.activate(at("D4"), &mut log);
        let transition = game.activate(at("D6"), &mut log);
        let Transition::Moved(mv) = transition else {
            panic!("expected a move, got {transition:?}");
        };
        let victim = mv.captured.unwrap();
        assert_eq!(victim.kind(), PieceKind::Knight);
        assert_eq!(game.captures().captured_by(Color::Black), &[victim]);
        assert!(!game.is_over());
    }

    #[test]
    fn king_capture_wins_and_freezes_board() {
        let mut game = Game::from_placement("8/8/8/3r4/8/3K4/8/R7", Color::Black).unwrap();
        let mut log = CommandLog::new();
        game.activate(at("D4"), &mut log);
        game.activate(at("D6"), &mut log);

        assert_eq!(
            game.outcome(),
            Some(GameOutcome::KingCaptured {
                winner: Color::Black
            })
        );
        let king = game.captures().captured_by(Color::Black)[0];
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.color(), Color::White);

        let frozen = game.board().clone();
        assert_eq!(
            game.activate(at("A8"), &mut log),
            Transition::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(game.board(), &frozen);
    }

    #[test]
    fn handle_event_dispatch() {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        assert_eq!(game.handle_event(InputEvent::KeyUp, &mut log), Flow::Continue);
        assert_eq!(
            game.handle_event(InputEvent::SquareActivated(at("G1")), &mut log),
            Flow::Continue
        );
        assert_eq!(game.selection().active(), Some(sq("G1")));
        assert_eq!(game.handle_event(InputEvent::Quit, &mut log), Flow::Quit);
    }

    #[test]
    fn close_empties_board() {
        let mut game = Game::new();
        game.close();
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn reset_after_win() {
        let mut game = Game::from_placement("8/8/8/3r4/8/3K4/8/8", Color::Black).unwrap();
        let mut log = CommandLog::new();
        game.activate(at("D4"), &mut log);
        game.activate(at("D6"), &mut log);
        assert!(game.is_over());

        game.reset(&mut log);
        assert!(!game.is_over());
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.board().placement().to_string(), Placement::STANDARD);
    }
}
