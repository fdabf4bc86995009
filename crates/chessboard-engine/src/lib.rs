//! Board state, move generation and selection handling for a two-player
//! chessboard.
//!
//! This crate provides:
//! - [`Board`] - occupancy of all 64 squares
//! - [`GameState`] - board, player to move, captures and outcome
//! - [`movegen`] - one move generator per piece kind
//! - [`Game`] - the state machine turning square activations into moves
//! - [`Renderer`] and [`EventSource`] - what the game needs from a frontend
//! - [`Session`] - the loop tying the three together
//!
//! # Rules
//!
//! Pieces move as in chess, without castling, en passant or promotion.
//! Check is not tracked: the game ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use chessboard_core::{Color, Square};
//! use chessboard_engine::{CommandLog, Game, Transition};
//!
//! let mut game = Game::new();
//! let mut renderer = CommandLog::new();
//! game.reset(&mut renderer);
//!
//! let e2 = Square::from_name("E2").unwrap();
//! let e4 = Square::from_name("E4").unwrap();
//! assert!(matches!(game.activate(e2.coord(), &mut renderer), Transition::Selected { .. }));
//! assert!(matches!(game.activate(e4.coord(), &mut renderer), Transition::Moved(_)));
//! assert_eq!(game.turn(), Color::White);
//! ```

mod board;
pub mod event;
mod game;
pub mod movegen;
pub mod render;
mod session;
mod square_set;
mod state;

pub use board::{Board, BoardSnapshot};
pub use event::{EventError, EventSource, Flow, InputEvent, ScriptedEvents};
pub use game::{Game, IgnoreReason, Selection, Transition};
pub use movegen::legal_moves;
pub use render::{CommandLog, DrawCommand, RenderError, Renderer, SquarePaint};
pub use session::{Session, SessionError, SessionStats};
pub use square_set::{SquareSet, SquareSetIter};
pub use state::{CaptureLedger, CommittedMove, GameOutcome, GameState};
