//! Core types for the chessboard.
//!
//! This crate provides the fundamental types shared by the engine and its
//! frontends:
//! - [`Color`] for players and square shades
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`], [`Coord`], [`File`], and [`Rank`] for board coordinates
//! - [`Placement`] notation for whole-board layouts

mod color;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use piece::{Piece, PieceId, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::{is_on_board, square_color, square_name, Coord, File, Rank, Square, SQUARE_COLORS};
