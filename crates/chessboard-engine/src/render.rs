//! The drawing side of the board: what the game asks a renderer to do.

use chessboard_core::{Color, Piece, Square};
use thiserror::Error;

/// Errors a renderer can report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An image or other asset could not be loaded.
    #[error("failed to load asset {name}: {reason}")]
    AssetLoad { name: String, reason: String },

    /// Writing to the display failed.
    #[error("display error: {0}")]
    Io(#[from] std::io::Error),
}

/// A flat fill for one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquarePaint {
    /// The square's own shade.
    Base(Color),
    /// The selection highlight.
    Highlight,
}

impl SquarePaint {
    /// Returns the base paint for a square.
    #[inline]
    pub const fn base(square: Square) -> Self {
        SquarePaint::Base(square.color())
    }
}

/// Sink for draw commands.
///
/// Commands take effect in the order they are issued. Painting a square
/// wipes whatever piece art was on it, so the game redraws pieces after
/// painting.
pub trait Renderer {
    /// Loads resources and draws the empty board. Called once, first.
    fn setup(&mut self) -> Result<(), RenderError>;

    /// Releases resources. Called once, last.
    fn close(&mut self);

    /// Draws a piece on a square, over the square's current paint.
    fn draw_piece(&mut self, square: Square, piece: &Piece);

    /// Paints a square with a flat fill.
    fn set_square_color(&mut self, square: Square, paint: SquarePaint);

    /// Shows everything drawn since the last call.
    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Setup,
    Close,
    /// Piece drawn on a square, identified by its display key.
    Piece(Square, String),
    Paint(Square, SquarePaint),
    Present,
}

/// Renderer that records every command instead of drawing.
///
/// Useful for headless runs and for checking what the game drew.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every command recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns and forgets every command recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the squares painted with the given fill, in command order.
    pub fn painted(&self, paint: SquarePaint) -> Vec<Square> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Paint(sq, p) if *p == paint => Some(*sq),
                _ => None,
            })
            .collect()
    }

    /// Returns the squares painted with their base shade, in command order.
    pub fn restored(&self) -> Vec<Square> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Paint(sq, SquarePaint::Base(_)) => Some(*sq),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for CommandLog {
    fn setup(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Setup);
        Ok(())
    }

    fn close(&mut self) {
        self.commands.push(DrawCommand::Close);
    }

    fn draw_piece(&mut self, square: Square, piece: &Piece) {
        self.commands
            .push(DrawCommand::Piece(square, piece.display_key()));
    }

    fn set_square_color(&mut self, square: Square, paint: SquarePaint) {
        self.commands.push(DrawCommand::Paint(square, paint));
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
