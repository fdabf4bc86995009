//! ANSI terminal renderer.
//!
//! Draw commands update an in-memory frame; [`Renderer::present`] writes the
//! whole frame out. Rank 1 is drawn at the top, the way the board is laid out
//! on screen.

use std::io::Write;

use chessboard_core::{Color, Piece, PieceKind, Square};
use chessboard_engine::{RenderError, Renderer, SquarePaint};

use crate::config::{Config, Palette};

const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    paint: SquarePaint,
    piece: Option<(PieceKind, Color)>,
}

/// How the frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub plain: bool,
    pub unicode_pieces: bool,
    pub show_coordinates: bool,
    pub palette: Palette,
}

impl From<&Config> for Style {
    fn from(config: &Config) -> Self {
        Style {
            plain: config.plain,
            unicode_pieces: config.unicode_pieces,
            show_coordinates: config.show_coordinates,
            palette: config.colors,
        }
    }
}

/// Renderer drawing the board as text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    style: Style,
    cells: [Cell; 64],
    ready: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, style: Style) -> Self {
        let mut cells = [Cell {
            paint: SquarePaint::Highlight,
            piece: None,
        }; 64];
        for sq in Square::all() {
            cells[sq.index() as usize].paint = SquarePaint::base(sq);
        }
        TerminalRenderer {
            out,
            style,
            cells,
            ready: false,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    /// Renders the current frame to a string.
    pub fn frame(&self) -> String {
        let mut frame = String::new();
        if self.style.show_coordinates {
            frame.push_str("   ");
            for file in 'A'..='H' {
                frame.push_str(&format!(" {file} "));
            }
            frame.push('\n');
        }
        for rank in 0..8u8 {
            if self.style.show_coordinates {
                frame.push_str(&format!(" {} ", rank + 1));
            }
            for file in 0..8u8 {
                let cell = self.cells[(rank * 8 + file) as usize];
                frame.push_str(&self.cell_text(cell));
            }
            if !self.style.plain {
                frame.push_str(RESET);
            }
            frame.push('\n');
        }
        frame
    }

    fn cell_text(&self, cell: Cell) -> String {
        let glyph = match cell.piece {
            Some((kind, color)) => self.glyph(kind, color),
            None if self.style.plain => '.',
            None => ' ',
        };

        if self.style.plain {
            return match cell.paint {
                SquarePaint::Highlight => format!("[{glyph}]"),
                SquarePaint::Base(_) => format!(" {glyph} "),
            };
        }

        let palette = self.style.palette;
        let background = match cell.paint {
            SquarePaint::Highlight => palette.highlight,
            SquarePaint::Base(Color::White) => palette.light,
            SquarePaint::Base(Color::Black) => palette.dark,
        };
        let foreground = match cell.piece {
            Some((_, Color::White)) => 231,
            _ => 16,
        };
        format!("\x1b[48;5;{background}m\x1b[38;5;{foreground}m {glyph} ")
    }

    fn glyph(&self, kind: PieceKind, color: Color) -> char {
        if !self.style.unicode_pieces {
            return kind.to_char(color);
        }
        match (color, kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn setup(&mut self) -> Result<(), RenderError> {
        if !self.style.plain {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.flush()?;
        self.ready = true;
        Ok(())
    }

    fn close(&mut self) {
        if self.ready && !self.style.plain {
            // Nothing useful can be done if the terminal is already gone.
            let _ = self.out.write_all(RESET.as_bytes());
            let _ = self.out.flush();
        }
        self.ready = false;
    }

    fn draw_piece(&mut self, square: Square, piece: &Piece) {
        self.cells[square.index() as usize].piece = Some((piece.kind(), piece.color()));
    }

    fn set_square_color(&mut self, square: Square, paint: SquarePaint) {
        self.cells[square.index() as usize] = Cell { paint, piece: None };
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let frame = self.frame();
        if !self.style.plain {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
