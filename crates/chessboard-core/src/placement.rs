//! Placement notation: a one-line text layout of the pieces on a board.
//!
//! Eight `/`-separated segments, rank 1 first, each listing files A to H.
//! Digits stand for runs of empty squares; `pnbrqk` are Black pieces and
//! `PNBRQK` are White pieces.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Color, PieceKind, Square};

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{0}' in rank {1}")]
    InvalidCharacter(char, usize),

    #[error("rank {0} has {1} squares, expected 8")]
    InvalidRankLength(usize, u32),
}

/// Kind and color for each of the 64 squares, indexed by [`Square::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    squares: [Option<(PieceKind, Color)>; 64],
}

impl Placement {
    /// The standard starting layout: Black on ranks 1-2, White on ranks 7-8.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// A layout with no pieces.
    pub const fn empty() -> Self {
        Placement {
            squares: [None; 64],
        }
    }

    /// Returns the kind and color at the given square.
    #[inline]
    pub fn get(&self, square: Square) -> Option<(PieceKind, Color)> {
        self.squares[square.index() as usize]
    }

    /// Sets or clears the given square.
    #[inline]
    pub fn set(&mut self, square: Square, entry: Option<(PieceKind, Color)>) {
        self.squares[square.index() as usize] = entry;
    }

    /// Iterates over occupied squares, A1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, PieceKind, Color)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|(kind, color)| (sq, kind, color)))
    }

    /// Parses a placement string.
    pub fn parse(s: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = s.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut placement = Placement::empty();
        for (rank_idx, segment) in ranks.iter().enumerate() {
            let rank_number = rank_idx + 1;
            let mut file = 0u32;
            for c in segment.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run;
                } else if let Some(entry) = PieceKind::from_char(c) {
                    if file < 8 {
                        let index = (rank_idx as u32 * 8 + file) as u8;
                        if let Some(sq) = Square::from_index(index) {
                            placement.set(sq, Some(entry));
                        }
                    }
                    file += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter(c, rank_number));
                }
            }
            if file != 8 {
                return Err(PlacementError::InvalidRankLength(rank_number, file));
            }
        }

        Ok(placement)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8u8 {
            if rank > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::from_index(rank * 8 + file).and_then(|sq| self.get(sq)) {
                    Some((kind, color)) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", kind.to_char(color))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}
