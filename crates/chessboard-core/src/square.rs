//! Board coordinates: files, ranks, on-board squares and raw coordinates.
//!
//! A [`Coord`] is any (file, rank) pair, including ones that fall off the
//! board. A [`Square`] is always on the board. Move generation works in
//! coordinates and lets the board decide what an off-board coordinate means.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Color;

/// A file (column) on the board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A'..='H' => Self::from_index(c.to_ascii_uppercase() as u8 - b'A'),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case letter of this file.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the digit of this rank.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Returns true if the zero-based (file, rank) pair lies on the board.
#[inline]
pub const fn is_on_board(file: i8, rank: i8) -> bool {
    0 <= file && file < 8 && 0 <= rank && rank < 8
}

/// Formats a zero-based (file, rank) pair as a letter followed by a digit.
///
/// No bounds check is made: `(-1, -1)` formats as `"@0"`.
pub fn square_name(file: i8, rank: i8) -> String {
    let letter = char::from_u32((i32::from(b'A') + i32::from(file)) as u32).unwrap_or('?');
    format!("{}{}", letter, i32::from(rank) + 1)
}

/// Returns the shade of the square at the zero-based (file, rank) pair.
///
/// Even parity is White, odd parity is Black, so A1 is White.
#[inline]
pub const fn square_color(file: i8, rank: i8) -> Color {
    if (file as i16 + rank as i16) & 1 == 0 {
        Color::White
    } else {
        Color::Black
    }
}

/// Shade of every square, indexed by [`Square::index`].
pub const SQUARE_COLORS: [Color; 64] = compute_square_colors();

const fn compute_square_colors() -> [Color; 64] {
    let mut colors = [Color::White; 64];
    let mut index = 0;
    while index < 64 {
        colors[index] = square_color((index % 8) as i8, (index / 8) as i8);
        index += 1;
    }
    colors
}

/// A (file, rank) pair that may lie off the board.
///
/// Both components are zero-based: A1 is `(0, 0)`, H8 is `(7, 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    /// Creates a coordinate from zero-based file and rank.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// Returns the coordinate shifted by the given deltas.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Self {
        Coord {
            file: self.file.saturating_add(file_delta),
            rank: self.rank.saturating_add(rank_delta),
        }
    }

    /// Returns true if this coordinate lies on the board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        is_on_board(self.file, self.rank)
    }

    /// Returns the square at this coordinate, if it lies on the board.
    #[inline]
    pub const fn square(self) -> Option<Square> {
        if self.is_on_board() {
            Some(Square((self.rank * 8 + self.file) as u8))
        } else {
            None
        }
    }

    /// Returns the letter+digit name, whether or not it is on the board.
    pub fn name(self) -> String {
        square_name(self.file, self.rank)
    }
}

impl From<Square> for Coord {
    fn from(square: Square) -> Self {
        square.coord()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed rank by rank: A1 = 0, B1 = 1, ..., H1 = 7,
/// A2 = 8, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from its name (e.g. "E4" or "e4").
    pub const fn from_name(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Iterates over all 64 squares, A1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Returns the coordinate of this square.
    #[inline]
    pub const fn coord(self) -> Coord {
        Coord::new((self.0 % 8) as i8, (self.0 / 8) as i8)
    }

    /// Returns the shade of this square.
    #[inline]
    pub const fn color(self) -> Color {
        SQUARE_COLORS[self.0 as usize]
    }

    /// Returns the name of this square (e.g. "E4").
    pub fn name(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.name())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Square::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid square name: {name}")))
    }
}
