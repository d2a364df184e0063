//! Board coordinate representation.

use std::fmt;

use thiserror::Error;

/// Error returned when a raw (row, column) pair lies outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("coordinate ({0}, {1}) is outside the 8x8 board")]
pub struct OffBoard(pub u8, pub u8);

/// A coordinate on the 8x8 board, indexed 0-63.
///
/// Coordinates are packed row-major. Row 0 is the top of the board (Black's
/// home side), row 7 the bottom:
/// - (0, 0) = 0, (0, 1) = 1, ..., (0, 7) = 7
/// - (1, 0) = 8, ..., (7, 7) = 63
///
/// A `Coord` can only be constructed in range, so rule logic never indexes
/// outside the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    /// Creates a coordinate from row and column, each in 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Coord(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a coordinate without bounds checking.
    ///
    /// # Safety
    /// Both `row` and `col` must be in the range 0-7.
    #[inline]
    pub const unsafe fn new_unchecked(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Coord(row * 8 + col)
    }

    /// Creates a coordinate from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Creates a coordinate from index without bounds checking.
    ///
    /// # Safety
    /// The index must be in the range 0-63.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Coord(index)
    }

    /// Parses a coordinate from algebraic notation.
    ///
    /// Files map to columns and ranks count up from the bottom, so "a8" is
    /// (0, 0) and "h1" is (7, 7).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            b'A'..=b'H' => bytes[0] - b'A',
            _ => return None,
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return None,
        };
        Coord::new(7 - rank, col)
    }

    /// Returns the row (0-7, top to bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7, left to right).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the packed index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Steps by the given row and column deltas, or `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Coord(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Returns the algebraic notation for this coordinate.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, 8 - self.row())
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = OffBoard;

    fn try_from((row, col): (u8, u8)) -> Result<Self, OffBoard> {
        Coord::new(row, col).ok_or(OffBoard(row, col))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
