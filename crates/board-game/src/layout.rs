//! Text diagrams for board positions.
//!
//! A diagram is eight lines of eight characters, top row first: `.` for an
//! empty square, piece letters otherwise (uppercase White, lowercase Black,
//! the usual `p n b r q k` codes).

use std::fmt;

use board_core::{Coord, PieceKind};
use thiserror::Error;

use crate::Board;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    WrongRowWidth { row: usize, len: usize },

    #[error("unknown piece character '{ch}' at ({row}, {col})")]
    UnknownPiece { ch: char, row: usize, col: usize },
}

impl Board {
    /// Parses a diagram into a board.
    ///
    /// Surrounding whitespace on each line is ignored, as are blank lines,
    /// so diagrams can be written indented inline in tests.
    pub fn from_diagram(diagram: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let mut col = 0;
            for ch in line.chars() {
                if col == 8 {
                    return Err(LayoutError::WrongRowWidth {
                        row,
                        len: line.chars().count(),
                    });
                }
                if ch != '.' {
                    let (kind, color) =
                        PieceKind::from_char(ch).ok_or(LayoutError::UnknownPiece { ch, row, col })?;
                    // SAFETY: row comes from an 8-element list, col is capped above
                    let at = unsafe { Coord::new_unchecked(row as u8, col as u8) };
                    board.place(color, kind, at);
                }
                col += 1;
            }
            if col != 8 {
                return Err(LayoutError::WrongRowWidth { row, len: col });
            }
        }
        Ok(board)
    }

    /// Renders the board as a diagram.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for (i, square) in self.squares().enumerate() {
            match square.occupant() {
                Some(piece) => out.push(piece.kind.to_char(piece.color)),
                None => out.push('.'),
            }
            if i % 8 == 7 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}
