//! The 8x8 board.

use board_core::{Color, Coord, OffBoard, Piece, PieceKind};

use crate::Square;

/// An 8x8 grid of squares, each holding at most one piece.
///
/// Invariant: after every mutation, an occupant's `pos` equals the
/// coordinate of the square holding it, and each piece is held by exactly
/// one square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 64],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board {
            squares: std::array::from_fn(|i| {
                // SAFETY: array indices are always in 0-63
                Square::empty(unsafe { Coord::from_index_unchecked(i as u8) })
            }),
        }
    }

    /// Places a piece at `at`, overwriting any occupant.
    ///
    /// This is a setup primitive, not a move: an overwritten occupant is
    /// discarded with no capture bookkeeping.
    pub fn place(&mut self, color: Color, kind: PieceKind, at: Coord) {
        self.squares[at.index()].set(Piece::new(kind, color, at));
    }

    /// Returns the square at `at`.
    #[inline]
    pub fn square_at(&self, at: Coord) -> &Square {
        &self.squares[at.index()]
    }

    /// Looks up a square from a raw (row, column) pair, failing fast on
    /// out-of-range input.
    pub fn try_square_at(&self, row: u8, col: u8) -> Result<&Square, OffBoard> {
        Ok(self.square_at(Coord::try_from((row, col))?))
    }

    /// Returns the piece at `at`, if any.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.squares[at.index()].occupant()
    }

    /// Returns true if no piece occupies `at`.
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.squares[at.index()].is_empty()
    }

    /// Moves the occupant of `from` to `to`, returning the moved piece and
    /// any captured occupant of `to`.
    ///
    /// The source square is cleared, the piece's `pos` updated, and the
    /// destination installed as a single operation; no intermediate state
    /// is observable.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty. Callers check legality first.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> (Piece, Option<Piece>) {
        let mut piece = self.squares[from.index()]
            .take()
            .expect("moved from an empty square");
        piece.pos = to;
        let captured = self.squares[to.index()].set(piece);
        (piece, captured)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Iterates over the pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .filter_map(move |square| square.occupant().filter(|piece| piece.color == color))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
