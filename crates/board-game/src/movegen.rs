//! Per-piece move generation.
//!
//! [`legal_moves`] produces the destinations the piece at a square may move
//! to given the current occupancy: empty squares or opposing-colored
//! captures, always on the board, never the piece's own square. Rules not
//! modeled here (check, pins) do not constrain the result.

use board_core::{Color, Coord, PieceKind};

use crate::Board;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A set of destination coordinates with a fixed maximum capacity.
///
/// A queen in the open reaches at most 27 squares, so destinations fit in
/// a small inline array and generation never allocates.
#[derive(Clone)]
pub struct MoveSet {
    dests: [Coord; Self::MAX_DESTS],
    len: usize,
}

impl MoveSet {
    /// Maximum number of destinations any single piece can have.
    pub const MAX_DESTS: usize = 32;

    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        MoveSet {
            // SAFETY: 0 is a valid index; slots past `len` are never read
            dests: [unsafe { Coord::from_index_unchecked(0) }; Self::MAX_DESTS],
            len: 0,
        }
    }

    /// Adds a destination to the set.
    #[inline]
    pub fn push(&mut self, dest: Coord) {
        debug_assert!(self.len < Self::MAX_DESTS);
        self.dests[self.len] = dest;
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the destinations.
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.dests[..self.len]
    }

    /// Returns true if `dest` is in the set.
    #[inline]
    pub fn contains(&self, dest: Coord) -> bool {
        self.as_slice().contains(&dest)
    }

    /// Copies the destinations into a `Vec`.
    pub fn to_vec(&self) -> Vec<Coord> {
        self.as_slice().to_vec()
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the destinations the piece at `from` may legally move to.
///
/// Returns the empty set if `from` is unoccupied.
pub fn legal_moves(board: &Board, from: Coord) -> MoveSet {
    let mut set = MoveSet::new();
    let Some(piece) = board.piece_at(from) else {
        return set;
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut set),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_JUMPS, &mut set),
        PieceKind::King => step_moves(board, from, piece.color, &KING_STEPS, &mut set),
        PieceKind::Rook => slide_moves(board, from, piece.color, &ORTHOGONAL, &mut set),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &DIAGONAL, &mut set),
        PieceKind::Queen => {
            slide_moves(board, from, piece.color, &ORTHOGONAL, &mut set);
            slide_moves(board, from, piece.color, &DIAGONAL, &mut set);
        }
    }
    set
}

fn pawn_moves(board: &Board, from: Coord, color: Color, set: &mut MoveSet) {
    let dir = color.advance_dir();

    // Forward steps are blocked by any occupant; the double step is only
    // offered from the starting row and needs both squares clear.
    if let Some(step) = from.offset(dir, 0) {
        if board.is_empty(step) {
            set.push(step);
            if from.row() == color.start_row() {
                if let Some(jump) = step.offset(dir, 0) {
                    if board.is_empty(jump) {
                        set.push(jump);
                    }
                }
            }
        }
    }

    // Diagonal steps are captures only.
    for dc in [-1, 1] {
        if let Some(dest) = from.offset(dir, dc) {
            if board.piece_at(dest).is_some_and(|piece| piece.color != color) {
                set.push(dest);
            }
        }
    }
}

fn step_moves(board: &Board, from: Coord, color: Color, deltas: &[(i8, i8)], set: &mut MoveSet) {
    for &(dr, dc) in deltas {
        if let Some(dest) = from.offset(dr, dc) {
            match board.piece_at(dest) {
                None => set.push(dest),
                Some(piece) if piece.color != color => set.push(dest),
                Some(_) => {}
            }
        }
    }
}

fn slide_moves(board: &Board, from: Coord, color: Color, rays: &[(i8, i8)], set: &mut MoveSet) {
    for &(dr, dc) in rays {
        let mut cursor = from;
        while let Some(dest) = cursor.offset(dr, dc) {
            match board.piece_at(dest) {
                None => {
                    set.push(dest);
                    cursor = dest;
                }
                Some(piece) => {
                    if piece.color != color {
                        set.push(dest);
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn sorted(set: &MoveSet) -> Vec<Coord> {
        let mut dests = set.to_vec();
        dests.sort_by_key(|c| c.index());
        dests
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, at(4, 4)).is_empty());
    }

    #[test]
    fn pawn_single_and_double_from_start() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(6, 0));

        let set = legal_moves(&board, at(6, 0));
        assert_eq!(set.as_slice(), [at(5, 0), at(4, 0)]);
    }

    #[test]
    fn black_pawn_advances_down() {
        let mut board = Board::new();
        board.place(Color::Black, PieceKind::Pawn, at(1, 3));

        let set = legal_moves(&board, at(1, 3));
        assert_eq!(set.as_slice(), [at(2, 3), at(3, 3)]);
    }

    #[test]
    fn pawn_no_double_off_start_row() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(5, 0));

        let set = legal_moves(&board, at(5, 0));
        assert_eq!(set.as_slice(), [at(4, 0)]);
    }

    #[test]
    fn pawn_blocked_ahead_has_no_forward_moves() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(6, 0));
        board.place(Color::Black, PieceKind::Pawn, at(5, 0));

        // A blocked single step also rules out the double step.
        assert!(legal_moves(&board, at(6, 0)).is_empty());
    }

    #[test]
    fn pawn_double_blocked_at_jump_square() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(6, 0));
        board.place(Color::Black, PieceKind::Pawn, at(4, 0));

        let set = legal_moves(&board, at(6, 0));
        assert_eq!(set.as_slice(), [at(5, 0)]);
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(4, 4));
        board.place(Color::Black, PieceKind::Pawn, at(3, 3));
        board.place(Color::Black, PieceKind::Pawn, at(3, 5));

        let set = legal_moves(&board, at(4, 4));
        assert_eq!(sorted(&set), [at(3, 3), at(3, 4), at(3, 5)]);
    }

    #[test]
    fn pawn_never_captures_empty_diagonal() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(4, 4));

        let set = legal_moves(&board, at(4, 4));
        assert_eq!(set.as_slice(), [at(3, 4)]);
    }

    #[test]
    fn pawn_never_captures_own_color() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(4, 4));
        board.place(Color::White, PieceKind::Pawn, at(3, 3));

        let set = legal_moves(&board, at(4, 4));
        assert_eq!(set.as_slice(), [at(3, 4)]);
    }

    #[test]
    fn pawn_on_edge_column() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(4, 0));
        board.place(Color::Black, PieceKind::Pawn, at(3, 1));

        let set = legal_moves(&board, at(4, 0));
        assert_eq!(sorted(&set), [at(3, 0), at(3, 1)]);
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Pawn, at(0, 4));
        board.place(Color::Black, PieceKind::Pawn, at(7, 4));

        assert!(legal_moves(&board, at(0, 4)).is_empty());
        assert!(legal_moves(&board, at(7, 4)).is_empty());
    }

    #[test]
    fn knight_jumps_from_center() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Knight, at(4, 4));

        let set = legal_moves(&board, at(4, 4));
        assert_eq!(set.len(), 8);
        assert!(set.contains(at(2, 3)));
        assert!(set.contains(at(6, 5)));
    }

    #[test]
    fn knight_jumps_from_corner() {
        let mut board = Board::new();
        board.place(Color::Black, PieceKind::Knight, at(0, 0));

        let set = legal_moves(&board, at(0, 0));
        assert_eq!(sorted(&set), [at(1, 2), at(2, 1)]);
    }

    #[test]
    fn rook_slides_until_blocked() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Rook, at(4, 4));
        board.place(Color::White, PieceKind::Pawn, at(4, 6));
        board.place(Color::Black, PieceKind::Pawn, at(1, 4));

        let set = legal_moves(&board, at(4, 4));
        // Up to and including the enemy pawn, stopping short of the own pawn.
        assert!(set.contains(at(1, 4)));
        assert!(!set.contains(at(0, 4)));
        assert!(set.contains(at(4, 5)));
        assert!(!set.contains(at(4, 6)));
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn bishop_slides_diagonally() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Bishop, at(4, 4));
        board.place(Color::Black, PieceKind::Pawn, at(2, 2));

        let set = legal_moves(&board, at(4, 4));
        assert!(set.contains(at(2, 2)));
        assert!(!set.contains(at(1, 1)));
        assert!(set.contains(at(7, 7)));
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn queen_covers_both_ray_families() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::Queen, at(3, 3));

        let set = legal_moves(&board, at(3, 3));
        assert_eq!(set.len(), 27);
    }

    #[test]
    fn king_steps_one_square() {
        let mut board = Board::new();
        board.place(Color::White, PieceKind::King, at(4, 4));
        let set = legal_moves(&board, at(4, 4));
        assert_eq!(set.len(), 8);

        let mut corner = Board::new();
        corner.place(Color::White, PieceKind::King, at(7, 7));
        let set = legal_moves(&corner, at(7, 7));
        assert_eq!(sorted(&set), [at(6, 6), at(6, 7), at(7, 6)]);
    }

    #[test]
    fn move_set_basics() {
        let mut set = MoveSet::new();
        assert!(set.is_empty());
        set.push(at(1, 1));
        set.push(at(2, 2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(at(1, 1)));
        assert!(!set.contains(at(3, 3)));
        assert_eq!((&set).into_iter().count(), 2);
        assert_eq!(format!("{:?}", set), "[Coord(1, 1), Coord(2, 2)]");
    }

    proptest! {
        #[test]
        fn destinations_on_board_and_never_friendly(
            placements in proptest::collection::vec(
                (0u8..8, 0u8..8, 0usize..6, any::<bool>()),
                1..12,
            )
        ) {
            let mut board = Board::new();
            for &(row, col, kind, white) in &placements {
                let color = if white { Color::White } else { Color::Black };
                board.place(color, PieceKind::ALL[kind], at(row, col));
            }

            let pieces: Vec<_> = board.squares().filter_map(|s| s.occupant()).collect();
            for piece in pieces {
                let set = legal_moves(&board, piece.pos);
                for &dest in set.as_slice() {
                    prop_assert_ne!(dest, piece.pos);
                    if let Some(occupant) = board.piece_at(dest) {
                        prop_assert_ne!(occupant.color, piece.color);
                    }
                }
            }
        }
    }
}
