//! The interaction controller: selection, highlights, and turn state.
//!
//! [`Game`] interprets square activations against the board. With nothing
//! selected, activating a square holding one of the current player's pieces
//! selects it and computes its legal destinations; any other activation is
//! ignored. With a selection active, activating a legal destination applies
//! the move and passes the turn, while anything else is rejected and the
//! selection stays put. Every activation returns the ordered list of
//! [`GameEvent`]s for a presentation layer to render.

use board_core::{Color, Coord, OffBoard, Piece, PieceKind};
use log::{debug, trace};

use crate::{legal_moves, Board, MoveSet};

/// A state change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece moved from `from` to `to`; `piece` carries its new position.
    PieceMoved {
        from: Coord,
        to: Coord,
        piece: Piece,
    },
    /// The selected square changed (`None` when cleared).
    SelectionChanged(Option<Coord>),
    /// The highlighted destination set changed.
    HighlightsChanged(Vec<Coord>),
    /// The turn passed to this color.
    TurnChanged(Color),
    /// An activation at this square was not a legal destination.
    MoveRejected(Coord),
}

/// A board plus the interaction state driving it.
///
/// The controller is either idle (no selection) or holding a selection with
/// its highlight set; `highlights` is always exactly the legal-move set of
/// the selected piece, and empty when nothing is selected.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    selection: Option<Coord>,
    highlights: MoveSet,
}

impl Game {
    /// Creates a game with the standard starting layout: eight pawns per
    /// side, White on row 6, Black on row 1. White moves first.
    pub fn new() -> Self {
        let mut board = Board::new();
        for col in 0..8u8 {
            // SAFETY: start rows and col are always within 0-7
            let white = unsafe { Coord::new_unchecked(Color::White.start_row(), col) };
            let black = unsafe { Coord::new_unchecked(Color::Black.start_row(), col) };
            board.place(Color::White, PieceKind::Pawn, white);
            board.place(Color::Black, PieceKind::Pawn, black);
        }
        Self::from_board(board)
    }

    /// Creates a game from a prepared board. White moves first.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            turn: Color::White,
            selection: None,
            highlights: MoveSet::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the selected square, if any.
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Returns the highlighted destinations of the selected piece.
    pub fn highlights(&self) -> &[Coord] {
        self.highlights.as_slice()
    }

    /// Places a piece before play. See [`Board::place`].
    ///
    /// This is part of the setup interface, called once per starting piece;
    /// placing pieces after activations have begun is not supported.
    pub fn place(&mut self, color: Color, kind: PieceKind, at: Coord) {
        self.board.place(color, kind, at);
    }

    /// Handles an activation of the square at `at`.
    ///
    /// Returns the events the activation produced, in order. Activations
    /// that change nothing (picking an empty or opposing square with nothing
    /// selected, or a stale selection) return an empty list.
    pub fn activate(&mut self, at: Coord) -> Vec<GameEvent> {
        match self.selection {
            Some(selected) => self.try_move(selected, at),
            None => self.try_select(at),
        }
    }

    /// Validates a raw (row, column) pair and activates that square.
    pub fn activate_at(&mut self, row: u8, col: u8) -> Result<Vec<GameEvent>, OffBoard> {
        Ok(self.activate(Coord::try_from((row, col))?))
    }

    fn try_select(&mut self, at: Coord) -> Vec<GameEvent> {
        let Some(piece) = self.board.piece_at(at) else {
            trace!("ignored activation of empty square {at}");
            return Vec::new();
        };
        if piece.color != self.turn {
            trace!("ignored {} piece at {at}, {} to move", piece.color, self.turn);
            return Vec::new();
        }

        let moves = legal_moves(&self.board, at);
        debug!(
            "selected {} {} at {at}, {} destination(s)",
            piece.color,
            piece.kind,
            moves.len()
        );
        self.selection = Some(at);
        self.highlights = moves;
        vec![
            GameEvent::SelectionChanged(Some(at)),
            GameEvent::HighlightsChanged(self.highlights.to_vec()),
        ]
    }

    fn try_move(&mut self, selected: Coord, at: Coord) -> Vec<GameEvent> {
        // Stale selection: the selected square no longer holds a piece of
        // the moving color. Cannot arise through activations alone; treated
        // as a no-op rather than an error.
        let Some(piece) = self.board.piece_at(selected) else {
            trace!("stale selection at {selected}, ignoring");
            return Vec::new();
        };
        if piece.color != self.turn {
            trace!("stale selection at {selected}, ignoring");
            return Vec::new();
        }

        // Recomputed rather than read from the highlight cache.
        let moves = legal_moves(&self.board, selected);
        if !moves.contains(at) {
            debug!("rejected {selected} -> {at}");
            return vec![GameEvent::MoveRejected(at)];
        }

        let (moved, captured) = self.board.move_piece(selected, at);
        if let Some(captured) = captured {
            debug!("{} {} captured at {at}", captured.color, captured.kind);
        }
        self.selection = None;
        self.highlights = MoveSet::new();
        self.turn = self.turn.opposite();
        debug!("moved {selected} -> {at}, {} to move", self.turn);
        vec![
            GameEvent::PieceMoved {
                from: selected,
                to: at,
                piece: moved,
            },
            GameEvent::SelectionChanged(None),
            GameEvent::HighlightsChanged(Vec::new()),
            GameEvent::TurnChanged(self.turn),
        ]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
