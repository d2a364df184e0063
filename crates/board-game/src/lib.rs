//! An 8x8 board with per-piece move generation and the selection/turn
//! interaction state machine that drives it.
//!
//! This crate provides:
//! - [`Board`] and [`Square`] - the board model, with text-diagram parsing
//!   and rendering
//! - [`legal_moves`] and [`MoveSet`] - per-piece destination generation
//! - [`Game`] and [`GameEvent`] - the activation-driven interaction
//!   controller
//!
//! # Architecture
//!
//! The controller consumes "square activated" inputs and returns semantic
//! events; it never renders. A presentation layer (for example the
//! `board-repl` binary) owns all drawing and forwards user input into
//! [`Game::activate`].
//!
//! # Example
//!
//! ```
//! use board_core::Coord;
//! use board_game::{Game, GameEvent};
//!
//! let mut game = Game::new();
//! let from = Coord::new(6, 0).unwrap();
//! let to = Coord::new(4, 0).unwrap();
//!
//! // First activation selects the pawn and highlights its destinations.
//! let events = game.activate(from);
//! assert!(matches!(events[0], GameEvent::SelectionChanged(Some(_))));
//!
//! // Second activation applies the move and passes the turn.
//! let events = game.activate(to);
//! assert!(matches!(events[0], GameEvent::PieceMoved { .. }));
//! ```

mod board;
mod game;
mod layout;
mod movegen;
mod square;

pub use board::Board;
pub use game::{Game, GameEvent};
pub use layout::LayoutError;
pub use movegen::{legal_moves, MoveSet};
pub use square::Square;
