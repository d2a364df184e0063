//! Terminal adapter for the interactive board.
//!
//! Reads square activations from stdin (algebraic like `a2`, or `row col`
//! pairs), forwards them to the game, and renders the board with selection
//! and highlight markers after each one. `quit` exits.

use std::io::{self, BufRead, Write};

use board_core::Coord;
use board_game::{Game, GameEvent};

fn main() {
    env_logger::init();

    let mut game = Game::new();
    render(&game);
    prompt(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            prompt(&game);
            continue;
        }
        if input == "quit" {
            break;
        }

        let Some(at) = parse_square(input) else {
            eprintln!("unrecognized square '{input}' (try 'a2' or '6 0')");
            prompt(&game);
            continue;
        };

        for event in game.activate(at) {
            match event {
                GameEvent::PieceMoved { from, to, piece } => {
                    println!("{} {} {from} -> {to}", piece.color, piece.kind);
                }
                GameEvent::SelectionChanged(Some(at)) => println!("selected {at}"),
                GameEvent::SelectionChanged(None) => {}
                GameEvent::HighlightsChanged(_) => {}
                GameEvent::TurnChanged(color) => println!("{color} to move"),
                GameEvent::MoveRejected(at) => println!("can't move there ({at})"),
            }
        }
        render(&game);
        prompt(&game);
    }
}

/// Accepts algebraic notation ("a2") or a "row col" pair ("6 0").
fn parse_square(input: &str) -> Option<Coord> {
    if let Some(coord) = Coord::from_algebraic(input) {
        return Some(coord);
    }
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Coord::try_from((row, col)).ok()
}

fn render(game: &Game) {
    let selection = game.selection();
    let highlights = game.highlights();

    println!("  a b c d e f g h");
    for row in 0..8u8 {
        print!("{} ", 8 - row);
        for col in 0..8u8 {
            let at = Coord::new(row, col).unwrap();
            let glyph = match game.board().piece_at(at) {
                Some(piece) => piece.glyph(),
                None => '.',
            };
            let mark = if selection == Some(at) {
                '<'
            } else if highlights.contains(&at) {
                '*'
            } else {
                ' '
            };
            print!("{glyph}{mark}");
        }
        println!("{}", 8 - row);
    }
    println!("  a b c d e f g h");
}

fn prompt(game: &Game) {
    print!("{} > ", game.turn());
    let _ = io::stdout().flush();
}
