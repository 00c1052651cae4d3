//! Plain-text board drawing for the terminal.

use checkers_core::{Cell, Game, GameStatus, Outcome};

/// Draw the board with row/column labels.
///
/// Highlighted targets are shown as `*`, the selected piece is wrapped in
/// brackets.
pub fn render_game(game: &Game) -> String {
    let board = game.board();
    let selected = game.selected();
    let mut out = String::from("   0 1 2 3 4 5 6 7\n");

    for row in 0..8 {
        out.push_str(&format!("{row} "));
        for col in 0..8 {
            let Some(cell) = Cell::new(row, col) else {
                continue;
            };
            let symbol = match board.get(cell) {
                Some(pc) => pc.to_char(),
                None if game.highlights().contains(&cell) => '*',
                None => '.',
            };
            if selected == Some(cell) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else if selected.is_some_and(|s| s.row() as i32 == row && s.col() as i32 + 1 == col) {
                out.push(symbol);
            } else {
                out.push(' ');
                out.push(symbol);
            }
        }
        out.push('\n');
    }

    match game.status() {
        GameStatus::InProgress => out.push_str(&format!("{} to move", game.to_move())),
        GameStatus::Won(winner) => out.push_str(&format!("{winner} wins")),
    }
    if let Some(cell) = game.selected() {
        out.push_str(&format!(", selected {cell}"));
    }
    out.push('\n');
    out
}

pub fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Continue => "ok",
        Outcome::TurnEnd => "turn complete",
        Outcome::Rejected => "rejected",
    }
}
