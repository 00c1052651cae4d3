use crate::board::Board;
use crate::captures::longest_jumps;
use crate::types::*;

/// Non-capturing destinations for the piece on `from`.
///
/// Men step one cell diagonally forward; kings slide along every diagonal
/// until the first occupied cell. Captures are not considered here, callers
/// decide whether simple moves are allowed at all this turn.
pub fn simple_moves(board: &Board, from: Cell) -> Vec<Cell> {
    let mut out = Vec::new();
    simple_moves_into(board, from, &mut out);
    out
}

/// Same as [`simple_moves`], reusing `out`.
pub fn simple_moves_into(board: &Board, from: Cell, out: &mut Vec<Cell>) {
    out.clear();
    let Some(piece) = board.get(from) else {
        return;
    };

    for &dir in DIAGONALS.iter() {
        if piece.king {
            let mut dist = 1;
            while let Some(to) = from.offset(dir, dist) {
                if !board.is_empty(to) {
                    break;
                }
                out.push(to);
                dist += 1;
            }
        } else if dir.0 == piece.owner.forward() {
            if let Some(to) = from.offset(dir, 1) {
                if board.is_empty(to) {
                    out.push(to);
                }
            }
        }
    }
}

/// Check a single non-capturing move.
///
/// A man must go exactly one cell diagonally forward. A king may go any
/// distance along a diagonal provided every cell strictly between and the
/// destination itself are empty.
pub fn is_simple_move_legal(board: &Board, from: Cell, to: Cell) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if !board.is_empty(to) {
        return false;
    }

    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    if dr == 0 || dr.abs() != dc.abs() {
        return false;
    }

    if !piece.king {
        return dr == piece.owner.forward() && dc.abs() == 1;
    }

    let dir = (dr.signum(), dc.signum());
    (1..dr.abs()).all(|dist| match from.offset(dir, dist) {
        Some(between) => board.is_empty(between),
        None => false,
    })
}

/// Whether `player` has any legal move at all, capture or not.
pub fn has_any_move(board: &Board, player: Player) -> bool {
    if longest_jumps(board, player).is_mandatory() {
        return true;
    }
    let mut buf = Vec::with_capacity(16);
    board.pieces(player).any(|(cell, _)| {
        simple_moves_into(board, cell, &mut buf);
        !buf.is_empty()
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
