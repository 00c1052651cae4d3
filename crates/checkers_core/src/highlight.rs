use crate::board::Board;
use crate::captures::{CaptureChain, longest_jumps};
use crate::cellset::CellSet;
use crate::movegen::simple_moves;
use crate::turn::TurnState;
use crate::types::*;

/// Cells to offer the acting player for the current selection state.
pub fn highlights(board: &Board, state: &TurnState, to_move: Player) -> Vec<Cell> {
    match state {
        TurnState::Idle => Vec::new(),
        TurnState::Selected {
            pending: Some(chains),
            ..
        } => first_landings(chains),
        TurnState::Selected {
            origin,
            pending: None,
        } => {
            let captures = longest_jumps(board, to_move);
            if captures.is_mandatory() {
                first_landings(captures.chains_from(*origin))
            } else {
                simple_moves(board, *origin)
            }
        }
    }
}

/// Distinct first landing squares, in chain order.
pub fn first_landings(chains: &[CaptureChain]) -> Vec<Cell> {
    let mut seen = CellSet::EMPTY;
    let mut out = Vec::new();
    for landing in chains.iter().filter_map(|ch| ch.first()).map(|s| s.landing) {
        if !seen.contains(landing) {
            seen.insert(landing);
            out.push(landing);
        }
    }
    out
}
