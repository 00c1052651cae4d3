//! Capture-chain search.
//!
//! Every chain is found by a depth-first walk over landing squares. The board
//! is never modified while searching: pieces already jumped in the current
//! branch stay where they are, are remembered in a per-branch [`CellSet`], and
//! block a king's line of sight like any other occupied cell. The moving piece
//! also stays on its origin square for the whole search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::cellset::CellSet;
use crate::types::*;

/// One jump: the piece lands on `landing`, removing the piece on `captured`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpStep {
    pub landing: Cell,
    pub captured: Cell,
}

/// A full sequence of consecutive jumps by a single piece.
///
/// A chain found by the search always has at least one step and ends on a
/// square from which no further capture exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureChain {
    steps: Vec<JumpStep>,
}

impl CaptureChain {
    pub fn new(steps: Vec<JumpStep>) -> Self {
        debug_assert!(!steps.is_empty(), "capture chains have at least one step");
        Self { steps }
    }

    pub fn steps(&self) -> &[JumpStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<JumpStep> {
        self.steps.first().copied()
    }

    /// Square the piece ends on.
    pub fn last_landing(&self) -> Option<Cell> {
        self.steps.last().map(|s| s.landing)
    }

    /// The chain without its first step, `None` once nothing is left.
    pub fn rest(&self) -> Option<CaptureChain> {
        if self.steps.len() > 1 {
            Some(CaptureChain {
                steps: self.steps[1..].to_vec(),
            })
        } else {
            None
        }
    }

    pub fn captured(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().map(|s| s.captured)
    }
}

/// Enumerate every capture chain `piece` can make starting from `from`.
///
/// Chains are returned in discovery order: directions in the order of
/// [`Piece::capture_directions`], nearer king landings first.
pub fn jump_chains(board: &Board, piece: Piece, from: Cell) -> Vec<CaptureChain> {
    let mut out = Vec::new();
    let mut path = Vec::with_capacity(12);
    extend(board, piece, from, CellSet::EMPTY, &mut path, &mut out);
    out
}

fn extend(
    board: &Board,
    piece: Piece,
    at: Cell,
    used: CellSet,
    path: &mut Vec<JumpStep>,
    out: &mut Vec<CaptureChain>,
) {
    let mut continued = false;

    for &dir in piece.capture_directions() {
        if piece.king {
            // Fly over empties up to the first occupied cell.
            let mut dist = 1;
            let victim = loop {
                let Some(cell) = at.offset(dir, dist) else {
                    break None;
                };
                match board.get(cell) {
                    None => dist += 1,
                    Some(pc) => break Some((cell, pc)),
                }
            };
            let Some((victim_cell, victim)) = victim else {
                continue;
            };
            if victim.owner == piece.owner || used.contains(victim_cell) {
                continue;
            }

            let mut land = dist + 1;
            while let Some(landing) = at.offset(dir, land) {
                if !board.is_empty(landing) {
                    break;
                }
                continued = true;
                let step = JumpStep {
                    landing,
                    captured: victim_cell,
                };
                jump(board, piece, step, used, path, out);
                land += 1;
            }
        } else {
            let (Some(mid), Some(landing)) = (at.offset(dir, 1), at.offset(dir, 2)) else {
                continue;
            };
            let capturable = match board.get(mid) {
                Some(pc) => pc.owner != piece.owner && !used.contains(mid),
                None => false,
            };
            if capturable && board.is_empty(landing) {
                continued = true;
                let step = JumpStep {
                    landing,
                    captured: mid,
                };
                jump(board, piece, step, used, path, out);
            }
        }
    }

    if !continued && !path.is_empty() {
        out.push(CaptureChain::new(path.clone()));
    }
}

fn jump(
    board: &Board,
    piece: Piece,
    step: JumpStep,
    used: CellSet,
    path: &mut Vec<JumpStep>,
    out: &mut Vec<CaptureChain>,
) {
    path.push(step);
    extend(board, piece, step.landing, used.with(step.captured), path, out);
    path.pop();
}

/// Legal capture options for one side: only the pieces whose longest chain
/// reaches the side-wide maximum, each with its chains of that length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureMap {
    max_len: usize,
    chains: BTreeMap<Cell, Vec<CaptureChain>>,
}

impl CaptureMap {
    /// Length of the longest chain available, 0 when nothing can be taken.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether the side is forced to capture this turn.
    pub fn is_mandatory(&self) -> bool {
        self.max_len > 0
    }

    pub fn is_starter(&self, cell: Cell) -> bool {
        self.chains.contains_key(&cell)
    }

    /// Pieces allowed to start a capture, row-major.
    pub fn starters(&self) -> impl Iterator<Item = Cell> + '_ {
        self.chains.keys().copied()
    }

    pub fn chains_from(&self, cell: Cell) -> &[CaptureChain] {
        self.chains.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn take_chains_from(&mut self, cell: Cell) -> Option<Vec<CaptureChain>> {
        self.chains.remove(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &[CaptureChain])> + '_ {
        self.chains.iter().map(|(c, v)| (*c, v.as_slice()))
    }
}

/// Apply the mandatory-maximal-capture rule across all of `player`'s pieces.
pub fn longest_jumps(board: &Board, player: Player) -> CaptureMap {
    let mut map = CaptureMap::default();

    for (cell, piece) in board.pieces(player) {
        let chains = jump_chains(board, piece, cell);
        let Some(best) = chains.iter().map(CaptureChain::len).max() else {
            continue;
        };
        if best < map.max_len {
            continue;
        }
        if best > map.max_len {
            map.max_len = best;
            map.chains.clear();
        }
        let longest: Vec<CaptureChain> = chains.into_iter().filter(|c| c.len() == best).collect();
        map.chains.insert(cell, longest);
    }

    trace!(
        ?player,
        max_len = map.max_len,
        starters = map.chains.len(),
        "capture scan"
    );
    map
}

#[cfg(test)]
#[path = "captures_tests.rs"]
mod captures_tests;
