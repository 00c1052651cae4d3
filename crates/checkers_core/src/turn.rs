//! Turn controller: turns discrete cell selections into board mutations.
//!
//! One [`Game`] owns the board, the player to move and the selection state.
//! The external input layer feeds it one cell per interaction through
//! [`Game::select`]; every call returns immediately with an [`Outcome`] and
//! leaves a fresh highlight set behind for the renderer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::Board;
use crate::captures::{CaptureChain, JumpStep, longest_jumps};
use crate::highlight::highlights;
use crate::movegen::{has_any_move, is_simple_move_legal};
use crate::snapshot::Snapshot;
use crate::types::*;

/// Selection state within the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    /// A piece is picked up.
    ///
    /// `pending` is `Some` while the piece is bound to a capture sequence and
    /// then holds the remaining part of every still-legal maximal chain from
    /// `origin`. `None` means a simple move is on offer.
    Selected {
        origin: Cell,
        pending: Option<Vec<CaptureChain>>,
    },
}

impl TurnState {
    pub fn selected(&self) -> Option<Cell> {
        match self {
            TurnState::Idle => None,
            TurnState::Selected { origin, .. } => Some(*origin),
        }
    }

    /// True while a capture chain has been started and must be continued.
    pub fn is_capturing(&self) -> bool {
        matches!(
            self,
            TurnState::Selected {
                pending: Some(_),
                ..
            }
        )
    }
}

/// Result of feeding one selected cell to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Accepted, the turn is still open: a piece is now selected or a capture
    /// chain has more jumps to make.
    Continue,
    /// A move or capture chain completed and the other player is to move.
    TurnEnd,
    /// Nothing happened to the board; the selection was cleared or refused.
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// The other side has no piece or no legal move left.
    Won(Player),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    state: TurnState,
    highlights: Vec<Cell>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start position, Player One to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Player::One)
    }

    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            state: TurnState::Idle,
            highlights: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn selected(&self) -> Option<Cell> {
        self.state.selected()
    }

    /// Destination cells the acting player may pick right now.
    pub fn highlights(&self) -> &[Cell] {
        &self.highlights
    }

    pub fn status(&self) -> GameStatus {
        if has_any_move(&self.board, self.to_move) {
            GameStatus::InProgress
        } else {
            GameStatus::Won(self.to_move.other())
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            selected: self.selected(),
            highlights: self.highlights.clone(),
            status: self.status(),
        }
    }

    /// Feed raw coordinates; anything off the board counts as an empty cell.
    pub fn select_raw(&mut self, row: i32, col: i32) -> Outcome {
        match Cell::new(row, col) {
            Some(cell) => self.select(cell),
            None => {
                debug!(row, col, "selection off the board");
                self.clear_selection();
                Outcome::Rejected
            }
        }
    }

    /// Handle one selected cell for the player to move.
    pub fn select(&mut self, cell: Cell) -> Outcome {
        let outcome = match std::mem::take(&mut self.state) {
            TurnState::Idle => self.pick_up(cell),
            TurnState::Selected {
                origin,
                pending: Some(chains),
            } => self.continue_capture(origin, chains, cell),
            TurnState::Selected {
                origin,
                pending: None,
            } => self.step_or_reselect(origin, cell),
        };
        self.highlights = highlights(&self.board, &self.state, self.to_move);
        outcome
    }

    fn clear_selection(&mut self) {
        self.state = TurnState::Idle;
        self.highlights.clear();
    }

    fn pick_up(&mut self, cell: Cell) -> Outcome {
        match self.board.get(cell) {
            Some(pc) if pc.owner == self.to_move => {}
            _ => return Outcome::Rejected,
        }

        let mut captures = longest_jumps(&self.board, self.to_move);
        if !captures.is_mandatory() {
            debug!(%cell, player = ?self.to_move, "piece selected");
            self.state = TurnState::Selected {
                origin: cell,
                pending: None,
            };
            return Outcome::Continue;
        }

        match captures.take_chains_from(cell) {
            Some(chains) => {
                debug!(
                    %cell,
                    player = ?self.to_move,
                    chains = chains.len(),
                    length = captures.max_len(),
                    "capture selected"
                );
                self.state = TurnState::Selected {
                    origin: cell,
                    pending: Some(chains),
                };
                Outcome::Continue
            }
            None => {
                debug!(%cell, "capture is mandatory with another piece");
                Outcome::Rejected
            }
        }
    }

    fn continue_capture(&mut self, origin: Cell, chains: Vec<CaptureChain>, cell: Cell) -> Outcome {
        let matching: Vec<CaptureChain> = chains
            .into_iter()
            .filter(|ch| ch.first().is_some_and(|s| s.landing == cell))
            .collect();

        // The captured cell is fixed by the landing: it is the single enemy on
        // the diagonal between the two squares.
        let Some(step) = matching.first().and_then(CaptureChain::first) else {
            // Jumps already made this turn stay on the board.
            debug!(%origin, %cell, "capture sequence abandoned");
            return Outcome::Rejected;
        };

        if !self.execute_jump(origin, step) {
            return Outcome::Rejected;
        }

        let remaining: Vec<CaptureChain> = matching.iter().filter_map(CaptureChain::rest).collect();
        if remaining.is_empty() {
            self.commit(step.landing);
            return Outcome::TurnEnd;
        }

        debug!(at = %step.landing, left = remaining.len(), "capture continues");
        self.state = TurnState::Selected {
            origin: step.landing,
            pending: Some(remaining),
        };
        Outcome::Continue
    }

    fn step_or_reselect(&mut self, origin: Cell, cell: Cell) -> Outcome {
        if self.highlights.contains(&cell) {
            let Some(piece) = self.board.get(origin) else {
                warn!(%origin, "selected cell lost its piece");
                return Outcome::Rejected;
            };
            if !is_simple_move_legal(&self.board, origin, cell) {
                debug!(%origin, %cell, "move refused");
                return Outcome::Rejected;
            }
            self.board.set(origin, None);
            self.board.set(cell, Some(piece));
            debug!(from = %origin, to = %cell, "piece moved");
            self.commit(cell);
            return Outcome::TurnEnd;
        }

        match self.board.get(cell) {
            Some(pc) if pc.owner == self.to_move => self.pick_up(cell),
            _ => Outcome::Rejected,
        }
    }

    fn execute_jump(&mut self, from: Cell, step: JumpStep) -> bool {
        let Some(piece) = self.board.get(from) else {
            warn!(%from, "jumping piece missing");
            return false;
        };
        self.board.set(step.captured, None);
        self.board.set(from, None);
        self.board.set(step.landing, Some(piece));
        debug!(%from, to = %step.landing, captured = %step.captured, "jump");
        true
    }

    /// Close the turn with the moving piece standing on `landing`.
    fn commit(&mut self, landing: Cell) {
        if self.board.promote(landing) {
            debug!(%landing, player = ?self.to_move, "promoted to king");
        }
        self.to_move = self.to_move.other();
        self.state = TurnState::Idle;
        debug!(next = ?self.to_move, "turn complete");
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
