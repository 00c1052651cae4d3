use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::turn::GameStatus;
use crate::types::{Cell, Player};

/// Everything a renderer needs to draw the current moment of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub to_move: Player,
    pub selected: Option<Cell>,
    pub highlights: Vec<Cell>,
    pub status: GameStatus,
}
