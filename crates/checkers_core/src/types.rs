use serde::{Deserialize, Serialize};

use crate::error::CheckersError;

pub const BOARD_SIZE: i8 = 8;

/// The four diagonal directions as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a forward step. Player One advances toward row 7.
    pub fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Row on which this player's men are crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::One => 7,
            Player::Two => 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub king: bool,
}

impl Piece {
    pub fn man(owner: Player) -> Self {
        Self { owner, king: false }
    }

    pub fn king(owner: Player) -> Self {
        Self { owner, king: true }
    }

    /// Diagonals this piece may capture along. Men only capture forward.
    pub fn capture_directions(self) -> &'static [(i8, i8)] {
        match (self.king, self.owner) {
            (true, _) => &DIAGONALS,
            (false, Player::One) => &[(1, -1), (1, 1)],
            (false, Player::Two) => &[(-1, -1), (-1, 1)],
        }
    }

    /// Crown the piece if `row` is its owner's back rank. Returns true only
    /// when the piece changed.
    pub fn promote_on(&mut self, row: u8) -> bool {
        if !self.king && row == self.owner.promotion_row() {
            self.king = true;
            return true;
        }
        false
    }

    pub fn to_char(self) -> char {
        match (self.owner, self.king) {
            (Player::One, false) => 'x',
            (Player::One, true) => 'X',
            (Player::Two, false) => 'o',
            (Player::Two, true) => 'O',
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        match ch {
            'x' => Some(Piece::man(Player::One)),
            'X' => Some(Piece::king(Player::One)),
            'o' => Some(Piece::man(Player::Two)),
            'O' => Some(Piece::king(Player::Two)),
            _ => None,
        }
    }
}

/// A board coordinate, always inside the 8x8 grid.
///
/// Ordering is row-major, which is the order pieces are scanned in and the
/// order capture starters are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Build a cell from raw coordinates, `None` when off the board.
    pub fn new(row: i32, col: i32) -> Option<Cell> {
        if in_bounds(row, col) {
            Some(Cell {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Pieces live on cells where `row + col` is even.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Index 0..63, row-major.
    pub fn index(self) -> u8 {
        self.row * BOARD_SIZE as u8 + self.col
    }

    pub fn from_index(idx: u8) -> Option<Cell> {
        Cell::new((idx / BOARD_SIZE as u8) as i32, (idx % BOARD_SIZE as u8) as i32)
    }

    /// The cell `steps` cells away along `(dr, dc)`, if still on the board.
    pub fn offset(self, (dr, dc): (i8, i8), steps: i8) -> Option<Cell> {
        Cell::new(
            self.row as i32 + (dr as i32) * (steps as i32),
            self.col as i32 + (dc as i32) * (steps as i32),
        )
    }

    /// Iterate every cell of the board, row-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64u8).filter_map(Cell::from_index)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = CheckersError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Cell::new(row as i32, col as i32)
            .ok_or_else(|| CheckersError::InvalidCell(format!("{row} {col}")))
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl std::str::FromStr for Cell {
    type Err = CheckersError;

    /// Parse `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CheckersError::InvalidCell(s.trim().to_string());
        let mut parts = s
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|p| !p.is_empty());
        let row: i32 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let col: i32 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Cell::new(row, col).ok_or_else(invalid)
    }
}

/// True iff both coordinates are in `[0, 7]`.
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
