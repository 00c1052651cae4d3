use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::error::{CheckersError, Result};
use crate::types::*;

/// The 8x8 grid. A bare container: it checks coordinates, never rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Men on the dark cells of rows 0-2 (Player One) and 5-7 (Player Two).
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for cell in CellSet::DARK {
            match cell.row() {
                0..=2 => b.set(cell, Some(Piece::man(Player::One))),
                5..=7 => b.set(cell, Some(Piece::man(Player::Two))),
                _ => {}
            }
        }
        b
    }

    /// Parse the text form written by `Display`.
    ///
    /// Eight non-empty lines, line `i` is row `i`. Each line holds eight
    /// cells (`.` empty, `x`/`X` Player One man/king, `o`/`O` Player Two
    /// man/king). Whitespace inside a line is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(CheckersError::InvalidDiagram {
                line: rows.len(),
                reason: format!("expected 8 rows, found {}", rows.len()),
            });
        }

        let mut b = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE as usize {
                return Err(CheckersError::InvalidDiagram {
                    line: row + 1,
                    reason: format!("expected 8 cells, found {}", symbols.len()),
                });
            }
            for (col, ch) in symbols.into_iter().enumerate() {
                let piece = match ch {
                    '.' | '-' => None,
                    other => Some(Piece::from_char(other).ok_or_else(|| {
                        CheckersError::InvalidDiagram {
                            line: row + 1,
                            reason: format!("unknown symbol '{other}'"),
                        }
                    })?),
                };
                let Some(cell) = Cell::new(row as i32, col as i32) else {
                    continue;
                };
                if piece.is_some() && !CellSet::DARK.contains(cell) {
                    return Err(CheckersError::PieceOnLightSquare(cell));
                }
                b.set(cell, piece);
            }
        }
        Ok(b)
    }

    /// True iff both coordinates are in `[0, 7]`.
    pub fn in_bounds(row: i32, col: i32) -> bool {
        in_bounds(row, col)
    }

    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.row() as usize][cell.col() as usize]
    }

    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        debug_assert!(
            piece.is_none() || CellSet::DARK.contains(cell),
            "pieces only live on dark cells, got {cell}"
        );
        self.cells[cell.row() as usize][cell.col() as usize] = piece;
    }

    /// Lookup by raw coordinates; off-board reads as an empty cell.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        Cell::new(row, col).and_then(|c| self.get(c))
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Every piece belonging to `player`, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| match self.get(cell) {
            Some(pc) if pc.owner == player => Some((cell, pc)),
            _ => None,
        })
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// Crown the piece on `cell` if it stands on its back rank.
    pub fn promote(&mut self, cell: Cell) -> bool {
        let Some(mut piece) = self.get(cell) else {
            return false;
        };
        let crowned = piece.promote_on(cell.row());
        if crowned {
            self.set(cell, Some(piece));
        }
        crowned
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for slot in row.iter() {
                let ch = slot.map(Piece::to_char).unwrap_or('.');
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
