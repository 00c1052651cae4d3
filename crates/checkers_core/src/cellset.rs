//! Compact set of board cells.
//!
//! A `CellSet` is a 64-bit integer where each bit represents one cell of the
//! board. Bit 0 = (0, 0), bit 7 = (0, 7), ..., bit 63 = (7, 7).
//!
//! The jump search carries one of these per recursive branch as its used-set,
//! so it is `Copy` and every insertion returns a new value.

use crate::types::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellSet(pub u64);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);

    /// Every dark cell, i.e. every cell a piece may stand on.
    pub const DARK: CellSet = CellSet(0xAA55_AA55_AA55_AA55);

    #[inline(always)]
    pub fn from_cell(cell: Cell) -> Self {
        CellSet(1u64 << cell.index())
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn contains(self, cell: Cell) -> bool {
        (self.0 & (1u64 << cell.index())) != 0
    }

    /// Copy of this set with `cell` added.
    #[inline(always)]
    #[must_use]
    pub fn with(self, cell: Cell) -> Self {
        CellSet(self.0 | (1u64 << cell.index()))
    }

    #[inline(always)]
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= 1u64 << cell.index();
    }

    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Remove and return the lowest cell in the set.
    #[inline(always)]
    pub fn pop_lowest(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Cell::from_index(idx)
    }
}

/// Iterator over the cells in the set, row-major.
impl Iterator for CellSet {
    type Item = Cell;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lowest()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}
