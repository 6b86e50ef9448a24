use super::grid::{Cell, Grid};

/// Cells currently in use on the active search path.
///
/// One mask is allocated per top-level search call and sized to its grid.
/// Marking is undone on backtrack, so after a complete search the mask is
/// empty again.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    cols: usize,
    bits: Vec<u64>,
    marked: usize,
}

impl VisitedMask {
    /// Allocates an all-clear mask covering every cell of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            bits: vec![0; grid.len().div_ceil(64)],
            marked: 0,
        }
    }

    /// Marks `cell`. Returns `false` if it was already marked.
    pub fn mark(&mut self, cell: Cell) -> bool {
        let (word, bit) = self.slot(cell);
        if self.bits[word] & bit != 0 {
            return false;
        }
        self.bits[word] |= bit;
        self.marked += 1;
        true
    }

    /// Clears `cell`. Returns `false` if it was not marked.
    pub fn unmark(&mut self, cell: Cell) -> bool {
        let (word, bit) = self.slot(cell);
        if self.bits[word] & bit == 0 {
            return false;
        }
        self.bits[word] &= !bit;
        self.marked -= 1;
        true
    }

    pub fn is_marked(&self, cell: Cell) -> bool {
        let (word, bit) = self.slot(cell);
        self.bits[word] & bit != 0
    }

    /// Number of cells currently marked.
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    fn slot(&self, cell: Cell) -> (usize, u64) {
        let index = cell.row * self.cols + cell.col;
        (index / 64, 1u64 << (index % 64))
    }
}
