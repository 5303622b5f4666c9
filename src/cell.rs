//! Terminal grid cells.

use bitflags::bitflags;

bitflags! {
    /// Per-cell rendering flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CellFlags: u8 {
        /// Swapped foreground/background.
        const INVERSE      = 0x01;
        /// Cell holds the cursor.
        const CURSOR       = 0x02;
        /// Cell is inside the selection.
        const SELECTED     = 0x04;
        /// Right half of a wide glyph; draw nothing.
        const CONTINUATION = 0x08;
    }
}

/// One terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// Create a cell holding `ch`.
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            flags: CellFlags::empty(),
        }
    }

    /// An empty (space) cell.
    #[must_use]
    pub const fn blank() -> Self {
        Self::new(' ')
    }

    /// Placeholder for the second column of a wide glyph.
    #[must_use]
    pub const fn continuation() -> Self {
        Self {
            ch: ' ',
            flags: CellFlags::CONTINUATION,
        }
    }

    /// Check if the cell is drawn in reverse video.
    #[must_use]
    pub const fn is_inverse(&self) -> bool {
        self.flags.contains(CellFlags::INVERSE)
    }

    /// Check if this is the right half of a wide glyph.
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.flags.contains(CellFlags::CONTINUATION)
    }
}

/// Fixed-size grid of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a blank grid. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width * height],
        }
    }

    /// Get grid dimensions as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a cell.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Get a mutable cell.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            self.cells.get_mut(y * self.width + x)
        } else {
            None
        }
    }

    /// Cells of one row.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Overwrite a cell, ignoring out-of-bounds writes.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Add flags to a cell, ignoring out-of-bounds positions.
    pub fn add_flags(&mut self, x: usize, y: usize, flags: CellFlags) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.flags |= flags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_bounds() {
        let mut grid = CellGrid::new(3, 2);
        assert_eq!(grid.size(), (3, 2));
        assert!(grid.get(2, 1).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 2).is_none());
        grid.set(5, 5, Cell::new('x'));
        grid.set(1, 1, Cell::new('x'));
        assert_eq!(grid.get(1, 1).map(|c| c.ch), Some('x'));
        assert_eq!(grid.row(1).map(<[Cell]>::len), Some(3));
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_zero_size_grid_clamped() {
        assert_eq!(CellGrid::new(0, 0).size(), (1, 1));
    }

    #[test]
    fn test_flags() {
        let mut grid = CellGrid::new(2, 1);
        grid.add_flags(0, 0, CellFlags::CURSOR | CellFlags::INVERSE);
        let cell = grid.get(0, 0).copied().unwrap_or_default();
        assert!(cell.is_inverse());
        assert!(cell.flags.contains(CellFlags::CURSOR));
        assert!(!cell.is_continuation());
        assert!(Cell::continuation().is_continuation());
    }
}
