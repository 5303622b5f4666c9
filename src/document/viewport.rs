//! Scroll offsets and the visible extent.

use tracing::trace;

/// Visible window into the document.
///
/// `top` is a line index and `left` a terminal column. The extent is never
/// zero; zero rows or columns are clamped to one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub left: usize,
    rows: usize,
    cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl Viewport {
    /// Viewport at the origin with the given extent.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            top: 0,
            left: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Visible rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Visible terminal columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Change the visible extent, keeping the scroll offsets.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Check whether a line/terminal-column cell is inside the window.
    #[must_use]
    pub fn contains(&self, line: usize, column: usize) -> bool {
        (self.top..self.top + self.rows).contains(&line)
            && (self.left..self.left + self.cols).contains(&column)
    }

    /// Scroll the minimum amount needed to bring the cell into view.
    ///
    /// Returns `true` if an offset changed. Calling it again with the same
    /// arguments is a no-op.
    pub fn scroll_to(&mut self, line: usize, column: usize) -> bool {
        let before = (self.top, self.left);

        if line < self.top {
            self.top = line;
        } else if line >= self.top + self.rows {
            self.top = line + 1 - self.rows;
        }

        if column < self.left {
            self.left = column;
        } else if column >= self.left + self.cols {
            self.left = column + 1 - self.cols;
        }

        let changed = before != (self.top, self.left);
        if changed {
            trace!(top = self.top, left = self.left, "viewport scrolled");
        }
        changed
    }
}
