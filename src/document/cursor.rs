//! Cursor and document positions.

/// A point in the document: line index plus character column.
///
/// Ordering is lexicographic, line first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line index (0-indexed).
    pub line: usize,
    /// Character column (0-indexed).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// The editing cursor.
///
/// `line` indexes the document's line vector; `col` is a character index
/// in `[0, len_chars(line)]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed).
    pub line: usize,
    /// Character column (0-indexed).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at the beginning of the document.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Position of the cursor.
    #[must_use]
    pub const fn position(self) -> Position {
        Position::new(self.line, self.col)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.position()
    }
}

/// Direction for single-step cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One character back, wrapping to the previous line's end.
    Left,
    /// One character forward, wrapping to the next line's start.
    Right,
    /// Previous line, column kept or clamped.
    Up,
    /// Next line, column kept or clamped.
    Down,
    /// Start of the line.
    Home,
    /// End of the line.
    End,
}
