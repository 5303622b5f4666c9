//! Selection region and anchor tracking.

use crate::document::cursor::Position;
use std::ops::Range;

/// Normalized selection from the earlier to the later point.
///
/// `start` is inclusive, `end` exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRegion {
    pub start: Position,
    pub end: Position,
}

impl SelectionRegion {
    /// Region between two points in either order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a position is within the selection.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Selected character columns on `line`, given that line's length.
    ///
    /// Returns `None` when nothing on the line is selected.
    #[must_use]
    pub fn columns_on_line(&self, line: usize, len_chars: usize) -> Option<Range<usize>> {
        if line < self.start.line || line > self.end.line {
            return None;
        }
        let from = if line == self.start.line {
            self.start.col
        } else {
            0
        };
        let to = if line == self.end.line {
            self.end.col
        } else {
            len_chars
        };
        let to = to.min(len_chars);
        (from < to).then_some(from..to)
    }
}

/// Structural edit applied to the document, used to keep the anchor
/// attached to the text it marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineEdit {
    /// One character inserted at a position.
    Insert(Position),
    /// One character removed at a position.
    Remove(Position),
    /// Line split at a position; the tail moved to the next line.
    Split(Position),
    /// Line `line + 1` appended onto `line`, which had `head_len` characters.
    Join { line: usize, head_len: usize },
}

impl LineEdit {
    /// Where `anchor` ends up after this edit.
    pub(crate) fn shift(self, anchor: Position) -> Position {
        match self {
            Self::Insert(at) if anchor.line == at.line && anchor.col > at.col => {
                Position::new(anchor.line, anchor.col + 1)
            }
            Self::Remove(at) if anchor.line == at.line && anchor.col > at.col => {
                Position::new(anchor.line, anchor.col - 1)
            }
            Self::Split(at) if anchor.line == at.line && anchor.col > at.col => {
                Position::new(anchor.line + 1, anchor.col - at.col)
            }
            Self::Split(at) if anchor.line > at.line => {
                Position::new(anchor.line + 1, anchor.col)
            }
            Self::Join { line, head_len } if anchor.line == line + 1 => {
                Position::new(line, head_len + anchor.col)
            }
            Self::Join { line, .. } if anchor.line > line + 1 => {
                Position::new(anchor.line - 1, anchor.col)
            }
            _ => anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_normalizes() {
        let a = Position::new(3, 1);
        let b = Position::new(1, 4);
        let region = SelectionRegion::new(a, b);
        assert_eq!(region.start, b);
        assert_eq!(region.end, a);
        assert_eq!(region, SelectionRegion::new(b, a));
        assert!(!region.is_empty());
    }

    #[test]
    fn test_region_contains() {
        let region = SelectionRegion::new(Position::new(0, 2), Position::new(1, 1));
        assert!(region.contains(Position::new(0, 2)));
        assert!(region.contains(Position::new(0, 90)));
        assert!(region.contains(Position::new(1, 0)));
        assert!(!region.contains(Position::new(1, 1)));
        assert!(!region.contains(Position::new(0, 1)));
    }

    #[test]
    fn test_columns_on_line() {
        let region = SelectionRegion::new(Position::new(0, 2), Position::new(2, 3));
        assert_eq!(region.columns_on_line(0, 5), Some(2..5));
        assert_eq!(region.columns_on_line(1, 4), Some(0..4));
        assert_eq!(region.columns_on_line(1, 0), None);
        assert_eq!(region.columns_on_line(2, 10), Some(0..3));
        assert_eq!(region.columns_on_line(3, 10), None);
    }

    #[test]
    fn test_single_line_columns() {
        let region = SelectionRegion::new(Position::new(4, 6), Position::new(4, 1));
        assert_eq!(region.columns_on_line(4, 8), Some(1..6));
        let empty = SelectionRegion::new(Position::new(4, 1), Position::new(4, 1));
        assert!(empty.is_empty());
        assert_eq!(empty.columns_on_line(4, 8), None);
    }

    #[test]
    fn test_anchor_follows_split_and_join() {
        let anchor = Position::new(1, 5);
        let split = LineEdit::Split(Position::new(1, 2)).shift(anchor);
        assert_eq!(split, Position::new(2, 3));
        let joined = LineEdit::Join {
            line: 1,
            head_len: 2,
        }
        .shift(split);
        assert_eq!(joined, anchor);
    }

    #[test]
    fn test_anchor_before_edit_is_untouched() {
        let anchor = Position::new(0, 1);
        assert_eq!(LineEdit::Insert(Position::new(0, 1)).shift(anchor), anchor);
        assert_eq!(LineEdit::Remove(Position::new(0, 3)).shift(anchor), anchor);
        assert_eq!(LineEdit::Split(Position::new(2, 0)).shift(anchor), anchor);
        assert_eq!(
            LineEdit::Join {
                line: 4,
                head_len: 1
            }
            .shift(anchor),
            anchor
        );
    }

    #[test]
    fn test_anchor_on_later_lines_shifts_rows() {
        let anchor = Position::new(5, 2);
        assert_eq!(
            LineEdit::Split(Position::new(1, 0)).shift(anchor),
            Position::new(6, 2)
        );
        assert_eq!(
            LineEdit::Join {
                line: 1,
                head_len: 7
            }
            .shift(anchor),
            Position::new(4, 2)
        );
    }
}
