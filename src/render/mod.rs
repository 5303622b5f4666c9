//! Render frames: what the shell draws after each command.
//!
//! A [`Frame`] describes the viewport as plain data: the visible slice of
//! each line, where the cursor goes, and which columns are selected. The
//! shell can draw it directly or rasterise it with [`Frame::to_grid`].
//!
//! # Examples
//!
//! ```
//! use linebuffer::Document;
//!
//! let mut doc = Document::from_text("first\nsecond\nthird");
//! doc.move_cursor_to(2, 3);
//! let frame = doc.render_frame(2, 4);
//!
//! assert_eq!(frame.to_string(), "seco\nthir");
//! assert_eq!(frame.cursor().row, 1);
//! assert_eq!(frame.cursor().col, 3);
//! assert_eq!(frame.cursor().glyph, 'r');
//! ```

use crate::cell::{Cell, CellFlags, CellGrid};
use crate::document::{Document, Line, SelectionRegion, Viewport};
use crate::utf8::{self, WidthMethod};
use std::fmt;
use std::ops::Range;

/// Where and what to draw in reverse video for the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorCell {
    /// Frame row.
    pub row: usize,
    /// Frame column.
    pub col: usize,
    /// Character under the cursor, or a space at the end of a line.
    pub glyph: char,
}

/// One visible row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameRow {
    /// Document line shown on this row; `None` past the end of the document.
    pub line: Option<usize>,
    /// Visible text, starting at frame column 0.
    pub text: String,
    /// Selected frame columns on this row.
    pub selection: Option<Range<usize>>,
}

/// Render description of the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<FrameRow>,
    cursor: CursorCell,
    width: usize,
    width_method: WidthMethod,
}

impl Frame {
    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    /// Get a row.
    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&FrameRow> {
        self.rows.get(idx)
    }

    /// Cursor placement.
    #[must_use]
    pub fn cursor(&self) -> CursorCell {
        self.cursor
    }

    /// Get frame dimensions as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.rows.len())
    }

    /// Rasterise into a cell grid with cursor and selection flags applied.
    #[must_use]
    pub fn to_grid(&self) -> CellGrid {
        let mut grid = CellGrid::new(self.width, self.rows.len());

        for (y, row) in self.rows.iter().enumerate() {
            let mut x = 0;
            for ch in row.text.chars() {
                let w = utf8::char_width(ch, self.width_method);
                if w == 0 {
                    continue;
                }
                if x + w > self.width {
                    break;
                }
                grid.set(x, y, Cell::new(ch));
                for extra in 1..w {
                    grid.set(x + extra, y, Cell::continuation());
                }
                x += w;
            }

            if let Some(span) = &row.selection {
                for x in span.clone() {
                    grid.add_flags(x, y, CellFlags::SELECTED | CellFlags::INVERSE);
                }
            }
        }

        grid.add_flags(
            self.cursor.col,
            self.cursor.row,
            CellFlags::CURSOR | CellFlags::INVERSE,
        );
        grid
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row.text.trim_end_matches(' '))?;
        }
        Ok(())
    }
}

impl Document {
    /// Produce the frame for a `rows` x `cols` viewport.
    ///
    /// Resizes the viewport and re-establishes cursor visibility first; no
    /// other state changes.
    pub fn render_frame(&mut self, rows: usize, cols: usize) -> Frame {
        self.resize(rows, cols);

        let viewport = self.viewport();
        let method = self.width_method();
        let region = self.selection().filter(|region| !region.is_empty());

        let rows = (viewport.top..viewport.top + viewport.rows())
            .map(|idx| match self.line(idx) {
                Some(line) => FrameRow {
                    line: Some(idx),
                    text: visible_text(line, viewport, method),
                    selection: region
                        .and_then(|region| selection_span(&region, idx, line, viewport, method)),
                },
                None => FrameRow::default(),
            })
            .collect();

        Frame {
            rows,
            cursor: self.cursor_cell(viewport),
            width: viewport.cols(),
            width_method: method,
        }
    }

    fn cursor_cell(&self, viewport: Viewport) -> CursorCell {
        let cursor = self.cursor();
        let column = self.cursor_terminal_column();
        let right = viewport.left + viewport.cols();
        let glyph = self
            .current_line()
            .char_at(cursor.col)
            .filter(|&ch| {
                let w = utf8::char_width(ch, self.width_method());
                w > 0 && column + w <= right
            })
            .unwrap_or(' ');
        CursorCell {
            row: cursor.line - viewport.top,
            col: column - viewport.left,
            glyph,
        }
    }
}

/// Part of `line` inside the viewport's columns.
///
/// Wide glyphs cut by either edge show as blanks for their visible half.
fn visible_text(line: &Line, viewport: Viewport, method: WidthMethod) -> String {
    let left = viewport.left;
    let right = left + viewport.cols();
    let mut text = String::new();
    let mut column = 0;

    for seq in utf8::sequences(line.as_bytes()) {
        if column >= right {
            break;
        }
        let ch = utf8::decode_char(seq);
        let w = utf8::char_width(ch, method);
        if w == 0 {
            // Combining marks ride on the previous visible glyph
            if !ch.is_control() && column > left && !text.is_empty() {
                text.push(ch);
            }
            continue;
        }
        let end = column + w;
        if column >= left && end <= right {
            text.push(ch);
        } else if end > left {
            let visible = end.min(right) - column.max(left);
            text.extend(std::iter::repeat_n(' ', visible));
        }
        column = end;
    }
    text
}

/// Selected frame columns of line `idx`, clipped to the viewport.
fn selection_span(
    region: &SelectionRegion,
    idx: usize,
    line: &Line,
    viewport: Viewport,
    method: WidthMethod,
) -> Option<Range<usize>> {
    let chars = region.columns_on_line(idx, line.len_chars())?;
    let start = line.column_of(chars.start, method).max(viewport.left);
    let end = line
        .column_of(chars.end, method)
        .min(viewport.left + viewport.cols());
    (start < end).then(|| start - viewport.left..end - viewport.left)
}
