//! Line-oriented document with cursor, selection anchor and viewport.
//!
//! [`Document`] owns a non-empty vector of [`Line`]s. The cursor is an index
//! into that vector plus a character column, and every operation leaves it
//! within bounds. After each edit or movement the viewport is scrolled just
//! enough to keep the cursor visible, so the shell never needs an explicit
//! "follow cursor" step.
//!
//! # Examples
//!
//! ```
//! use linebuffer::Document;
//!
//! let mut doc = Document::new();
//! doc.insert_text("Hi\nthere");
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.cursor().col, 5);
//!
//! doc.move_cursor_home();
//! doc.delete_backward(); // joins "there" onto "Hi"
//! assert_eq!(doc.text(), "Hithere");
//! assert_eq!(doc.cursor().col, 2);
//! ```

mod command;
mod cursor;
mod line;
mod options;
mod selection;
mod viewport;

pub use command::Command;
pub use cursor::{Cursor, Direction, Position};
pub use line::Line;
pub use options::DocumentOptions;
pub use selection::SelectionRegion;
pub use viewport::Viewport;

use crate::error::{Error, Result};
use crate::utf8::WidthMethod;
use selection::LineEdit;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Editable text document.
#[derive(Clone, Debug)]
pub struct Document {
    lines: Vec<Line>,
    cursor: Cursor,
    anchor: Option<Position>,
    viewport: Viewport,
    width_method: WidthMethod,
}

impl Default for Document {
    fn default() -> Self {
        Self::with_options(DocumentOptions::default())
    }
}

impl Document {
    /// Create a document holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with custom options.
    #[must_use]
    pub fn with_options(options: DocumentOptions) -> Self {
        Self::from_lines(vec![Line::new()], options)
    }

    /// Create a document from newline-delimited text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a document from newline-delimited bytes.
    ///
    /// A single trailing `\n` does not start another line. Empty input
    /// yields one empty line.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_options(bytes, DocumentOptions::default())
    }

    /// Create a document from newline-delimited bytes with custom options.
    #[must_use]
    pub fn from_bytes_with_options(bytes: &[u8], options: DocumentOptions) -> Self {
        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let lines: Vec<Line> = body.split(|&b| b == b'\n').map(Line::from_bytes).collect();
        debug!(lines = lines.len(), bytes = bytes.len(), "document loaded");
        Self::from_lines(lines, options)
    }

    fn from_lines(mut lines: Vec<Line>, options: DocumentOptions) -> Self {
        if lines.is_empty() {
            lines.push(Line::new());
        }
        Self {
            lines,
            cursor: Cursor::start(),
            anchor: None,
            viewport: Viewport::new(options.rows, options.cols),
            width_method: options.width_method,
        }
    }

    /// Read a whole source into a document.
    pub fn try_from_reader(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Read a source, falling back to an empty document if it fails.
    #[must_use]
    pub fn from_reader(reader: impl Read) -> Self {
        Self::try_from_reader(reader).unwrap_or_else(|err| {
            warn!(error = %err, "source unreadable, starting with an empty document");
            Self::new()
        })
    }

    /// Load a file.
    pub fn try_open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Path {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Load a file, falling back to an empty document if it cannot be read.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::try_open(path).unwrap_or_else(|err| {
            warn!(error = %err, "file unreadable, starting with an empty document");
            Self::new()
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of lines (always at least one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// All lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line under the cursor.
    #[must_use]
    pub fn current_line(&self) -> &Line {
        &self.lines[self.cursor.line]
    }

    /// Get the current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Terminal column at which the cursor is drawn.
    #[must_use]
    pub fn cursor_terminal_column(&self) -> usize {
        self.current_line()
            .column_of(self.cursor.col, self.width_method)
    }

    /// Selection anchor, if one is set.
    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// Current scroll offsets and extent.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width method used for column calculations.
    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    /// Full content joined with `\n`, raw bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(line.as_bytes());
        }
        out
    }

    /// Full content joined with `\n`, malformed bytes replaced.
    #[must_use]
    pub fn text(&self) -> String {
        crate::utf8::to_string_lossy(&self.to_bytes())
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Insert a character at the cursor.
    ///
    /// `'\n'` splits the line: the text from the cursor onward moves to a
    /// new line below and the cursor goes to its start.
    pub fn insert_character(&mut self, ch: char) {
        let at = self.cursor.position();
        let Some(line) = self.lines.get_mut(at.line) else {
            return;
        };

        if ch == '\n' {
            let tail = line.split_off(at.col);
            self.lines.insert(at.line + 1, tail);
            self.cursor = Cursor {
                line: at.line + 1,
                col: 0,
            };
            debug!(line = at.line, col = at.col, "line split");
            self.finish_edit(LineEdit::Split(at));
        } else {
            line.insert_char(at.col, ch);
            self.cursor.col += 1;
            self.finish_edit(LineEdit::Insert(at));
        }
    }

    /// Insert every character of `text` in order.
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_character(ch);
        }
    }

    /// Delete the character under the cursor.
    ///
    /// At the end of a line the next line is joined onto it; at the end of
    /// the document nothing happens.
    pub fn delete_forward(&mut self) {
        let at = self.cursor.position();
        let Some(len) = self.lines.get(at.line).map(Line::len_chars) else {
            return;
        };

        if at.col >= len {
            if at.line + 1 >= self.lines.len() {
                return;
            }
            let next = self.lines.remove(at.line + 1);
            self.lines[at.line].append(&next);
            debug!(line = at.line, "line joined with next");
            self.finish_edit(LineEdit::Join {
                line: at.line,
                head_len: len,
            });
        } else {
            self.lines[at.line].remove_char(at.col);
            self.finish_edit(LineEdit::Remove(at));
        }
    }

    /// Delete the character before the cursor.
    ///
    /// At column 0 the current line is joined onto the previous one and the
    /// cursor lands where the two met; at the start of the document nothing
    /// happens.
    pub fn delete_backward(&mut self) {
        let at = self.cursor.position();
        let Some(len) = self.lines.get(at.line).map(Line::len_chars) else {
            return;
        };

        if at.col == 0 {
            if at.line == 0 {
                return;
            }
            let prev = at.line - 1;
            let head_len = self.lines[prev].len_chars();
            let current = self.lines.remove(at.line);
            self.lines[prev].append(&current);
            self.cursor = Cursor {
                line: prev,
                col: head_len,
            };
            debug!(line = prev, "line joined with previous");
            self.finish_edit(LineEdit::Join {
                line: prev,
                head_len,
            });
        } else {
            let col = at.col.min(len) - 1;
            self.cursor.col = col;
            self.lines[at.line].remove_char(col);
            self.finish_edit(LineEdit::Remove(Position::new(at.line, col)));
        }
    }

    fn finish_edit(&mut self, edit: LineEdit) {
        self.anchor = self.anchor.map(|anchor| self.clamped(edit.shift(anchor)));
        self.cursor = {
            let pos = self.clamped(self.cursor.position());
            Cursor {
                line: pos.line,
                col: pos.col,
            }
        };
        self.scroll_to_cursor();
    }

    fn clamped(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let col = pos.col.min(self.lines[line].len_chars());
        Position::new(line, col)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move the cursor one step.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_cursor_left(),
            Direction::Right => self.move_cursor_right(),
            Direction::Up => self.move_cursor_up(),
            Direction::Down => self.move_cursor_down(),
            Direction::Home => self.move_cursor_home(),
            Direction::End => self.move_cursor_end(),
        }
    }

    /// Move cursor left, wrapping to the end of the previous line.
    pub fn move_cursor_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.current_line().len_chars();
        }
        self.scroll_to_cursor();
    }

    /// Move cursor right, wrapping to the start of the next line.
    pub fn move_cursor_right(&mut self) {
        if self.cursor.col < self.current_line().len_chars() {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
        self.scroll_to_cursor();
    }

    /// Move cursor up.
    pub fn move_cursor_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.current_line().len_chars());
        }
        self.scroll_to_cursor();
    }

    /// Move cursor down.
    pub fn move_cursor_down(&mut self) {
        if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.current_line().len_chars());
        }
        self.scroll_to_cursor();
    }

    /// Move cursor to start of line.
    pub fn move_cursor_home(&mut self) {
        self.cursor.col = 0;
        self.scroll_to_cursor();
    }

    /// Move cursor to end of line.
    pub fn move_cursor_end(&mut self) {
        self.cursor.col = self.current_line().len_chars();
        self.scroll_to_cursor();
    }

    /// Move to a specific line and column, clamped into the document.
    pub fn move_cursor_to(&mut self, line: usize, col: usize) {
        let pos = self.clamped(Position::new(line, col));
        self.cursor = Cursor {
            line: pos.line,
            col: pos.col,
        };
        self.scroll_to_cursor();
    }

    /// Move to the character under a viewport-relative screen cell.
    pub fn move_cursor_to_screen(&mut self, row: usize, col: usize) {
        let pos = self.screen_to_position(row, col);
        self.move_cursor_to(pos.line, pos.col);
    }

    /// Document position under a viewport-relative screen cell, clamped.
    #[must_use]
    pub fn screen_to_position(&self, row: usize, col: usize) -> Position {
        let line = (self.viewport.top + row).min(self.lines.len() - 1);
        let col = self.lines[line].char_at_column(self.viewport.left + col, self.width_method);
        self.clamped(Position::new(line, col))
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Drop the selection anchor at the cursor.
    pub fn set_selection_anchor(&mut self) {
        self.anchor = Some(self.cursor.position());
    }

    /// Drop the selection anchor at a position, clamped into the document.
    pub fn set_selection_anchor_at(&mut self, line: usize, col: usize) {
        self.anchor = Some(self.clamped(Position::new(line, col)));
    }

    /// Discard the selection anchor. The cursor does not move.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Region between the anchor and the cursor.
    #[must_use]
    pub fn selection(&self) -> Option<SelectionRegion> {
        self.anchor
            .map(|anchor| SelectionRegion::new(anchor, self.cursor.position()))
    }

    /// Bytes inside the selection, lines joined with `\n`.
    #[must_use]
    pub fn selected_text(&self) -> Option<Vec<u8>> {
        let region = self.selection()?;
        let mut out = Vec::new();
        for idx in region.start.line..=region.end.line {
            let line = &self.lines[idx];
            if idx > region.start.line {
                out.push(b'\n');
            }
            if let Some(cols) = region.columns_on_line(idx, line.len_chars()) {
                out.extend_from_slice(line.substring(cols.start, cols.len()));
            }
        }
        Some(out)
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    /// Change the visible extent and keep the cursor in view.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport.resize(rows, cols);
        self.scroll_to_cursor();
    }

    /// Scroll the viewport so the cursor is visible.
    ///
    /// Returns `true` if the offsets changed.
    pub fn scroll_to_cursor(&mut self) -> bool {
        let column = self.cursor_terminal_column();
        self.viewport.scroll_to(self.cursor.line, column)
    }
}
