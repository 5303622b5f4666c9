//! A single line of text stored as UTF-8 bytes.

use crate::utf8::{self, WidthMethod};
use std::fmt;

/// One line of a [`Document`](crate::Document).
///
/// Holds raw bytes so that text loaded from disk survives untouched even when
/// it is not valid UTF-8. Every index taken by the methods here is a
/// character index; out-of-range indices are clamped to the line end.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from raw bytes. Newline bytes are dropped.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        bytes.retain(|&b| b != b'\n');
        Self { bytes }
    }

    /// Raw bytes of the line.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        utf8::character_length(&self.bytes)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Width in terminal cells.
    #[must_use]
    pub fn display_width(&self, method: WidthMethod) -> usize {
        utf8::display_width(&self.bytes, method)
    }

    /// Byte slice covering `len` characters from `start`.
    #[must_use]
    pub fn substring(&self, start: usize, len: usize) -> &[u8] {
        utf8::substring(&self.bytes, start, len)
    }

    /// Terminal column where character `col` starts.
    #[must_use]
    pub fn column_of(&self, col: usize, method: WidthMethod) -> usize {
        utf8::char_index_to_terminal_column(&self.bytes, col, method)
    }

    /// Character index under terminal `column`.
    #[must_use]
    pub fn char_at_column(&self, column: usize, method: WidthMethod) -> usize {
        utf8::terminal_column_to_char_index(&self.bytes, column, method)
    }

    /// Decoded character at `col`, if any.
    #[must_use]
    pub fn char_at(&self, col: usize) -> Option<char> {
        utf8::sequences(&self.bytes).nth(col).map(utf8::decode_char)
    }

    /// Splice `ch` in before character `col`.
    pub(crate) fn insert_char(&mut self, col: usize, ch: char) {
        let at = utf8::byte_offset(&self.bytes, col);
        let encoded = utf8::encode_codepoint(u32::from(ch));
        self.bytes.splice(at..at, encoded);
    }

    /// Remove character `col`. Returns `false` if `col` is past the end.
    pub(crate) fn remove_char(&mut self, col: usize) -> bool {
        let start = utf8::byte_offset(&self.bytes, col);
        if start >= self.bytes.len() {
            return false;
        }
        let end = start + utf8::byte_offset(&self.bytes[start..], 1);
        self.bytes.drain(start..end);
        true
    }

    /// Split at character `col`, keeping the head and returning the tail.
    pub(crate) fn split_off(&mut self, col: usize) -> Self {
        let at = utf8::byte_offset(&self.bytes, col);
        Self {
            bytes: self.bytes.split_off(at),
        }
    }

    /// Append another line's content.
    pub(crate) fn append(&mut self, other: &Self) {
        self.bytes.extend_from_slice(&other.bytes);
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&utf8::to_string_lossy(&self.bytes), f)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&utf8::to_string_lossy(&self.bytes))
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
