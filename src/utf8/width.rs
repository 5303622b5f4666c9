//! Display width and terminal-column mapping.

use crate::utf8::codec::{decode_char, sequences};
use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Display width of a character in terminal cells.
///
/// Control characters occupy no cells. U+FFFD always takes one cell in
/// either method, since it stands in for malformed bytes.
#[inline]
#[must_use]
pub fn char_width(c: char, method: WidthMethod) -> usize {
    // Fast path: printable ASCII is always one cell
    if (' '..='~').contains(&c) {
        return 1;
    }
    if c.is_control() {
        return 0;
    }
    if c == char::REPLACEMENT_CHARACTER {
        return 1;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Display width of one character sequence as produced by
/// [`sequences`](crate::utf8::sequences).
///
/// Malformed sequences are drawn as U+FFFD and take one cell.
#[must_use]
pub fn sequence_width(seq: &[u8], method: WidthMethod) -> usize {
    char_width(decode_char(seq), method)
}

/// Display width of a whole text in terminal cells.
#[must_use]
pub fn display_width(text: &[u8], method: WidthMethod) -> usize {
    sequences(text).map(|seq| sequence_width(seq, method)).sum()
}

/// Character index occupying terminal `column`.
///
/// A column in the right half of a wide character maps to that character's
/// index. Columns past the end of the text map to the character count.
#[must_use]
pub fn terminal_column_to_char_index(text: &[u8], column: usize, method: WidthMethod) -> usize {
    let mut cells = 0;
    let mut index = 0;
    for seq in sequences(text) {
        if cells >= column {
            break;
        }
        cells += sequence_width(seq, method);
        index += 1;
    }
    if cells > column { index - 1 } else { index }
}

/// Terminal column at which character `char_idx` starts.
#[must_use]
pub fn char_index_to_terminal_column(text: &[u8], char_idx: usize, method: WidthMethod) -> usize {
    sequences(text)
        .take(char_idx)
        .map(|seq| sequence_width(seq, method))
        .sum()
}
