//! UTF-8 codec over raw byte strings.
//!
//! Lines are stored as bytes and may contain malformed sequences, so these
//! helpers walk the text with a lead-byte length table instead of relying on
//! `str`. Three index spaces meet here: byte offsets, character indices and
//! terminal display columns.

mod codec;
mod width;

pub use codec::{
    Sequences, byte_offset, char_length, character_length, decode_char, decode_codepoint,
    encode_codepoint, sequences, substring, to_string_lossy,
};
pub use width::{
    WidthMethod, char_index_to_terminal_column, char_width, display_width, sequence_width,
    terminal_column_to_char_index,
};
