//! Fuzz target for the UTF-8 codec.
//!
//! Arbitrary bytes must walk, slice, decode and render without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linebuffer::Document;
use linebuffer::utf8::{
    WidthMethod, character_length, decode_char, decode_codepoint, display_width, sequences,
    substring, terminal_column_to_char_index,
};

fuzz_target!(|data: &[u8]| {
    let count = character_length(data);
    assert_eq!(sequences(data).count(), count);
    assert!(substring(data, count / 2, count).len() <= data.len());

    for seq in sequences(data) {
        let _ = decode_codepoint(seq);
        let _ = decode_char(seq);
    }

    let width = display_width(data, WidthMethod::WcWidth);
    assert!(terminal_column_to_char_index(data, width + 1, WidthMethod::WcWidth) <= count);

    let mut doc = Document::from_bytes(data);
    let frame = doc.render_frame(8, 16);
    let _ = frame.to_grid();
});
