//! Byte-level UTF-8 walking, decoding and encoding.
//!
//! Everything here works on raw `&[u8]` and never validates continuation
//! bytes. A malformed lead byte still claims a length from [`char_length`],
//! so a walk over arbitrary bytes always terminates and always produces the
//! same character boundaries.

/// Sequence length claimed by each possible lead byte.
///
/// Continuation bytes (`0x80..=0xBF`) and the two bytes that can never start
/// a sequence (`0xFE`, `0xFF`) claim a single byte. Legacy 5- and 6-byte lead
/// patterns are accepted.
const LENGTH_TABLE: [u8; 256] = build_length_table();

/// Mask applied to the lead byte, indexed by `sequence length - 1`.
const LEAD_MASK: [u8; 6] = [0x7F, 0x1F, 0x0F, 0x07, 0x03, 0x01];

const fn build_length_table() -> [u8; 256] {
    let mut table = [1u8; 256];
    let mut i = 0xC0;
    while i < 0xFE {
        table[i] = match i {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            0xF8..=0xFB => 5,
            _ => 6,
        };
        i += 1;
    }
    table
}

/// Byte length (1..=6) of the sequence starting with `lead`.
#[inline]
#[must_use]
pub const fn char_length(lead: u8) -> usize {
    LENGTH_TABLE[lead as usize] as usize
}

/// Iterator over the per-character byte slices of a text.
///
/// The final slice is clamped to the end of the input when the last lead
/// byte claims more bytes than remain.
#[derive(Clone, Debug)]
pub struct Sequences<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Sequences<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.text.get(self.pos)?;
        let start = self.pos;
        self.pos = (start + char_length(lead)).min(self.text.len());
        Some(&self.text[start..self.pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (remaining.div_ceil(6), Some(remaining))
    }
}

/// Walk `text` one character at a time.
#[must_use]
pub fn sequences(text: &[u8]) -> Sequences<'_> {
    Sequences { text, pos: 0 }
}

/// Number of characters in `text`.
#[must_use]
pub fn character_length(text: &[u8]) -> usize {
    sequences(text).count()
}

/// Byte offset at which character `char_idx` starts, clamped to `text.len()`.
#[must_use]
pub fn byte_offset(text: &[u8], char_idx: usize) -> usize {
    let mut offset = 0;
    for _ in 0..char_idx {
        match text.get(offset) {
            Some(&lead) => offset = (offset + char_length(lead)).min(text.len()),
            None => break,
        }
    }
    offset
}

/// Slice covering `len` characters starting at character `start`.
///
/// Ranges running past the end of `text` are clamped.
#[must_use]
pub fn substring(text: &[u8], start: usize, len: usize) -> &[u8] {
    let from = byte_offset(text, start);
    let to = from + byte_offset(&text[from..], len);
    &text[from..to]
}

/// Scalar value of the first character in `text`.
///
/// Uses the length-specific lead mask and six bits from every continuation
/// byte that is present. Returns `None` only for empty input.
#[must_use]
pub fn decode_codepoint(text: &[u8]) -> Option<u32> {
    let &lead = text.first()?;
    let len = char_length(lead);
    let mut value = u32::from(lead & LEAD_MASK[len - 1]);
    for &byte in text.iter().take(len).skip(1) {
        value = (value << 6) | u32::from(byte & 0x3F);
    }
    Some(value)
}

/// Encode a scalar value, choosing the sequence length by magnitude.
///
/// Values beyond the Unicode range are packed into the legacy 5- and 6-byte
/// forms.
#[must_use]
pub fn encode_codepoint(mut value: u32) -> Vec<u8> {
    let (len, prefix) = match value {
        0..0x80 => (1, 0x00),
        0x80..0x800 => (2, 0xC0),
        0x800..0x1_0000 => (3, 0xE0),
        0x1_0000..0x20_0000 => (4, 0xF0),
        0x20_0000..0x400_0000 => (5, 0xF8),
        _ => (6, 0xFC),
    };
    let mut out = vec![0u8; len];
    for byte in out.iter_mut().skip(1).rev() {
        *byte = (value & 0x3F) as u8 | 0x80;
        value >>= 6;
    }
    out[0] = (value & 0xFF) as u8 | prefix;
    out
}

/// Strict decode of one character sequence for display.
///
/// Anything that is not a complete, minimal, valid Unicode scalar decodes
/// to U+FFFD.
#[must_use]
pub fn decode_char(seq: &[u8]) -> char {
    let Some(&lead) = seq.first() else {
        return char::REPLACEMENT_CHARACTER;
    };
    let len = char_length(lead);
    if seq.len() < len || (len == 1 && lead >= 0x80) {
        return char::REPLACEMENT_CHARACTER;
    }
    if seq[1..len].iter().any(|&b| b & 0xC0 != 0x80) {
        return char::REPLACEMENT_CHARACTER;
    }
    match decode_codepoint(seq).and_then(char::from_u32) {
        Some(c) if c.len_utf8() == len => c,
        _ => char::REPLACEMENT_CHARACTER,
    }
}

/// Decode `text` for display, one replacement per malformed sequence.
#[must_use]
pub fn to_string_lossy(text: &[u8]) -> String {
    sequences(text).map(decode_char).collect()
}
