//! Property-based tests for document invariants and the UTF-8 codec.
//!
//! Uses proptest to verify invariants that must hold across all reachable
//! states and all byte inputs.

use linebuffer::utf8::{
    WidthMethod, char_index_to_terminal_column, char_length, character_length, decode_codepoint,
    encode_codepoint, sequences, substring, terminal_column_to_char_index,
};
use linebuffer::{Command, Direction, Document, DocumentOptions};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Characters mixing ASCII, accented, CJK, emoji and newlines.
fn edit_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['a', 'b', ' ', 'é', 'ñ', '漢', '字', '😀', '①', '\n'])
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Home,
        Direction::End,
    ])
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => edit_char().prop_map(Command::InsertCharacter),
        2 => Just(Command::DeleteForward),
        2 => Just(Command::DeleteBackward),
        3 => direction().prop_map(Command::Move),
        1 => (0usize..30, 0usize..100).prop_map(|(row, col)| Command::MoveTo { row, col }),
        1 => Just(Command::SetSelectionAnchor),
        1 => Just(Command::ClearSelection),
        1 => (0usize..12, 0usize..40).prop_map(|(rows, cols)| Command::Resize { rows, cols }),
    ]
}

fn check_invariants(doc: &Document) -> Result<(), TestCaseError> {
    prop_assert!(doc.line_count() >= 1, "document must never be empty");
    let cursor = doc.cursor();
    prop_assert!(cursor.line < doc.line_count(), "cursor line out of range");
    prop_assert!(
        cursor.col <= doc.current_line().len_chars(),
        "cursor column {} past line end {}",
        cursor.col,
        doc.current_line().len_chars()
    );
    if let Some(anchor) = doc.anchor() {
        prop_assert!(anchor.line < doc.line_count());
        prop_assert!(anchor.col <= doc.lines()[anchor.line].len_chars());
    }
    let vp = doc.viewport();
    prop_assert!(
        vp.contains(cursor.line, doc.cursor_terminal_column()),
        "cursor outside viewport {:?}",
        vp
    );
    Ok(())
}

// ============================================================================
// Document Properties
// ============================================================================

proptest! {
    /// Every reachable state keeps the cursor, anchor and viewport consistent.
    #[test]
    fn commands_preserve_invariants(commands in prop::collection::vec(command(), 0..120)) {
        let mut doc = Document::with_options(DocumentOptions { rows: 5, cols: 7, ..DocumentOptions::default() });
        for cmd in commands {
            doc.apply(cmd);
            check_invariants(&doc)?;
        }
    }

    /// Malformed sources still produce a consistent, editable document.
    #[test]
    fn arbitrary_bytes_are_editable(
        bytes in prop::collection::vec(any::<u8>(), 0..200),
        commands in prop::collection::vec(command(), 0..60),
    ) {
        let mut doc = Document::from_bytes(&bytes);
        check_invariants(&doc)?;
        for cmd in commands {
            doc.apply(cmd);
            check_invariants(&doc)?;
        }
        let frame = doc.render_frame(4, 9);
        prop_assert_eq!(frame.rows().len(), 4);
    }

    /// Splitting a line and immediately joining it back is a no-op.
    #[test]
    fn split_then_join_restores_line(s in "\\PC{0,30}", k in 0usize..40) {
        let mut doc = Document::from_text(&s.replace('\n', ""));
        let before = doc.text();
        let k = k.min(doc.current_line().len_chars());
        doc.move_cursor_to(0, k);
        doc.insert_character('\n');
        prop_assert_eq!(doc.line_count(), 2);
        doc.delete_backward();
        prop_assert_eq!(doc.text(), before);
        prop_assert_eq!(doc.cursor().col, k);
    }

    /// Rendering twice without input gives the same frame and viewport.
    #[test]
    fn render_is_idempotent(commands in prop::collection::vec(command(), 0..60), rows in 1usize..10, cols in 1usize..30) {
        let mut doc = Document::new();
        doc.apply_all(commands);
        let first = doc.render_frame(rows, cols);
        let vp = doc.viewport();
        prop_assert!(!doc.scroll_to_cursor());
        prop_assert_eq!(doc.render_frame(rows, cols), first);
        prop_assert_eq!(doc.viewport(), vp);
    }

    /// Frame rows never exceed the viewport width.
    #[test]
    fn frame_rows_fit_width(s in "\\PC{0,80}", cols in 1usize..20) {
        let mut doc = Document::from_text(&s);
        doc.move_cursor_end();
        let frame = doc.render_frame(3, cols);
        for row in frame.rows() {
            let width = linebuffer::utf8::display_width(row.text.as_bytes(), WidthMethod::WcWidth);
            prop_assert!(width <= cols, "row {:?} wider than {}", row.text, cols);
        }
        prop_assert!(frame.cursor().col < cols);
    }
}

// ============================================================================
// Codec Properties
// ============================================================================

proptest! {
    /// The walk covers every byte exactly once.
    #[test]
    fn sequences_partition_input(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let joined: Vec<u8> = sequences(&bytes).flatten().copied().collect();
        prop_assert_eq!(&joined, &bytes);
        prop_assert_eq!(sequences(&bytes).count(), character_length(&bytes));
        for seq in sequences(&bytes) {
            prop_assert!(!seq.is_empty() && seq.len() <= char_length(seq[0]));
        }
    }

    /// Character counts agree with std for valid UTF-8.
    #[test]
    fn character_length_matches_std(s in "\\PC{0,100}") {
        prop_assert_eq!(character_length(s.as_bytes()), s.chars().count());
    }

    /// Substrings agree with std char slicing for valid UTF-8.
    #[test]
    fn substring_matches_std(s in "\\PC{0,50}", start in 0usize..60, len in 0usize..60) {
        let expected: String = s.chars().skip(start).take(len).collect();
        prop_assert_eq!(substring(s.as_bytes(), start, len), expected.as_bytes());
    }

    /// Encoding agrees with std and decoding inverts it.
    #[test]
    fn codec_matches_std(c in any::<char>()) {
        let mut buf = [0u8; 4];
        let expected = c.encode_utf8(&mut buf).as_bytes();
        let encoded = encode_codepoint(u32::from(c));
        prop_assert_eq!(encoded.as_slice(), expected);
        prop_assert_eq!(decode_codepoint(&encoded), Some(u32::from(c)));
    }

    /// Column mapping inverts char-to-column at character starts.
    #[test]
    fn column_mapping_round_trips(s in "[a-z漢字😀é]{0,30}", idx in 0usize..35) {
        let bytes = s.as_bytes();
        let idx = idx.min(character_length(bytes));
        let column = char_index_to_terminal_column(bytes, idx, WidthMethod::WcWidth);
        prop_assert_eq!(terminal_column_to_char_index(bytes, column, WidthMethod::WcWidth), idx);
    }
}

/// Exhaustive round trip over every Unicode scalar value.
#[test]
fn every_scalar_round_trips() {
    for c in (0..=0x10_FFFF).filter_map(char::from_u32) {
        let encoded = encode_codepoint(u32::from(c));
        let decoded = decode_codepoint(&encoded).expect("non-empty encoding");
        assert_eq!(encode_codepoint(decoded), encoded, "round trip failed for {c:?}");
    }
}
