//! Fuzz target for command streams.
//!
//! Any sequence of commands on any starting text must keep the cursor inside
//! the document and the viewport.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linebuffer::{Command, Direction, Document};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(char),
    DeleteForward,
    DeleteBackward,
    Move(u8),
    MoveTo(u8, u8),
    Anchor,
    Clear,
    Resize(u8, u8),
}

impl Op {
    fn command(&self) -> Command {
        match *self {
            Self::Insert(ch) => Command::InsertCharacter(ch),
            Self::DeleteForward => Command::DeleteForward,
            Self::DeleteBackward => Command::DeleteBackward,
            Self::Move(d) => Command::Move(match d % 6 {
                0 => Direction::Left,
                1 => Direction::Right,
                2 => Direction::Up,
                3 => Direction::Down,
                4 => Direction::Home,
                _ => Direction::End,
            }),
            Self::MoveTo(row, col) => Command::MoveTo {
                row: row.into(),
                col: col.into(),
            },
            Self::Anchor => Command::SetSelectionAnchor,
            Self::Clear => Command::ClearSelection,
            Self::Resize(rows, cols) => Command::Resize {
                rows: rows.into(),
                cols: cols.into(),
            },
        }
    }
}

fuzz_target!(|input: (Vec<u8>, Vec<Op>)| {
    let (text, ops) = input;
    let mut doc = Document::from_bytes(&text);

    for op in ops.iter().take(512) {
        doc.apply(op.command());

        let cursor = doc.cursor();
        assert!(cursor.line < doc.line_count());
        assert!(cursor.col <= doc.current_line().len_chars());
        assert!(
            doc.viewport()
                .contains(cursor.line, doc.cursor_terminal_column())
        );
    }

    let vp = doc.viewport();
    let _ = doc.render_frame(vp.rows(), vp.cols()).to_grid();
});
