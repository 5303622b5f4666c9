//! The closed set of commands an input shell can send.

use crate::document::Document;
use crate::document::cursor::Direction;

/// One discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert a character; `'\n'` splits the line.
    InsertCharacter(char),
    /// Delete the character under the cursor, joining lines at the end.
    DeleteForward,
    /// Delete the character before the cursor, joining lines at the start.
    DeleteBackward,
    /// Single-step cursor movement.
    Move(Direction),
    /// Move to a viewport-relative screen cell (pointer click).
    MoveTo { row: usize, col: usize },
    /// Drop the selection anchor at the cursor.
    SetSelectionAnchor,
    /// Discard the selection anchor.
    ClearSelection,
    /// New visible extent.
    Resize { rows: usize, cols: usize },
}

impl Document {
    /// Apply one command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::InsertCharacter(ch) => self.insert_character(ch),
            Command::DeleteForward => self.delete_forward(),
            Command::DeleteBackward => self.delete_backward(),
            Command::Move(direction) => self.move_cursor(direction),
            Command::MoveTo { row, col } => self.move_cursor_to_screen(row, col),
            Command::SetSelectionAnchor => self.set_selection_anchor(),
            Command::ClearSelection => self.clear_selection(),
            Command::Resize { rows, cols } => self.resize(rows, cols),
        }
    }

    /// Apply a sequence of commands in order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }
}
