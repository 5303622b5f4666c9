//! `linebuffer` - text-buffer core for terminal text editors
//!
//! A line-oriented document model with UTF-8 aware editing, cursor
//! navigation, selection tracking and viewport scrolling, rendered to a
//! fixed-size character grid. Lines are kept as raw bytes; the [`utf8`]
//! module maps between byte offsets, character indices and terminal columns
//! (wide glyphs take two cells).
//!
//! The crate does no terminal I/O. An input shell turns each event into a
//! [`Command`], applies it, and asks for a [`Frame`] to draw.
//!
//! ```
//! use linebuffer::{Command, Direction, Document};
//!
//! let mut doc = Document::new();
//! doc.apply_all("Hi\ni".chars().map(Command::InsertCharacter));
//! doc.apply(Command::Move(Direction::Up));
//!
//! let frame = doc.render_frame(24, 80);
//! assert_eq!(frame.cursor().row, 0);
//! assert_eq!(frame.cursor().col, 1);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow document::DocumentOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::cast_possible_truncation)] // Intentional byte packing in the codec
#![allow(clippy::doc_markdown)] // Allow technical names without backticks

pub mod cell;
pub mod document;
pub mod error;
pub mod render;
pub mod utf8;

// Re-export core types at crate root
pub use cell::{Cell, CellFlags, CellGrid};
pub use document::{
    Command, Cursor, Direction, Document, DocumentOptions, Line, Position, SelectionRegion,
    Viewport,
};
pub use error::{Error, Result};
pub use render::{CursorCell, Frame, FrameRow};
pub use utf8::WidthMethod;
