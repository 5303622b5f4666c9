//! Construction options for [`Document`](crate::Document).

use crate::utf8::WidthMethod;

/// Document construction options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentOptions {
    /// How ambiguous-width characters are measured.
    pub width_method: WidthMethod,
    /// Initial visible rows.
    pub rows: usize,
    /// Initial visible terminal columns.
    pub cols: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            width_method: WidthMethod::WcWidth,
            rows: 24,
            cols: 80,
        }
    }
}
