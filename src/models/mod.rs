//! Data models: positions, cursors, text, edit history.

pub mod cursor_set;
pub mod edit_history;
pub mod edit_op;
pub mod position;
pub mod selection;
pub mod text_buffer;

pub use cursor_set::CursorSet;
pub use edit_history::{EditHistory, EditHistoryConfig};
pub use edit_op::{EditOp, Transaction};
pub use position::{Position, Range};
pub use selection::Selection;
pub use text_buffer::{slice_to_cow, Replacement, TextBuffer};
