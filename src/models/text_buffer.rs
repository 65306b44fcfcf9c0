//! Text buffer model.
//!
//! Responsibilities:
//! - text storage (Rope)
//! - the cursor/selection set, kept coherent across edits
//! - position <-> byte offset mapping
//! - atomic transactions and undo/redo

use super::cursor_set::CursorSet;
use super::edit_history::{EditHistory, EditHistoryConfig};
use super::edit_op::{EditOp, Transaction};
use super::position::{Position, Range};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};

/// Borrows the slice as a `&str` when it is contiguous.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// One replacement inside a transaction, expressed in pre-transaction coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range,
    pub text: String,
}

impl Replacement {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

pub struct TextBuffer {
    rope: Rope,
    cursors: CursorSet,
    history: EditHistory,
    pending: Vec<EditOp>,
    version: u64,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursors: CursorSet::new(Position::ZERO),
            history: EditHistory::new(),
            pending: Vec::new(),
            version: 0,
        }
    }

    pub fn with_history_config(mut self, config: EditHistoryConfig) -> Self {
        self.history = EditHistory::new().with_config(config);
        self
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Streams the text to `writer` chunk by chunk.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    /// Bumped by every mutation, including undo and redo.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    // ==================== cursors ====================

    pub fn cursors(&self) -> &CursorSet {
        &self.cursors
    }

    pub fn cursor_position(&self) -> Position {
        self.cursors.cursor_position()
    }

    pub fn set_cursor(&mut self, pos: Position) {
        let pos = self.clip_position(pos);
        self.cursors.set_cursor(pos);
    }

    pub fn set_selected_range(&mut self, range: Range) {
        let range = Range::new(self.clip_position(range.start), self.clip_position(range.end));
        self.cursors.set_selected_range(range);
    }

    pub fn add_selection(&mut self, range: Range) -> bool {
        let range = Range::new(self.clip_position(range.start), self.clip_position(range.end));
        self.cursors.add_selection(range)
    }

    pub fn add_cursor(&mut self, pos: Position) -> bool {
        let pos = self.clip_position(pos);
        self.cursors.add_cursor(pos)
    }

    // ==================== coordinates ====================

    /// Byte length of `row` without its `\n`.
    ///
    /// A `\r` before the newline still counts: tree-sitter reports it as a column, so nodes on
    /// CRLF lines can end after it.
    pub fn line_len_bytes(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = slice_to_cow(self.rope.line(row));
        line.strip_suffix('\n').unwrap_or(&line).len()
    }

    pub fn clip_position(&self, pos: Position) -> Position {
        let last_row = self.rope.len_lines().saturating_sub(1);
        if pos.row > last_row {
            return Position::new(last_row, self.line_len_bytes(last_row));
        }
        Position::new(pos.row, pos.column.min(self.line_len_bytes(pos.row)))
    }

    pub fn pos_to_byte(&self, pos: Position) -> usize {
        let pos = self.clip_position(pos);
        self.rope.line_to_byte(pos.row) + pos.column
    }

    pub fn byte_to_pos(&self, byte: usize) -> Position {
        let byte = byte.min(self.rope.len_bytes());
        let row = self.rope.byte_to_line(byte);
        Position::new(row, byte - self.rope.line_to_byte(row))
    }

    pub fn text_in_range(&self, range: Range) -> String {
        let start = self.rope.byte_to_char(self.pos_to_byte(range.start));
        let end = self.rope.byte_to_char(self.pos_to_byte(range.end));
        self.rope.slice(start..end).to_string()
    }

    // ==================== mutation ====================

    /// Replaces `range` with `text` as its own undo step.
    pub fn set_text_in_range(&mut self, range: Range, text: &str) -> bool {
        self.transact(vec![Replacement::new(range, text)])
    }

    /// Applies every replacement as one undoable transaction.
    ///
    /// Ranges are read against the text as it is *before* the transaction and must not
    /// overlap. They are applied latest-first so no replacement disturbs the coordinates of
    /// one still waiting. Returns false (and changes nothing) for overlapping input.
    pub fn transact(&mut self, mut replacements: Vec<Replacement>) -> bool {
        if replacements.is_empty() {
            return false;
        }

        replacements.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        let overlapping = replacements
            .windows(2)
            .any(|pair| pair[1].range.end > pair[0].range.start);
        if overlapping {
            tracing::warn!(count = replacements.len(), "rejecting overlapping replacements");
            return false;
        }

        let cursors_before = self.cursors.clone();
        let ops: Vec<EditOp> = replacements
            .iter()
            .map(|r| self.replace(r.range, &r.text))
            .collect();

        tracing::debug!(ops = ops.len(), version = self.version + 1, "transaction applied");
        self.history.push(Transaction {
            ops,
            cursors_before,
            cursors_after: self.cursors.clone(),
        });
        self.version += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reverts the latest transaction and restores the cursors it started from.
    pub fn undo(&mut self) -> bool {
        let Some(tx) = self.history.pop_undo() else {
            return false;
        };

        for op in tx.ops.iter().rev() {
            self.apply_op(op.inverse());
        }
        self.cursors = tx.cursors_before.clone();
        self.history.push_redo(tx);
        self.version += 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(tx) = self.history.pop_redo() else {
            return false;
        };

        for op in &tx.ops {
            self.apply_op(op.clone());
        }
        self.cursors = tx.cursors_after.clone();
        self.history.push_undo_keep_redo(tx);
        self.version += 1;
        true
    }

    /// Edits applied since the last call, in application order.
    pub fn take_pending_edits(&mut self) -> Vec<EditOp> {
        std::mem::take(&mut self.pending)
    }

    fn replace(&mut self, range: Range, text: &str) -> EditOp {
        let start = self.clip_position(range.start);
        let end = self.clip_position(range.end);
        let start_byte = self.pos_to_byte(start);
        let deleted = self.text_in_range(Range::new(start, end));

        let op = EditOp::replace(start_byte, start, deleted, text.to_string());
        self.cursors.adjust_for_edit(Range::new(start, end), op.new_end());
        self.apply_op(op.clone());
        op
    }

    fn apply_op(&mut self, op: EditOp) {
        op.apply(&mut self.rope);
        self.pending.push(op);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
