use super::cursor_set::CursorSet;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// One byte-range replacement, recorded with enough context to invert it and to describe it
/// to an incremental parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub start_byte: usize,
    pub start: Position,
    pub deleted: String,
    pub inserted: String,
}

impl EditOp {
    pub fn replace(start_byte: usize, start: Position, deleted: String, inserted: String) -> Self {
        Self {
            start_byte,
            start,
            deleted,
            inserted,
        }
    }

    pub fn old_end_byte(&self) -> usize {
        self.start_byte + self.deleted.len()
    }

    pub fn new_end_byte(&self) -> usize {
        self.start_byte + self.inserted.len()
    }

    pub fn old_end(&self) -> Position {
        self.start.advance(&self.deleted)
    }

    pub fn new_end(&self) -> Position {
        self.start.advance(&self.inserted)
    }

    pub fn inverse(&self) -> Self {
        Self {
            start_byte: self.start_byte,
            start: self.start,
            deleted: self.inserted.clone(),
            inserted: self.deleted.clone(),
        }
    }

    pub fn apply(&self, rope: &mut ropey::Rope) {
        let start = rope.byte_to_char(self.start_byte);
        let end = rope.byte_to_char(self.old_end_byte());
        rope.remove(start..end);
        rope.insert(start, &self.inserted);
    }
}

/// A single undo step: ops in the order they were applied, plus the cursors around them.
#[derive(Clone, Debug)]
pub struct Transaction {
    pub ops: Vec<EditOp>,
    pub cursors_before: CursorSet,
    pub cursors_after: CursorSet,
}
