//! A single cursor with an optional selected range.

use super::position::{Position, Range};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    anchor: Position,
    cursor: Position,
}

impl Selection {
    /// Empty selection (a bare cursor) at `pos`.
    pub fn new(pos: Position) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    /// Selection covering `range`, cursor on its end.
    pub fn from_range(range: Range) -> Self {
        Self {
            anchor: range.start,
            cursor: range.end,
        }
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.range().contains(pos)
    }

    pub fn update_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    pub(crate) fn adjust_for_edit(&mut self, old: Range, new_end: Position) {
        self.anchor = self.anchor.adjust_for_edit(old, new_end);
        self.cursor = self.cursor.adjust_for_edit(old, new_end);
    }
}
