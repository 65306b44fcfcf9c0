//! Buffer coordinates.
//!
//! `column` is a byte offset within the line, the same unit tree-sitter uses for
//! `Point::column`, so positions read from the syntax tree and positions stored
//! in the buffer compare without conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const ZERO: Self = Self { row: 0, column: 0 };

    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Position reached after writing `text` starting here.
    pub fn advance(self, text: &str) -> Self {
        let mut row = self.row;
        let mut column = self.column;

        for &b in text.as_bytes() {
            if b == b'\n' {
                row = row.saturating_add(1);
                column = 0;
            } else {
                column = column.saturating_add(1);
            }
        }

        Self { row, column }
    }

    /// Tracks this point through the replacement of `old` by text that now ends at `new_end`.
    ///
    /// Points before the range, or sitting on the start of a non-empty range, stay put.
    /// Points inside the range or on its end collapse to `new_end`. Points after it shift.
    pub fn adjust_for_edit(self, old: Range, new_end: Position) -> Self {
        if self < old.start || (self == old.start && !old.is_empty()) {
            return self;
        }
        if self <= old.end {
            return new_end;
        }

        if self.row == old.end.row {
            Self {
                row: new_end.row,
                column: new_end.column + (self.column - old.end.column),
            }
        } else {
            Self {
                row: self.row - old.end.row + new_end.row,
                column: self.column,
            }
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

impl From<Position> for tree_sitter::Point {
    fn from(pos: Position) -> Self {
        tree_sitter::Point {
            row: pos.row,
            column: pos.column,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// Half-open range, `start <= end`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn empty(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    pub fn intersects(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?} - {:?})", self.start, self.end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/position.rs"]
mod tests;
