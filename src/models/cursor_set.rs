//! Multi-cursor storage.
//!
//! Selections are kept in creation order; the last one is the active cursor. Buffer order is
//! a separate question answered by `first_by_position` / `last_by_position`.

use super::position::{Position, Range};
use super::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSet {
    selections: Vec<Selection>,
}

fn overlaps(a: &Selection, b: &Selection) -> bool {
    match (a.is_empty(), b.is_empty()) {
        (false, false) => a.range().intersects(&b.range()),
        (false, true) => a.contains(b.cursor()),
        (true, false) => b.contains(a.cursor()),
        (true, true) => a.cursor() == b.cursor(),
    }
}

fn union(keep: &Selection, other: &Selection) -> Selection {
    if other.is_empty() {
        return *keep;
    }
    if keep.is_empty() {
        return *other;
    }

    let a = keep.range();
    let b = other.range();
    let merged = Range::new(a.start.min(b.start), a.end.max(b.end));
    if keep.cursor() >= keep.anchor() {
        Selection::from_range(merged)
    } else {
        let mut sel = Selection::new(merged.end);
        sel.update_cursor(merged.start);
        sel
    }
}

impl CursorSet {
    pub fn new(pos: Position) -> Self {
        Self {
            selections: vec![Selection::new(pos)],
        }
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Most recently added selection.
    pub fn last(&self) -> &Selection {
        // Never empty: every mutator leaves at least one selection behind.
        &self.selections[self.selections.len() - 1]
    }

    pub fn cursor_position(&self) -> Position {
        self.last().cursor()
    }

    /// Cursor earliest in the buffer, regardless of when it was added.
    pub fn first_by_position(&self) -> &Selection {
        self.selections
            .iter()
            .min_by_key(|s| s.cursor())
            .unwrap_or_else(|| self.last())
    }

    /// Cursor latest in the buffer, regardless of when it was added.
    pub fn last_by_position(&self) -> &Selection {
        self.selections
            .iter()
            .max_by_key(|s| s.cursor())
            .unwrap_or_else(|| self.last())
    }

    pub fn cursor_positions(&self) -> Vec<Position> {
        let mut positions: Vec<_> = self.selections.iter().map(Selection::cursor).collect();
        positions.sort();
        positions
    }

    /// Collapses to a single cursor at `pos`.
    pub fn set_cursor(&mut self, pos: Position) {
        self.selections.clear();
        self.selections.push(Selection::new(pos));
    }

    /// Collapses to a single selection covering `range`.
    pub fn set_selected_range(&mut self, range: Range) {
        self.selections.clear();
        self.selections.push(Selection::from_range(range));
    }

    /// Adds a selection; returns false when it merged into an existing one.
    pub fn add_selection(&mut self, range: Range) -> bool {
        self.push_merging(Selection::from_range(range))
    }

    /// Adds a cursor; returns false when one already covers `pos`.
    pub fn add_cursor(&mut self, pos: Position) -> bool {
        self.push_merging(Selection::new(pos))
    }

    pub(crate) fn adjust_for_edit(&mut self, old: Range, new_end: Position) {
        for sel in &mut self.selections {
            sel.adjust_for_edit(old, new_end);
        }
        self.merge_overlapping();
    }

    fn push_merging(&mut self, sel: Selection) -> bool {
        if let Some(existing) = self.selections.iter_mut().find(|s| overlaps(s, &sel)) {
            *existing = union(existing, &sel);
            return false;
        }
        self.selections.push(sel);
        true
    }

    /// Merges overlapping selections into the earliest-created one of each overlap group.
    fn merge_overlapping(&mut self) {
        let mut out: Vec<Selection> = Vec::with_capacity(self.selections.len());
        for sel in self.selections.drain(..) {
            match out.iter_mut().find(|s| overlaps(s, &sel)) {
                Some(existing) => *existing = union(existing, &sel),
                None => out.push(sel),
            }
        }
        self.selections = out;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/cursor_set.rs"]
mod tests;
