//! Cursor placement and selection building on top of the navigator.

use super::canonical::{first_named_ancestor, largest_current_node, largest_node_at};
use super::navigate::{current_function_node, next_largest_node, sibling, smaller_node};
use super::{Direction, Outcome};
use crate::kernel::context::EditorContext;
use crate::models::{Position, Range};

// ==================== moves ====================

pub fn move_to_larger_node(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.cursor_position();
    let target = ctx
        .snapshot()
        .and_then(|snapshot| next_largest_node(snapshot, pos))
        .map(|node| node.start());
    move_cursor(ctx, target)
}

pub fn move_to_smaller_node(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.cursor_position();
    let target = ctx
        .snapshot()
        .and_then(|snapshot| smaller_node(snapshot, pos))
        .map(|node| node.start());
    move_cursor(ctx, target)
}

pub fn move_to_next_sibling(ctx: &mut EditorContext) -> Outcome {
    let target = sibling_range(ctx, Direction::Next).map(|range| range.start);
    move_cursor(ctx, target)
}

pub fn move_to_previous_sibling(ctx: &mut EditorContext) -> Outcome {
    let target = sibling_range(ctx, Direction::Previous).map(|range| range.start);
    move_cursor(ctx, target)
}

pub fn move_to_current_function(ctx: &mut EditorContext) -> Outcome {
    match current_function_range(ctx) {
        Ok(range) => move_cursor(ctx, range.map(|r| r.start)),
        Err(outcome) => outcome,
    }
}

pub fn move_to_current_function_end(ctx: &mut EditorContext) -> Outcome {
    match current_function_range(ctx) {
        Ok(range) => move_cursor(ctx, range.map(|r| r.end)),
        Err(outcome) => outcome,
    }
}

// ==================== selections ====================

pub fn select_current_function(ctx: &mut EditorContext) -> Outcome {
    match current_function_range(ctx) {
        Ok(Some(range)) => {
            ctx.buffer_mut().set_selected_range(range);
            Outcome::Applied
        }
        Ok(None) => Outcome::NoOp,
        Err(outcome) => outcome,
    }
}

/// First call selects the current construct; later calls (with a non-empty active selection)
/// add the construct that follows it.
pub fn select_current_node(ctx: &mut EditorContext) -> Outcome {
    let extend = !ctx.buffer().cursors().last().is_empty();
    let pos = ctx.cursor_position();

    let target = ctx.snapshot().and_then(|snapshot| {
        let node = largest_current_node(snapshot, pos).and_then(first_named_ancestor)?;
        if extend {
            node.next_named_sibling().map(|next| next.range())
        } else {
            Some(node.range())
        }
    });
    select_range(ctx, target, extend)
}

pub fn select_next_sibling(ctx: &mut EditorContext) -> Outcome {
    select_sibling(ctx, Direction::Next)
}

pub fn select_previous_sibling(ctx: &mut EditorContext) -> Outcome {
    select_sibling(ctx, Direction::Previous)
}

fn select_sibling(ctx: &mut EditorContext, direction: Direction) -> Outcome {
    let extend = !ctx.buffer().cursors().last().is_empty();
    let target = sibling_range(ctx, direction);
    select_range(ctx, target, extend)
}

// ==================== cursors ====================

/// Adds a cursor at the sibling following the cursor furthest into the buffer.
pub fn add_cursor_to_next_sibling(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.buffer().cursors().last_by_position().cursor();
    add_cursor_to_sibling(ctx, pos, Direction::Next)
}

/// Adds a cursor at the sibling preceding the cursor nearest the buffer start.
pub fn add_cursor_to_previous_sibling(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.buffer().cursors().first_by_position().cursor();
    add_cursor_to_sibling(ctx, pos, Direction::Previous)
}

pub fn add_cursor_to_all_siblings(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.cursor_position();
    let starts: Vec<Position> = ctx
        .snapshot()
        .and_then(|snapshot| largest_current_node(snapshot, pos))
        .and_then(|node| node.parent())
        .map(|parent| parent.named_children().map(|child| child.start()).collect())
        .unwrap_or_default();

    let mut added = 0usize;
    for start in starts {
        if ctx.buffer_mut().add_cursor(start) {
            added += 1;
        }
    }
    tracing::debug!(added, "cursors added to siblings");

    if added > 0 {
        Outcome::Applied
    } else {
        Outcome::NoOp
    }
}

fn add_cursor_to_sibling(ctx: &mut EditorContext, pos: Position, direction: Direction) -> Outcome {
    let target = ctx
        .snapshot()
        .and_then(|snapshot| largest_node_at(snapshot, pos))
        .and_then(|node| sibling(node, direction))
        .map(|node| node.start());

    let Some(start) = target else {
        return Outcome::NoOp;
    };
    if ctx.buffer_mut().add_cursor(start) {
        Outcome::Applied
    } else {
        Outcome::NoOp
    }
}

// ==================== helpers ====================

fn sibling_range(ctx: &EditorContext, direction: Direction) -> Option<Range> {
    let pos = ctx.cursor_position();
    let snapshot = ctx.snapshot()?;
    let node = largest_current_node(snapshot, pos)?;
    sibling(node, direction).map(|node| node.range())
}

fn current_function_range(ctx: &EditorContext) -> Result<Option<Range>, Outcome> {
    current_function_node(ctx)
        .map(|node| node.map(|n| n.range()))
        .map_err(Outcome::from)
}

fn move_cursor(ctx: &mut EditorContext, target: Option<Position>) -> Outcome {
    match target {
        Some(pos) => {
            tracing::debug!(%pos, "cursor moved");
            ctx.set_cursor(pos);
            Outcome::Applied
        }
        None => Outcome::NoOp,
    }
}

fn select_range(ctx: &mut EditorContext, target: Option<Range>, extend: bool) -> Outcome {
    let Some(range) = target else {
        return Outcome::NoOp;
    };

    if extend {
        ctx.buffer_mut().add_selection(range);
    } else {
        ctx.buffer_mut().set_selected_range(range);
    }
    Outcome::Applied
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/structure/select.rs"]
mod tests;
