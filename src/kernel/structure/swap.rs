//! Sibling swap and transpose.
//!
//! A swap runs in two phases. [`plan_swap`] reads both siblings from one snapshot and
//! [`apply_swap`] writes them back as a single transaction. Repositioning the cursor onto the
//! moved node is a separate step, [`follow_moved_node`], which only accepts a [`TreeReady`]
//! for the post-edit generation.

use super::canonical::{largest_current_node, largest_node_starting_at};
use super::navigate::sibling;
use super::{Direction, Outcome};
use crate::kernel::context::EditorContext;
use crate::kernel::syntax::{node_at, SyntaxSnapshot, TreeReady};
use crate::models::{Position, Range, Replacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOptions {
    /// Put the cursor on the moved node's new start once the tree has caught up.
    pub move_cursor_with_node: bool,
}

impl Default for SwapOptions {
    fn default() -> Self {
        Self {
            move_cursor_with_node: true,
        }
    }
}

/// Both halves of a swap, captured from a single snapshot before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pub direction: Direction,
    /// The current node, which travels to the sibling's slot.
    pub moved: Range,
    pub moved_text: String,
    pub target: Range,
    pub target_text: String,
    /// Where the moved node starts once both replacements are applied.
    pub landing: Position,
    /// Buffer version the plan was read from.
    pub generation: u64,
}

impl SwapPlan {
    /// Replacements in pre-edit coordinates.
    pub fn replacements(&self) -> Vec<Replacement> {
        vec![
            Replacement::new(self.target, self.moved_text.clone()),
            Replacement::new(self.moved, self.target_text.clone()),
        ]
    }
}

pub fn plan_swap(snapshot: &SyntaxSnapshot, pos: Position, direction: Direction) -> Option<SwapPlan> {
    let node = largest_current_node(snapshot, pos)?;
    let other = sibling(node, direction)?;

    let moved = node.range();
    let target = other.range();
    let landing = match direction {
        // The moved text lands where the later sibling began, shifted by the length change of
        // the replacement in front of it.
        Direction::Next => target
            .start
            .adjust_for_edit(moved, moved.start.advance(other.text())),
        Direction::Previous => target.start,
    };

    Some(SwapPlan {
        direction,
        moved,
        moved_text: node.text().to_string(),
        target,
        target_text: other.text().to_string(),
        landing,
        generation: snapshot.generation(),
    })
}

/// Writes both replacements as one undo step. Refuses a plan read from an older buffer.
pub fn apply_swap(ctx: &mut EditorContext, plan: &SwapPlan) -> bool {
    if plan.generation != ctx.buffer().version() {
        tracing::warn!(
            plan = plan.generation,
            buffer = ctx.buffer().version(),
            "discarding swap planned against an older buffer"
        );
        return false;
    }

    let applied = ctx.buffer_mut().transact(plan.replacements());
    if applied {
        tracing::debug!(
            direction = ?plan.direction,
            moved = ?plan.moved,
            target = ?plan.target,
            "siblings swapped"
        );
    }
    applied
}

/// Puts the cursor on the moved node, re-resolved against the post-swap tree.
pub fn follow_moved_node(ctx: &mut EditorContext, ready: TreeReady, plan: &SwapPlan) -> Outcome {
    if ready.generation != ctx.buffer().version() {
        tracing::warn!(
            ready = ready.generation,
            buffer = ctx.buffer().version(),
            "tree not ready for the current buffer; cursor left in place"
        );
        return Outcome::NoOp;
    }

    let target = ctx
        .snapshot()
        .and_then(|snapshot| node_at(snapshot, plan.landing))
        .map(|node| largest_node_starting_at(node).start());

    match target {
        Some(pos) => {
            ctx.set_cursor(pos);
            Outcome::Applied
        }
        None => Outcome::NoOp,
    }
}

pub fn swap_with_next_sibling(ctx: &mut EditorContext, options: SwapOptions) -> Outcome {
    swap(ctx, Direction::Next, options)
}

pub fn swap_with_previous_sibling(ctx: &mut EditorContext, options: SwapOptions) -> Outcome {
    swap(ctx, Direction::Previous, options)
}

/// Swaps forward when the cursor sits exactly on the current node's end, backward otherwise.
/// The cursor stays wherever the edit carries it.
pub fn transpose_nodes(ctx: &mut EditorContext) -> Outcome {
    let pos = ctx.cursor_position();
    let direction = ctx
        .snapshot()
        .and_then(|snapshot| largest_current_node(snapshot, pos))
        .map(|node| {
            if node.end() == pos {
                Direction::Next
            } else {
                Direction::Previous
            }
        });

    match direction {
        Some(direction) => swap(
            ctx,
            direction,
            SwapOptions {
                move_cursor_with_node: false,
            },
        ),
        None => Outcome::NoOp,
    }
}

fn swap(ctx: &mut EditorContext, direction: Direction, options: SwapOptions) -> Outcome {
    let pos = ctx.cursor_position();
    let Some(plan) = ctx
        .snapshot()
        .and_then(|snapshot| plan_swap(snapshot, pos, direction))
    else {
        return Outcome::NoOp;
    };

    if !apply_swap(ctx, &plan) {
        return Outcome::NoOp;
    }

    let ready = ctx.reparse();
    if options.move_cursor_with_node {
        follow_moved_node(ctx, ready, &plan);
    }
    Outcome::Applied
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/structure/swap.rs"]
mod tests;
