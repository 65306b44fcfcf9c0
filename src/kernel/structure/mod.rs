//! Structural navigation and editing over the syntax snapshot.
//!
//! Every operation re-resolves its nodes from the current cursor state; node handles never
//! survive a mutation.

mod canonical;
mod navigate;
mod select;
mod swap;

pub use canonical::{
    first_named_ancestor, largest_current_node, largest_node_at, largest_node_starting_at,
};
pub use navigate::{
    current_function_node, enclosing_function, next_largest_node, sibling, smaller_node,
    Unsupported,
};
pub use select::{
    add_cursor_to_all_siblings, add_cursor_to_next_sibling, add_cursor_to_previous_sibling,
    move_to_current_function, move_to_current_function_end, move_to_larger_node,
    move_to_next_sibling, move_to_previous_sibling, move_to_smaller_node, select_current_function,
    select_current_node, select_next_sibling, select_previous_sibling,
};
pub use swap::{
    apply_swap, follow_moved_node, plan_swap, swap_with_next_sibling,
    swap_with_previous_sibling, transpose_nodes, SwapOptions, SwapPlan,
};

use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

/// What a structural operation did to the editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing to act on: no node, sibling, parent or match. State is unchanged.
    NoOp,
    /// The buffer's language has no function profile. State is unchanged.
    Unsupported(Option<LanguageId>),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Applied => "applied",
            Outcome::NoOp => "no-op",
            Outcome::Unsupported(_) => "unsupported",
        }
    }
}

impl From<Unsupported> for Outcome {
    fn from(value: Unsupported) -> Self {
        Outcome::Unsupported(value.0)
    }
}
