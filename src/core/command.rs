//! Named structural commands and their dispatch.
//!
//! - Command: the fixed set of operations exposed to callers, keyed by a stable kebab-case name
//! - execute: runs one command against an `EditorContext`

use crate::kernel::context::EditorContext;
use crate::kernel::structure::{self, Outcome, SwapOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== moves ====================
    MoveToLargerNode,
    MoveToSmallerNode,
    MoveToNextSibling,
    MoveToPreviousSibling,
    MoveToCurrentFunction,
    MoveToCurrentFunctionEnd,

    // ==================== selections ====================
    SelectCurrentFunction,
    SelectCurrentNode,
    SelectNextSibling,
    SelectPreviousSibling,

    // ==================== cursors ====================
    AddCursorToNextSibling,
    AddCursorToPreviousSibling,
    AddCursorToAllSiblings,

    // ==================== edits ====================
    SwapWithNextSibling,
    SwapWithPreviousSibling,
    TransposeNodes,

    // ==================== history ====================
    Undo,
    Redo,
}

impl Command {
    pub const ALL: [Command; 18] = [
        Command::MoveToLargerNode,
        Command::MoveToSmallerNode,
        Command::MoveToNextSibling,
        Command::MoveToPreviousSibling,
        Command::MoveToCurrentFunction,
        Command::MoveToCurrentFunctionEnd,
        Command::SelectCurrentFunction,
        Command::SelectCurrentNode,
        Command::SelectNextSibling,
        Command::SelectPreviousSibling,
        Command::AddCursorToNextSibling,
        Command::AddCursorToPreviousSibling,
        Command::AddCursorToAllSiblings,
        Command::SwapWithNextSibling,
        Command::SwapWithPreviousSibling,
        Command::TransposeNodes,
        Command::Undo,
        Command::Redo,
    ];

    pub fn all() -> &'static [Command] {
        &Self::ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveToLargerNode => "move-to-larger-node",
            Command::MoveToSmallerNode => "move-to-smaller-node",
            Command::MoveToNextSibling => "move-to-next-sibling",
            Command::MoveToPreviousSibling => "move-to-previous-sibling",
            Command::MoveToCurrentFunction => "move-to-current-function",
            Command::MoveToCurrentFunctionEnd => "move-to-current-function-end",
            Command::SelectCurrentFunction => "select-current-function",
            Command::SelectCurrentNode => "select-current-node",
            Command::SelectNextSibling => "select-next-sibling",
            Command::SelectPreviousSibling => "select-previous-sibling",
            Command::AddCursorToNextSibling => "add-cursor-to-next-sibling",
            Command::AddCursorToPreviousSibling => "add-cursor-to-previous-sibling",
            Command::AddCursorToAllSiblings => "add-cursor-to-all-siblings",
            Command::SwapWithNextSibling => "swap-with-next-sibling",
            Command::SwapWithPreviousSibling => "swap-with-previous-sibling",
            Command::TransposeNodes => "transpose-nodes",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }

    /// Accepts the kebab-case name, with or without a `namespace:` prefix, and the longer
    /// `move-to-larger-syntax-node` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.rsplit_once(':').map_or(name, |(_, rest)| rest);
        match name {
            "move-to-larger-syntax-node" => return Some(Command::MoveToLargerNode),
            "move-to-smaller-syntax-node" => return Some(Command::MoveToSmallerNode),
            _ => {}
        }
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Commands that change the text.
    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::SwapWithNextSibling
                | Command::SwapWithPreviousSibling
                | Command::TransposeNodes
                | Command::Undo
                | Command::Redo
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::MoveToLargerNode
                | Command::MoveToSmallerNode
                | Command::MoveToNextSibling
                | Command::MoveToPreviousSibling
                | Command::MoveToCurrentFunction
                | Command::MoveToCurrentFunctionEnd
                | Command::AddCursorToNextSibling
                | Command::AddCursorToPreviousSibling
                | Command::AddCursorToAllSiblings
        )
    }

    pub fn is_selection_command(&self) -> bool {
        matches!(
            self,
            Command::SelectCurrentFunction
                | Command::SelectCurrentNode
                | Command::SelectNextSibling
                | Command::SelectPreviousSibling
        )
    }
}

/// Runs `command`. Edits leave the tree current, so the next command can query positions.
pub fn execute(ctx: &mut EditorContext, command: Command) -> Outcome {
    let options = SwapOptions {
        move_cursor_with_node: ctx.move_cursor_with_node(),
    };

    let outcome = match command {
        Command::MoveToLargerNode => structure::move_to_larger_node(ctx),
        Command::MoveToSmallerNode => structure::move_to_smaller_node(ctx),
        Command::MoveToNextSibling => structure::move_to_next_sibling(ctx),
        Command::MoveToPreviousSibling => structure::move_to_previous_sibling(ctx),
        Command::MoveToCurrentFunction => structure::move_to_current_function(ctx),
        Command::MoveToCurrentFunctionEnd => structure::move_to_current_function_end(ctx),
        Command::SelectCurrentFunction => structure::select_current_function(ctx),
        Command::SelectCurrentNode => structure::select_current_node(ctx),
        Command::SelectNextSibling => structure::select_next_sibling(ctx),
        Command::SelectPreviousSibling => structure::select_previous_sibling(ctx),
        Command::AddCursorToNextSibling => structure::add_cursor_to_next_sibling(ctx),
        Command::AddCursorToPreviousSibling => structure::add_cursor_to_previous_sibling(ctx),
        Command::AddCursorToAllSiblings => structure::add_cursor_to_all_siblings(ctx),
        Command::SwapWithNextSibling => structure::swap_with_next_sibling(ctx, options),
        Command::SwapWithPreviousSibling => structure::swap_with_previous_sibling(ctx, options),
        Command::TransposeNodes => structure::transpose_nodes(ctx),
        Command::Undo => applied_if(ctx.undo()),
        Command::Redo => applied_if(ctx.redo()),
    };

    if command.is_edit_command() && !ctx.is_tree_current() {
        ctx.reparse();
    }

    tracing::debug!(
        command = command.name(),
        outcome = outcome.as_str(),
        cursor = %ctx.cursor_position(),
        "command executed"
    );
    outcome
}

fn applied_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Applied
    } else {
        Outcome::NoOp
    }
}
