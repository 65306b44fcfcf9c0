use super::canonical::{first_named_ancestor, largest_current_node};
use super::Direction;
use crate::kernel::context::EditorContext;
use crate::kernel::language::LanguageId;
use crate::kernel::profile::LanguageProfile;
use crate::kernel::syntax::{SyntaxNode, SyntaxSnapshot};
use crate::models::Position;
use std::collections::VecDeque;

/// The buffer's language has no entry in the profile table (`None` when it has no language).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported(pub Option<LanguageId>);

/// Smallest named construct strictly larger than the current node. A node directly under the
/// root cannot grow further and resolves to itself.
pub fn next_largest_node(snapshot: &SyntaxSnapshot, pos: Position) -> Option<SyntaxNode<'_>> {
    let node = largest_current_node(snapshot, pos)?;
    match node.parent() {
        Some(parent) => first_named_ancestor(parent),
        None => Some(node),
    }
}

/// First named descendant, in level order, that starts somewhere other than the current node.
pub fn smaller_node(snapshot: &SyntaxSnapshot, pos: Position) -> Option<SyntaxNode<'_>> {
    let node = largest_current_node(snapshot, pos)?;
    let origin = node.start();

    let mut queue: VecDeque<_> = node.named_children().collect();
    while let Some(candidate) = queue.pop_front() {
        if candidate.start() != origin {
            return Some(candidate);
        }
        queue.extend(candidate.named_children());
    }
    None
}

pub fn sibling(node: SyntaxNode<'_>, direction: Direction) -> Option<SyntaxNode<'_>> {
    match direction {
        Direction::Next => node.next_named_sibling(),
        Direction::Previous => node.prev_named_sibling(),
    }
}

/// Climbs from `node` (inclusive) to the first ancestor whose kind the profile treats as a
/// function.
pub fn enclosing_function<'a>(
    node: SyntaxNode<'a>,
    profile: &LanguageProfile,
) -> Option<SyntaxNode<'a>> {
    let mut node = node;
    loop {
        if profile.is_function_kind(node.kind()) {
            return Some(node);
        }
        node = node.parent()?;
    }
}

/// Function-like node enclosing the active cursor.
pub fn current_function_node(
    ctx: &EditorContext,
) -> Result<Option<SyntaxNode<'_>>, Unsupported> {
    let Some(profile) = ctx.profile() else {
        let language = ctx.language();
        tracing::warn!(
            language = language.map(|l| l.language_id()).unwrap_or("plain text"),
            "no function profile for language"
        );
        return Err(Unsupported(language));
    };

    let Some(snapshot) = ctx.snapshot() else {
        return Ok(None);
    };
    let found = largest_current_node(snapshot, ctx.cursor_position())
        .and_then(|node| enclosing_function(node, profile));
    tracing::debug!(function = ?found, "enclosing function");
    Ok(found)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/structure/navigate.rs"]
mod tests;
