use crate::kernel::syntax::{node_at, SyntaxNode, SyntaxSnapshot};
use crate::models::Position;

/// Outermost ancestor sharing `node`'s start. Stops below the root.
pub fn largest_node_starting_at(node: SyntaxNode<'_>) -> SyntaxNode<'_> {
    let mut node = node;
    while let Some(parent) = node.parent() {
        if parent.is_root() || parent.start() != node.start() {
            break;
        }
        node = parent;
    }
    node
}

/// The construct "at" `pos`.
///
/// The raw query returns the token beginning at or after `pos`, so a cursor resting just past
/// a named node usually lands on the following punctuation. An anonymous hit with a named
/// predecessor resolves to that predecessor.
pub fn largest_current_node(snapshot: &SyntaxSnapshot, pos: Position) -> Option<SyntaxNode<'_>> {
    let mut node = node_at(snapshot, pos)?;
    if !node.is_named() {
        if let Some(prev) = node.prev_named_sibling() {
            node = prev;
        }
    }
    let node = largest_node_starting_at(node);
    tracing::trace!(%pos, ?node, "resolved current node");
    Some(node)
}

/// Node at `pos` collapsed to the outermost one sharing its start, without the anonymous
/// predecessor substitution of [`largest_current_node`].
pub fn largest_node_at(snapshot: &SyntaxSnapshot, pos: Position) -> Option<SyntaxNode<'_>> {
    node_at(snapshot, pos).map(largest_node_starting_at)
}

/// `node` itself when named, else its nearest named ancestor.
pub fn first_named_ancestor(node: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    let mut node = node;
    while !node.is_named() {
        node = node.parent()?;
    }
    Some(node)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/structure/canonical.rs"]
mod tests;
