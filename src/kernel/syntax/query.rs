use super::snapshot::{SyntaxNode, SyntaxSnapshot};
use crate::models::Position;

/// Smallest node whose span contains `pos`, or `None` when that node is the root.
///
/// A node ending exactly at `pos` does not contain it, so a cursor sitting right after a
/// construct resolves to whatever follows (often an anonymous token). Zero-width nodes never
/// match.
pub fn node_at(snapshot: &SyntaxSnapshot, pos: Position) -> Option<SyntaxNode<'_>> {
    let mut node = snapshot.root();

    'descend: loop {
        for child in node.children() {
            if child.start() > pos {
                break;
            }
            if child.range().contains(pos) {
                node = child;
                continue 'descend;
            }
        }
        break;
    }

    if node.is_root() {
        return None;
    }
    Some(node)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/syntax/query.rs"]
mod tests;
