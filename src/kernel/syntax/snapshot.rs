//! Immutable, arena-backed copy of one parse generation.
//!
//! Every tree-sitter node (named and anonymous) gets a slot. Parent and sibling links are
//! `NodeId` keys into the same arena, never owning references, and a `SyntaxNode` handle
//! borrows the snapshot it came from, so handles cannot outlive their generation.

use crate::models::{Position, Range};
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use tree_sitter::Tree;

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone)]
struct NodeData {
    kind: &'static str,
    named: bool,
    range: Range,
    start_byte: usize,
    end_byte: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    named_children: Vec<NodeId>,
    prev_named: Option<NodeId>,
    next_named: Option<NodeId>,
}

impl NodeData {
    fn from_ts(node: tree_sitter::Node<'_>, parent: Option<NodeId>) -> Self {
        Self {
            kind: node.kind(),
            named: node.is_named(),
            range: Range::new(node.start_position().into(), node.end_position().into()),
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            parent,
            children: Vec::new(),
            named_children: Vec::new(),
            prev_named: None,
            next_named: None,
        }
    }
}

pub struct SyntaxSnapshot {
    generation: u64,
    source: String,
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl SyntaxSnapshot {
    pub fn from_tree(tree: &Tree, source: String, generation: u64) -> Self {
        let mut nodes: SlotMap<NodeId, NodeData> = SlotMap::with_key();
        let ts_root = tree.root_node();
        let root = nodes.insert(NodeData::from_ts(ts_root, None));

        let mut stack = vec![(ts_root, root)];
        while let Some((ts_node, id)) = stack.pop() {
            let mut children = Vec::with_capacity(ts_node.child_count());
            for i in 0..ts_node.child_count() {
                let Some(child) = ts_node.child(i) else {
                    continue;
                };
                let child_id = nodes.insert(NodeData::from_ts(child, Some(id)));
                children.push(child_id);
                stack.push((child, child_id));
            }

            link_named_siblings(&mut nodes, &children);
            let named_children: Vec<NodeId> = children
                .iter()
                .copied()
                .filter(|child| nodes[*child].named)
                .collect();

            let data = &mut nodes[id];
            data.children = children;
            data.named_children = named_children;
        }

        Self {
            generation,
            source,
            nodes,
            root,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            snapshot: self,
            id: self.root,
        }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id]
    }
}

fn link_named_siblings(nodes: &mut SlotMap<NodeId, NodeData>, children: &[NodeId]) {
    let mut prev: Option<NodeId> = None;
    for &child in children {
        nodes[child].prev_named = prev;
        if nodes[child].named {
            prev = Some(child);
        }
    }

    let mut next: Option<NodeId> = None;
    for &child in children.iter().rev() {
        nodes[child].next_named = next;
        if nodes[child].named {
            next = Some(child);
        }
    }
}

/// Borrowed handle to one node of a `SyntaxSnapshot`.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    snapshot: &'a SyntaxSnapshot,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    fn wrap(&self, id: Option<NodeId>) -> Option<SyntaxNode<'a>> {
        id.map(|id| SyntaxNode {
            snapshot: self.snapshot,
            id,
        })
    }

    fn data(&self) -> &'a NodeData {
        self.snapshot.data(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Grammar symbol name, e.g. `array` or `,`.
    pub fn kind(&self) -> &'static str {
        self.data().kind
    }

    pub fn is_named(&self) -> bool {
        self.data().named
    }

    pub fn range(&self) -> Range {
        self.data().range
    }

    pub fn start(&self) -> Position {
        self.data().range.start
    }

    pub fn end(&self) -> Position {
        self.data().range.end
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        let data = self.data();
        data.start_byte..data.end_byte
    }

    pub fn text(&self) -> &'a str {
        self.snapshot
            .source
            .get(self.byte_range())
            .unwrap_or_default()
    }

    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    pub fn parent(&self) -> Option<SyntaxNode<'a>> {
        self.wrap(self.data().parent)
    }

    pub fn prev_named_sibling(&self) -> Option<SyntaxNode<'a>> {
        self.wrap(self.data().prev_named)
    }

    pub fn next_named_sibling(&self) -> Option<SyntaxNode<'a>> {
        self.wrap(self.data().next_named)
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        let snapshot = self.snapshot;
        self.data()
            .children
            .iter()
            .map(move |&id| SyntaxNode { snapshot, id })
    }

    pub fn named_children(&self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        let snapshot = self.snapshot;
        self.data()
            .named_children
            .iter()
            .map(move |&id| SyntaxNode { snapshot, id })
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.snapshot, other.snapshot)
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.kind(), self.range())
    }
}
