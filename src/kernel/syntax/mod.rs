//! Syntax support (in-process): parsing and per-generation tree snapshots.

mod query;
mod snapshot;

pub use query::node_at;
pub use snapshot::{NodeId, SyntaxNode, SyntaxSnapshot};

use crate::kernel::language::LanguageId;
use crate::models::EditOp;
use ropey::Rope;
use tree_sitter::{InputEdit, Parser, Tree};

/// Acknowledgment that the tree has caught up with the buffer at `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeReady {
    pub generation: u64,
}

pub struct SyntaxDocument {
    language: LanguageId,
    parser: Parser,
    tree: Tree,
    snapshot: SyntaxSnapshot,
}

impl SyntaxDocument {
    pub fn new(language: LanguageId, rope: &Rope, generation: u64) -> Option<Self> {
        let mut parser = Parser::new();
        set_parser_language(&mut parser, language)?;

        let tree = parse_rope(&mut parser, rope, None)?;
        let snapshot = SyntaxSnapshot::from_tree(&tree, rope.to_string(), generation);
        tracing::debug!(
            language = language.language_id(),
            nodes = snapshot.len(),
            "syntax document created"
        );

        Some(Self {
            language,
            parser,
            tree,
            snapshot,
        })
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn snapshot(&self) -> &SyntaxSnapshot {
        &self.snapshot
    }

    pub fn generation(&self) -> u64 {
        self.snapshot.generation()
    }

    /// Full reparse, discarding the previous tree.
    pub fn reparse(&mut self, rope: &Rope, generation: u64) -> TreeReady {
        if let Some(tree) = parse_rope(&mut self.parser, rope, None) {
            self.tree = tree;
        }
        self.publish(rope, generation)
    }

    /// Feeds `ops` (in application order) to the old tree and reparses incrementally.
    pub fn apply_edits(&mut self, rope: &Rope, ops: &[EditOp], generation: u64) -> TreeReady {
        if ops.is_empty() {
            return self.publish(rope, generation);
        }

        for op in ops {
            self.tree.edit(&build_input_edit(op));
        }

        match parse_rope(&mut self.parser, rope, Some(&self.tree)) {
            Some(tree) => {
                self.tree = tree;
                self.publish(rope, generation)
            }
            None => self.reparse(rope, generation),
        }
    }

    fn publish(&mut self, rope: &Rope, generation: u64) -> TreeReady {
        self.snapshot = SyntaxSnapshot::from_tree(&self.tree, rope.to_string(), generation);
        tracing::debug!(generation, nodes = self.snapshot.len(), "syntax tree ready");
        TreeReady { generation }
    }
}

fn set_parser_language(parser: &mut Parser, language: LanguageId) -> Option<()> {
    match language {
        LanguageId::Rust => parser.set_language(tree_sitter_rust::language()).ok(),
        LanguageId::Go => parser.set_language(tree_sitter_go::language()).ok(),
        LanguageId::Python => parser.set_language(tree_sitter_python::language()).ok(),
        LanguageId::C => parser.set_language(tree_sitter_c::language()).ok(),
        LanguageId::Cpp => parser.set_language(tree_sitter_cpp::language()).ok(),
        LanguageId::Java => parser.set_language(tree_sitter_java::language()).ok(),
        LanguageId::JavaScript | LanguageId::Jsx => parser
            .set_language(tree_sitter_javascript::language())
            .ok(),
        LanguageId::TypeScript => parser
            .set_language(tree_sitter_typescript::language_typescript())
            .ok(),
        LanguageId::Tsx => parser
            .set_language(tree_sitter_typescript::language_tsx())
            .ok(),
        LanguageId::Json => parser.set_language(tree_sitter_json::language()).ok(),
        LanguageId::Css => parser.set_language(tree_sitter_css::language()).ok(),
        LanguageId::Html => parser.set_language(tree_sitter_html::language()).ok(),
        LanguageId::Toml => parser.set_language(tree_sitter_toml::language()).ok(),
        LanguageId::Bash => parser.set_language(tree_sitter_bash::language()).ok(),
    }
}

fn parse_rope(parser: &mut Parser, rope: &Rope, old_tree: Option<&Tree>) -> Option<Tree> {
    let mut cache = RopeChunkCache::new(rope);
    parser.parse_with(
        &mut |byte_offset, _| cache.bytes_from(byte_offset),
        old_tree,
    )
}

struct RopeChunkCache<'a> {
    rope: &'a Rope,
    chunk: &'a str,
    start: usize,
    end: usize,
}

impl<'a> RopeChunkCache<'a> {
    fn new(rope: &'a Rope) -> Self {
        Self {
            rope,
            chunk: "",
            start: 0,
            end: 0,
        }
    }

    fn bytes_from(&mut self, byte_offset: usize) -> &'a [u8] {
        if byte_offset >= self.rope.len_bytes() {
            return &[];
        }

        if byte_offset < self.start || byte_offset >= self.end {
            let (chunk, chunk_start, _, _) = self.rope.chunk_at_byte(byte_offset);
            self.chunk = chunk;
            self.start = chunk_start;
            self.end = chunk_start + chunk.len();
        }

        let rel = byte_offset.saturating_sub(self.start);
        &self.chunk.as_bytes()[rel..]
    }
}

fn build_input_edit(op: &EditOp) -> InputEdit {
    InputEdit {
        start_byte: op.start_byte,
        old_end_byte: op.old_end_byte(),
        new_end_byte: op.new_end_byte(),
        start_position: op.start.into(),
        old_end_position: op.old_end().into(),
        new_end_position: op.new_end().into(),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/syntax/mod.rs"]
mod tests;
