//! The explicit editor state threaded through every structural operation.

use crate::kernel::language::LanguageId;
use crate::kernel::profile::{LanguageProfile, ProfileTable};
use crate::kernel::syntax::{node_at, SyntaxDocument, SyntaxNode, SyntaxSnapshot, TreeReady};
use crate::models::{Position, TextBuffer};
use std::path::Path;
use std::sync::Arc;

pub struct EditorContext {
    buffer: TextBuffer,
    language: Option<LanguageId>,
    syntax: Option<SyntaxDocument>,
    profiles: Arc<ProfileTable>,
    move_cursor_with_node: bool,
}

impl EditorContext {
    /// `language: None` is a plain-text buffer: every structural query resolves to nothing.
    pub fn new(text: &str, language: Option<LanguageId>, profiles: Arc<ProfileTable>) -> Self {
        let buffer = TextBuffer::from_text(text);
        let syntax = language.and_then(|lang| {
            let doc = SyntaxDocument::new(lang, buffer.rope(), buffer.version());
            if doc.is_none() {
                tracing::warn!(language = lang.language_id(), "grammar failed to load");
            }
            doc
        });

        Self {
            buffer,
            language,
            syntax,
            profiles,
            move_cursor_with_node: true,
        }
    }

    pub fn for_path(path: &Path, text: &str, profiles: Arc<ProfileTable>) -> Self {
        Self::new(text, LanguageId::from_path(path), profiles)
    }

    pub fn with_move_cursor_with_node(mut self, enabled: bool) -> Self {
        self.move_cursor_with_node = enabled;
        self
    }

    pub fn move_cursor_with_node(&self) -> bool {
        self.move_cursor_with_node
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn cursor_position(&self) -> Position {
        self.buffer.cursor_position()
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.buffer.set_cursor(pos);
    }

    pub fn language(&self) -> Option<LanguageId> {
        self.language
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Function-kind profile for this buffer's language, if it has one.
    pub fn profile(&self) -> Option<&LanguageProfile> {
        self.profiles.get(self.language?)
    }

    /// True when the published tree describes the current text.
    pub fn is_tree_current(&self) -> bool {
        self.syntax
            .as_ref()
            .is_some_and(|doc| doc.generation() == self.buffer.version())
    }

    /// The snapshot for the current text. A snapshot from an earlier generation is never
    /// handed out: callers must `reparse` after mutating.
    pub fn snapshot(&self) -> Option<&SyntaxSnapshot> {
        let doc = self.syntax.as_ref()?;
        if doc.generation() != self.buffer.version() {
            tracing::warn!(
                tree = doc.generation(),
                buffer = self.buffer.version(),
                "syntax snapshot is stale; reparse before querying"
            );
            return None;
        }
        Some(doc.snapshot())
    }

    pub fn node_at(&self, pos: Position) -> Option<SyntaxNode<'_>> {
        node_at(self.snapshot()?, pos)
    }

    /// Brings the tree up to date with the buffer.
    ///
    /// Buffers without a grammar acknowledge immediately; they have no tree to wait for.
    pub fn reparse(&mut self) -> TreeReady {
        let generation = self.buffer.version();
        let ops = self.buffer.take_pending_edits();

        match self.syntax.as_mut() {
            Some(doc) if doc.generation() != generation => {
                doc.apply_edits(self.buffer.rope(), &ops, generation)
            }
            _ => TreeReady { generation },
        }
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.buffer.undo();
        if undone {
            self.reparse();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.buffer.redo();
        if redone {
            self.reparse();
        }
        redone
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/context.rs"]
mod tests;
