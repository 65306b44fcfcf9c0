//! Undo/redo history.
//!
//! Every entry is a whole `Transaction`, so a multi-replacement edit such as a sibling swap
//! undoes and redoes as one step.

use super::edit_op::Transaction;

pub const DEFAULT_MAX_TRANSACTIONS: usize = 1000;

#[derive(Clone, Debug)]
pub struct EditHistoryConfig {
    pub max_transactions: usize,
}

impl Default for EditHistoryConfig {
    fn default() -> Self {
        Self {
            max_transactions: DEFAULT_MAX_TRANSACTIONS,
        }
    }
}

#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
    config: EditHistoryConfig,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EditHistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Records a new transaction. Any redo branch is discarded.
    pub fn push(&mut self, tx: Transaction) {
        if tx.ops.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(tx);

        let max = self.config.max_transactions.max(1);
        if self.undo_stack.len() > max {
            let overflow = self.undo_stack.len() - max;
            self.undo_stack.drain(..overflow);
        }
    }

    pub fn pop_undo(&mut self) -> Option<Transaction> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<Transaction> {
        self.redo_stack.pop()
    }

    pub(crate) fn push_redo(&mut self, tx: Transaction) {
        self.redo_stack.push(tx);
    }

    pub(crate) fn push_undo_keep_redo(&mut self, tx: Transaction) {
        self.undo_stack.push(tx);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
