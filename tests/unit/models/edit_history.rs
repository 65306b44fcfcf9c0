use super::*;
use crate::models::cursor_set::CursorSet;
use crate::models::edit_op::{EditOp, Transaction};
use crate::models::position::Position;

fn tx(inserted: &str) -> Transaction {
    Transaction {
        ops: vec![EditOp::replace(
            0,
            Position::ZERO,
            String::new(),
            inserted.to_string(),
        )],
        cursors_before: CursorSet::new(Position::ZERO),
        cursors_after: CursorSet::new(Position::new(0, inserted.len())),
    }
}

#[test]
fn test_push_and_pop_undo() {
    let mut history = EditHistory::new();
    assert!(!history.can_undo());

    history.push(tx("a"));
    history.push(tx("b"));
    assert_eq!(history.undo_depth(), 2);

    let last = history.pop_undo().expect("undo entry");
    assert_eq!(last.ops[0].inserted, "b");
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_empty_transaction_is_ignored() {
    let mut history = EditHistory::new();
    let mut empty = tx("a");
    empty.ops.clear();
    history.push(empty);
    assert!(!history.can_undo());
}

#[test]
fn test_push_clears_redo() {
    let mut history = EditHistory::new();
    history.push(tx("a"));
    let undone = history.pop_undo().expect("undo entry");
    history.push_redo(undone);
    assert!(history.can_redo());

    history.push(tx("b"));
    assert!(!history.can_redo());
}

#[test]
fn test_depth_is_bounded() {
    let mut history = EditHistory::new().with_config(EditHistoryConfig {
        max_transactions: 2,
    });
    history.push(tx("a"));
    history.push(tx("b"));
    history.push(tx("c"));

    assert_eq!(history.undo_depth(), 2);
    assert_eq!(history.pop_undo().expect("c").ops[0].inserted, "c");
    assert_eq!(history.pop_undo().expect("b").ops[0].inserted, "b");
    assert!(history.pop_undo().is_none());
}
