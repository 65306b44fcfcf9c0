use super::*;
use crate::models::Range;

fn js(text: &str) -> EditorContext {
    EditorContext::new(
        text,
        Some(LanguageId::JavaScript),
        Arc::new(ProfileTable::builtin()),
    )
}

#[test]
fn plain_text_has_no_tree() {
    let ctx = EditorContext::new("[1, 2]", None, Arc::new(ProfileTable::builtin()));
    assert!(ctx.snapshot().is_none());
    assert!(ctx.node_at(Position::new(0, 1)).is_none());
    assert!(ctx.profile().is_none());
}

#[test]
fn for_path_picks_language_from_extension() {
    let profiles = Arc::new(ProfileTable::builtin());
    let ctx = EditorContext::for_path(Path::new("lib.rs"), "fn main() {}", profiles.clone());
    assert_eq!(ctx.language(), Some(LanguageId::Rust));
    assert!(ctx.profile().is_some());

    let ctx = EditorContext::for_path(Path::new("notes.txt"), "hello", profiles);
    assert_eq!(ctx.language(), None);
}

#[test]
fn snapshot_goes_stale_on_mutation_until_reparse() {
    let mut ctx = js("[1, 2, 3];");
    assert!(ctx.is_tree_current());
    assert_eq!(
        ctx.node_at(Position::new(0, 4)).map(|n| n.text().to_string()),
        Some("2".to_string())
    );

    ctx.buffer_mut()
        .set_text_in_range(Range::new(Position::new(0, 4), Position::new(0, 5)), "22");
    assert!(!ctx.is_tree_current());
    assert!(ctx.snapshot().is_none());

    let ready = ctx.reparse();
    assert_eq!(ready.generation, ctx.buffer().version());
    assert!(ctx.is_tree_current());
    assert_eq!(
        ctx.node_at(Position::new(0, 4)).map(|n| n.text().to_string()),
        Some("22".to_string())
    );
}

#[test]
fn reparse_without_changes_is_cheap_acknowledgment() {
    let mut ctx = js("[1];");
    let ready = ctx.reparse();
    assert_eq!(ready.generation, 0);
    assert!(ctx.is_tree_current());
}

#[test]
fn undo_and_redo_keep_tree_current() {
    let mut ctx = js("[1, 2, 3];");
    ctx.buffer_mut()
        .set_text_in_range(Range::new(Position::new(0, 1), Position::new(0, 2)), "9");
    ctx.reparse();

    assert!(ctx.undo());
    assert_eq!(ctx.text(), "[1, 2, 3];");
    assert!(ctx.is_tree_current());

    assert!(ctx.redo());
    assert_eq!(ctx.text(), "[9, 2, 3];");
    assert!(ctx.is_tree_current());
    assert_eq!(
        ctx.node_at(Position::new(0, 1)).map(|n| n.text().to_string()),
        Some("9".to_string())
    );
}
