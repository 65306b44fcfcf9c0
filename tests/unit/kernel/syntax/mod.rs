use super::*;
use crate::models::{Position, TextBuffer};
use ropey::Rope;

fn js(src: &str) -> SyntaxDocument {
    SyntaxDocument::new(LanguageId::JavaScript, &Rope::from_str(src), 0).expect("javascript syntax")
}

#[test]
fn test_snapshot_mirrors_tree_shape() {
    let doc = js("[1, 2, 3];");
    let snapshot = doc.snapshot();
    let root = snapshot.root();

    assert!(root.is_root());
    assert_eq!(root.kind(), "program");
    assert!(root.parent().is_none());
    assert_eq!(snapshot.generation(), 0);

    let statement = root.named_children().next().expect("statement");
    let array = statement.named_children().next().expect("array");
    assert_eq!(array.kind(), "array");
    assert_eq!(array.text(), "[1, 2, 3]");

    let items: Vec<_> = array.named_children().map(|n| n.text()).collect();
    assert_eq!(items, vec!["1", "2", "3"]);

    let tokens: Vec<_> = array.children().filter(|n| !n.is_named()).map(|n| n.kind()).collect();
    assert_eq!(tokens, vec!["[", ",", ",", "]"]);
}

#[test]
fn test_named_sibling_links_skip_anonymous_tokens() {
    let doc = js("[1, 2, 3];");
    let array = doc
        .snapshot()
        .root()
        .named_children()
        .next()
        .and_then(|s| s.named_children().next())
        .expect("array");

    let first = array.named_children().next().expect("first");
    assert!(first.prev_named_sibling().is_none());
    let second = first.next_named_sibling().expect("second");
    assert_eq!(second.text(), "2");
    assert_eq!(second.prev_named_sibling(), Some(first));

    // An anonymous comma still knows its named neighbours.
    let comma = array.children().find(|n| n.kind() == ",").expect("comma");
    assert_eq!(comma.prev_named_sibling(), Some(first));
    assert_eq!(comma.next_named_sibling(), Some(second));
}

#[test]
fn test_node_text_and_positions_are_bytes() {
    let doc = js("let s = \"é\";\nfoo(s);");
    let snapshot = doc.snapshot();
    let call = node_at(snapshot, Position::new(1, 0)).expect("identifier");
    assert_eq!(call.text(), "foo");
    assert_eq!(call.start(), Position::new(1, 0));

    let string = node_at(snapshot, Position::new(0, 8))
        .and_then(|n| n.parent())
        .expect("string");
    assert_eq!(string.kind(), "string");
    assert_eq!(string.text(), "\"é\"");
    assert_eq!(string.end(), Position::new(0, 12));
}

#[test]
fn test_incremental_edits_publish_new_generation() {
    let mut buffer = TextBuffer::from_text("[1, 2, 3];");
    let mut doc = SyntaxDocument::new(LanguageId::JavaScript, buffer.rope(), buffer.version())
        .expect("javascript syntax");

    buffer.set_text_in_range(
        crate::models::Range::new(Position::new(0, 4), Position::new(0, 5)),
        "foo(42)",
    );
    let ops = buffer.take_pending_edits();
    let ready = doc.apply_edits(buffer.rope(), &ops, buffer.version());

    assert_eq!(ready, TreeReady { generation: 1 });
    assert_eq!(doc.generation(), 1);
    let node = node_at(doc.snapshot(), Position::new(0, 8)).expect("number");
    assert_eq!(node.text(), "42");
    assert_eq!(doc.snapshot().source(), "[1, foo(42), 3];");
}

#[test]
fn test_every_language_parses() {
    for language in LanguageId::ALL {
        let doc = SyntaxDocument::new(language, &Rope::from_str(""), 0);
        assert!(doc.is_some(), "{:?} should load its grammar", language);
    }
}
