use super::*;

fn p(row: usize, column: usize) -> Position {
    Position::new(row, column)
}

fn r(start: usize, end: usize) -> Range {
    Range::new(p(0, start), p(0, end))
}

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor_position(), p(0, 0));

    buffer.set_cursor(p(1, 2));
    assert_eq!(buffer.cursor_position(), p(1, 2));
}

#[test]
fn test_positions_clip_to_line_ends() {
    let buffer = TextBuffer::from_text("abc\r\nde\n");
    assert_eq!(buffer.line_len_bytes(0), 4);
    assert_eq!(buffer.line_len_bytes(1), 2);
    assert_eq!(buffer.clip_position(p(0, 10)), p(0, 4));
    assert_eq!(buffer.clip_position(p(9, 9)), p(2, 0));
}

#[test]
fn test_crlf_carriage_return_is_addressable() {
    let mut buffer = TextBuffer::from_text("// a\r\n// bb\r\n");
    assert_eq!(buffer.line_len_bytes(0), 5);
    assert_eq!(buffer.clip_position(p(0, 9)), p(0, 5));
    assert_eq!(
        buffer.text_in_range(Range::new(p(0, 0), p(0, 5))),
        "// a\r"
    );

    assert!(buffer.set_text_in_range(Range::new(p(0, 0), p(0, 5)), "// c\r"));
    assert_eq!(buffer.text(), "// c\r\n// bb\r\n");
    assert_eq!(buffer.byte_to_pos(buffer.pos_to_byte(p(1, 6))), p(1, 6));
}

#[test]
fn test_multibyte_transaction_uses_byte_columns() {
    let mut buffer = TextBuffer::from_text("[\"é\", xy, 1]");
    assert_eq!(buffer.line_len_bytes(0), 13);
    buffer.set_cursor(p(0, 7));

    assert!(buffer.transact(vec![
        Replacement::new(r(7, 9), "\"é\""),
        Replacement::new(r(1, 5), "xy"),
    ]));
    assert_eq!(buffer.text(), "[xy, \"é\", 1]");
    assert_eq!(buffer.cursor_position(), p(0, 5));

    assert!(buffer.undo());
    assert_eq!(buffer.text(), "[\"é\", xy, 1]");
}

#[test]
fn test_pos_byte_round_trip() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_byte(p(0, 0)), 0);
    assert_eq!(buffer.pos_to_byte(p(1, 0)), 6);
    assert_eq!(buffer.pos_to_byte(p(1, 3)), 9);
    assert_eq!(buffer.byte_to_pos(9), p(1, 3));
}

#[test]
fn test_text_in_range_uses_byte_columns() {
    let buffer = TextBuffer::from_text("[\"é\", b]");
    assert_eq!(buffer.text_in_range(r(1, 5)), "\"é\"");
    assert_eq!(buffer.text_in_range(r(7, 8)), "b");
}

#[test]
fn test_set_text_in_range_tracks_cursor() {
    let mut buffer = TextBuffer::from_text("[a, bcd, ef]");
    buffer.set_cursor(p(0, 9));

    assert!(buffer.set_text_in_range(r(4, 7), "x"));
    assert_eq!(buffer.text(), "[a, x, ef]");
    assert_eq!(buffer.cursor_position(), p(0, 7));
    assert_eq!(buffer.version(), 1);
}

#[test]
fn test_transaction_uses_pre_edit_coordinates() {
    let mut buffer = TextBuffer::from_text("[a, bc, def]");
    let applied = buffer.transact(vec![
        Replacement::new(r(4, 6), "def"),
        Replacement::new(r(8, 11), "bc"),
    ]);

    assert!(applied);
    assert_eq!(buffer.text(), "[a, def, bc]");
    assert_eq!(buffer.history().undo_depth(), 1);
}

#[test]
fn test_transaction_rejects_overlaps() {
    let mut buffer = TextBuffer::from_text("abcdef");
    let applied = buffer.transact(vec![
        Replacement::new(r(0, 3), "x"),
        Replacement::new(r(2, 5), "y"),
    ]);

    assert!(!applied);
    assert_eq!(buffer.text(), "abcdef");
    assert_eq!(buffer.version(), 0);
}

#[test]
fn test_undo_redo_whole_transaction() {
    let mut buffer = TextBuffer::from_text("[1, 2, 3]");
    buffer.set_cursor(p(0, 1));
    buffer.transact(vec![
        Replacement::new(r(1, 2), "2"),
        Replacement::new(r(4, 5), "1"),
    ]);
    assert_eq!(buffer.text(), "[2, 1, 3]");
    buffer.set_cursor(p(0, 4));

    assert!(buffer.undo());
    assert_eq!(buffer.text(), "[1, 2, 3]");
    assert_eq!(buffer.cursor_position(), p(0, 1));

    assert!(buffer.redo());
    assert_eq!(buffer.text(), "[2, 1, 3]");
    assert!(!buffer.can_redo());
    assert!(!buffer.redo());
}

#[test]
fn test_pending_edits_are_drained() {
    let mut buffer = TextBuffer::from_text("ab");
    buffer.set_text_in_range(r(0, 1), "xyz");
    buffer.undo();

    let pending = buffer.take_pending_edits();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].inserted, "xyz");
    assert_eq!(pending[1].deleted, "xyz");
    assert!(buffer.take_pending_edits().is_empty());
}

#[test]
fn test_write_to() {
    let buffer = TextBuffer::from_text("fn main() {}\n");
    let mut out = Vec::new();
    buffer.write_to(&mut out).expect("write");
    assert_eq!(out, b"fn main() {}\n");
}
