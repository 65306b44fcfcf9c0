use super::*;

fn p(row: usize, column: usize) -> Position {
    Position::new(row, column)
}

#[test]
fn positions_order_by_row_then_column() {
    assert!(p(0, 9) < p(1, 0));
    assert!(p(1, 2) < p(1, 3));
    assert_eq!(p(2, 4), p(2, 4));
    assert_eq!([p(1, 0), p(0, 5), p(0, 1)].iter().max(), Some(&p(1, 0)));
}

#[test]
fn advance_counts_bytes_and_newlines() {
    assert_eq!(p(0, 3).advance("abc"), p(0, 6));
    assert_eq!(p(0, 3).advance("a\nbc"), p(1, 2));
    assert_eq!(p(2, 1).advance(""), p(2, 1));
    assert_eq!(p(0, 0).advance("é"), p(0, 2));
}

#[test]
fn range_new_normalizes_and_contains_is_half_open() {
    let range = Range::new(p(0, 7), p(0, 4));
    assert_eq!(range.start, p(0, 4));
    assert_eq!(range.end, p(0, 7));
    assert!(range.contains(p(0, 4)));
    assert!(range.contains(p(0, 6)));
    assert!(!range.contains(p(0, 7)));
    assert!(Range::empty(p(0, 1)).is_empty());
}

#[test]
fn intersects_ignores_touching_ranges() {
    let a = Range::new(p(0, 1), p(0, 4));
    let b = Range::new(p(0, 4), p(0, 6));
    let c = Range::new(p(0, 3), p(0, 5));
    assert!(!a.intersects(&b));
    assert!(a.intersects(&c));
    assert!(c.intersects(&b));
}

#[test]
fn adjust_keeps_points_before_and_at_start() {
    let old = Range::new(p(0, 4), p(0, 7));
    let new_end = p(0, 5);
    assert_eq!(p(0, 2).adjust_for_edit(old, new_end), p(0, 2));
    assert_eq!(p(0, 4).adjust_for_edit(old, new_end), p(0, 4));
}

#[test]
fn adjust_collapses_inside_and_end_points_to_new_end() {
    let old = Range::new(p(0, 4), p(0, 7));
    let new_end = p(0, 6);
    assert_eq!(p(0, 5).adjust_for_edit(old, new_end), p(0, 6));
    assert_eq!(p(0, 7).adjust_for_edit(old, new_end), p(0, 6));
}

#[test]
fn adjust_shifts_points_after_the_range() {
    let old = Range::new(p(0, 1), p(0, 2));
    assert_eq!(p(0, 5).adjust_for_edit(old, p(0, 4)), p(0, 7));
    assert_eq!(p(3, 5).adjust_for_edit(old, p(0, 4)), p(3, 5));

    let multiline = Range::new(p(0, 1), p(2, 3));
    assert_eq!(p(2, 8).adjust_for_edit(multiline, p(0, 2)), p(0, 7));
    assert_eq!(p(4, 1).adjust_for_edit(multiline, p(0, 2)), p(2, 1));
}

#[test]
fn adjust_moves_point_at_insertion_site() {
    let insertion = Range::empty(p(0, 3));
    assert_eq!(p(0, 3).adjust_for_edit(insertion, p(0, 5)), p(0, 5));
}

#[test]
fn converts_to_and_from_tree_sitter_points() {
    let point: tree_sitter::Point = p(4, 2).into();
    assert_eq!(point.row, 4);
    assert_eq!(point.column, 2);
    assert_eq!(Position::from(point), p(4, 2));
}
