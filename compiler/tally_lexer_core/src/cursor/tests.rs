use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_stops_at_eof() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), None);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_n_clamps() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), Some('d'));
    cursor.advance_n(10);
    assert_eq!(cursor.current(), None);
}

// === Positions ===

#[test]
fn original_pos_follows_slice_offsets() {
    let buf = SourceBuffer::new("(1 + 2)");
    let inner = buf.view().slice(1, 6);
    let mut cursor = inner.cursor();
    assert_eq!(cursor.original_pos(), 1);
    cursor.advance_n(2);
    assert_eq!(cursor.original_pos(), 3);
}

#[test]
fn original_pos_at_eof_is_view_end() {
    let buf = SourceBuffer::new("(1 + 2)");
    let inner = buf.view().slice(1, 6);
    let mut cursor = inner.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.original_pos(), 6);
}

// === Eating ===

#[test]
fn eat_whitespace_skips_unicode_spaces() {
    let buf = SourceBuffer::new(" \t\n\u{a0}7");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), Some('7'));
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_whitespace_at_eof() {
    let buf = SourceBuffer::new("   ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), None);
}

#[test]
fn eat_while_counts_consumed() {
    let buf = SourceBuffer::new("1234+5");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 4);
    assert_eq!(cursor.current(), Some('+'));
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 0);
}

// === Matching ===

#[test]
fn starts_with_matches_prefix() {
    let buf = SourceBuffer::new("**2");
    let cursor = buf.cursor();
    assert!(cursor.starts_with("*"));
    assert!(cursor.starts_with("**"));
    assert!(!cursor.starts_with("**2x"));
    assert!(!cursor.starts_with("/"));
}

#[test]
fn starts_with_empty_needle_never_matches() {
    let buf = SourceBuffer::new("abc");
    assert!(!buf.cursor().starts_with(""));
}

#[test]
fn starts_with_at_eof() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.starts_with("a"));
}
