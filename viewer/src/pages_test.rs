use super::*;

fn cursor(current: u32, total: u32) -> PageCursor {
    PageCursor { current, total }
}

#[test]
fn default_is_page_one_of_zero() {
    assert_eq!(PageCursor::default(), cursor(1, 0));
}

#[test]
fn previous_at_first_page_is_noop() {
    let mut c = cursor(1, 5);
    assert!(!c.previous());
    assert_eq!(c.current, 1);
}

#[test]
fn next_at_last_page_is_noop() {
    let mut c = cursor(5, 5);
    assert!(!c.next());
    assert_eq!(c.current, 5);
}

#[test]
fn navigation_with_no_pages_is_noop() {
    let mut c = PageCursor::default();
    assert!(!c.next());
    assert!(!c.previous());
    assert_eq!(c, cursor(1, 0));
}

#[test]
fn next_and_previous_step_by_one() {
    let mut c = cursor(2, 5);
    assert!(c.next());
    assert_eq!(c.current, 3);
    assert!(c.previous());
    assert!(c.previous());
    assert_eq!(c.current, 1);
}

#[test]
fn go_to_clamps_to_bounds() {
    let mut c = cursor(2, 5);
    assert!(c.go_to(99));
    assert_eq!(c.current, 5);
    assert!(c.go_to(0));
    assert_eq!(c.current, 1);
}

#[test]
fn set_total_reclamps_current() {
    let mut c = cursor(9, 10);
    c.set_total(3);
    assert_eq!(c, cursor(3, 3));
    c.set_total(0);
    assert_eq!(c, cursor(1, 0));
}

#[test]
fn index_is_zero_based() {
    assert_eq!(cursor(4, 9).index(), 3);
}

#[test]
fn index_of_deserialized_page_zero_saturates() {
    let cursor: PageCursor = serde_json::from_str(r#"{"current":0,"total":3}"#).unwrap();
    assert_eq!(cursor.index(), 0);
}

#[test]
fn label_reads_page_of_total() {
    assert_eq!(cursor(2, 7).label(), "Page 2 of 7");
}
