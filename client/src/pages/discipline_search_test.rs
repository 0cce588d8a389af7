use super::*;

#[test]
fn heading_hidden_before_selection() {
    assert_eq!(discipline_heading("", 0), None);
    assert_eq!(discipline_heading("  ", 5), None);
}

#[test]
fn heading_pluralizes_count() {
    assert_eq!(discipline_heading("Medical", 0).as_deref(), Some("No universities offer Medical"));
    assert_eq!(discipline_heading("Medical", 1).as_deref(), Some("1 university offers Medical"));
    assert_eq!(discipline_heading("Engineering", 3).as_deref(), Some("3 universities offer Engineering"));
}
