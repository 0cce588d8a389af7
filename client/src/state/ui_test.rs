use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_eligibility_expanded() {
    let state = UiState::default();
    assert!(state.eligibility_expanded);
}

#[test]
fn ui_state_default_panels_closed() {
    let state = UiState::default();
    assert!(!state.filters_expanded);
    assert!(!state.favorites_open);
    assert!(!state.compare_open);
    assert!(state.detail_id.is_none());
}

// =============================================================
// Detail modal
// =============================================================

#[test]
fn show_and_close_details() {
    let mut state = UiState::default();
    state.show_details("pk1");
    assert_eq!(state.detail_id.as_deref(), Some("pk1"));
    state.close_details();
    assert!(state.detail_id.is_none());
}

#[test]
fn view_favorite_closes_panel_and_opens_details() {
    let mut state = UiState { favorites_open: true, ..UiState::default() };
    state.view_favorite("pk4");
    assert!(!state.favorites_open);
    assert_eq!(state.detail_id.as_deref(), Some("pk4"));
}
