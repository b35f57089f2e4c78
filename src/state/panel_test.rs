use super::*;

// =============================================================
// begin_load gating
// =============================================================

#[test]
fn default_panel_is_empty() {
    let state = PanelState::<Vec<String>>::default();
    assert_eq!(state.status, PanelStatus::Empty);
    assert_eq!(state.content, None);
    assert_eq!(state.error, None);
}

#[test]
fn begin_load_starts_a_fetch_from_empty() {
    let mut state = PanelState::<String>::default();
    assert!(state.begin_load());
    assert_eq!(state.status, PanelStatus::Loading);
}

#[test]
fn begin_load_refuses_while_loading() {
    let mut state = PanelState::<String>::default();
    assert!(state.begin_load());
    assert!(!state.begin_load());
    assert_eq!(state.status, PanelStatus::Loading);
}

#[test]
fn begin_load_refuses_once_loaded() {
    let mut state = PanelState::<String>::default();
    assert!(state.begin_load());
    state.complete("MKTAYIAKQR".to_owned());
    assert!(!state.begin_load());
    assert_eq!(state.status, PanelStatus::Loaded);
    assert_eq!(state.content.as_deref(), Some("MKTAYIAKQR"));
}

#[test]
fn begin_load_allows_retry_after_failure() {
    let mut state = PanelState::<String>::default();
    assert!(state.begin_load());
    state.fail("Unable to load the sequence.");
    assert!(state.begin_load());
    assert_eq!(state.status, PanelStatus::Loading);
    assert_eq!(state.error, None);
}

#[test]
fn repeated_expansion_triggers_exactly_one_fetch() {
    let mut state = PanelState::<Vec<i32>>::default();
    let mut fetches = 0;
    for _ in 0..5 {
        if state.begin_load() {
            fetches += 1;
        }
    }
    state.complete(vec![1]);
    for _ in 0..5 {
        if state.begin_load() {
            fetches += 1;
        }
    }
    assert_eq!(fetches, 1);
}

// =============================================================
// Outcome transitions
// =============================================================

#[test]
fn complete_stores_content_and_clears_error() {
    let mut state = PanelState::<Vec<i32>>::default();
    state.begin_load();
    state.complete(vec![1, 2, 3]);
    assert_eq!(state.status, PanelStatus::Loaded);
    assert_eq!(state.content, Some(vec![1, 2, 3]));
    assert_eq!(state.error, None);
}

#[test]
fn fail_stores_message_and_drops_content() {
    let mut state = PanelState::<Vec<i32>>::default();
    state.begin_load();
    state.fail("Unable to load ontology terms.");
    assert_eq!(state.status, PanelStatus::Failed);
    assert_eq!(state.content, None);
    assert_eq!(state.error.as_deref(), Some("Unable to load ontology terms."));
}

#[test]
fn reset_returns_to_empty_from_any_state() {
    let mut loaded = PanelState::<i32>::default();
    loaded.begin_load();
    loaded.complete(7);
    loaded.reset();
    assert_eq!(loaded, PanelState::default());

    let mut failed = PanelState::<i32>::default();
    failed.begin_load();
    failed.fail("boom");
    failed.reset();
    assert_eq!(failed, PanelState::default());
}
