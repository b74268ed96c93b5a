use super::*;

#[test]
fn mounted_state_defaults() {
    let state = ViewState::mounted();
    assert_eq!(state.search_query, "");
    assert_eq!(state.region_filter, None);
    assert_eq!(state.filter_menu, MenuState::Closed);
    assert!(state.loading);
    assert_eq!(state.filter_label(), "filter by region");
}

#[test]
fn menu_walkthrough() {
    let state = ViewState::mounted();

    let state = state.apply(ViewEvent::ActivateFilterControl);
    assert_eq!(state.filter_menu, MenuState::Open);

    let state = state.apply(ViewEvent::ClickAway);
    assert_eq!(state.filter_menu, MenuState::Closed);

    let state = state
        .apply(ViewEvent::ActivateFilterControl)
        .apply(ViewEvent::SelectRegion(RegionOption::Europe));
    assert_eq!(state.filter_menu, MenuState::Closed);
    assert_eq!(state.region_filter, Some(Region::Europe));
    assert_eq!(state.filter_label(), "europe");
}

#[test]
fn activating_open_menu_again_is_noop() {
    let open = ViewState::mounted().apply(ViewEvent::ActivateFilterControl);
    let again = open.clone().apply(ViewEvent::ActivateFilterControl);
    assert_eq!(again, open);
}

#[test]
fn selecting_all_unsets_filter_and_closes() {
    let state = ViewState::mounted()
        .with_region_filter(Some(Region::Asia))
        .apply(ViewEvent::ActivateFilterControl)
        .apply(ViewEvent::SelectRegion(RegionOption::All));

    assert_eq!(state.region_filter, None);
    assert_eq!(state.filter_menu, MenuState::Closed);
}

#[test]
fn selection_while_closed_is_ignored() {
    let state = ViewState::mounted().apply(ViewEvent::SelectRegion(RegionOption::Africa));
    assert_eq!(state.region_filter, None);
    assert_eq!(state.filter_menu, MenuState::Closed);
}

#[test]
fn click_away_while_closed_keeps_state() {
    let state = ViewState::mounted().with_search_query("fi");
    assert_eq!(state.clone().apply(ViewEvent::ClickAway), state);
}

#[test]
fn search_change_replaces_query_only() {
    let state = ViewState::mounted()
        .apply(ViewEvent::ActivateFilterControl)
        .apply(ViewEvent::SearchChanged("fin".to_string()));

    assert_eq!(state.search_query, "fin");
    assert!(state.is_menu_open());
    assert!(state.loading);
}

#[test]
fn loading_elapsed_clears_flag() {
    let state = ViewState::mounted().apply(ViewEvent::LoadingElapsed);
    assert!(!state.loading);

    // 2 回目も false のまま
    let state = state.apply(ViewEvent::LoadingElapsed);
    assert!(!state.loading);
}
