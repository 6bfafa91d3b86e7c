use crate::TabNav;

#[test]
fn given_new_nav_when_inspected_then_first_tab_active() {
    let nav = TabNav::dashboard();

    assert_eq!(nav.active(), "overview");
    assert!(nav.is_active("overview"));
    assert_eq!(nav.content_id(), "overview-content");
}

#[test]
fn given_known_tab_when_selected_then_becomes_only_active() {
    let mut nav = TabNav::dashboard();

    assert!(nav.select("profile"));

    assert!(nav.is_active("profile"));
    let active_count = nav.tabs().filter(|tab| nav.is_active(tab)).count();
    assert_eq!(active_count, 1);
}

#[test]
fn given_unknown_tab_when_selected_then_ignored() {
    let mut nav = TabNav::dashboard();
    nav.select("profile");

    assert!(!nav.select("logout"));

    assert!(nav.is_active("profile"));
}

#[test]
fn given_active_tab_when_reselected_then_no_change_reported() {
    let mut nav = TabNav::dashboard();

    assert!(!nav.select("overview"));
}

#[test]
fn given_custom_tab_set_when_built_then_order_preserved() {
    let nav = TabNav::new(&["a", "b", "c"]);

    assert_eq!(nav.tabs().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}
