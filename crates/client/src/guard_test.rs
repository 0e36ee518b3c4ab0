use super::*;

// =============================================================
// Transition table
// =============================================================

#[test]
fn anonymous_can_open_login() {
    assert_eq!(guard(false, &Route::Login {}), Navigation::Allow);
}

#[test]
fn anonymous_board_redirects_to_login() {
    assert_eq!(
        guard(false, &Route::Board {}),
        Navigation::Redirect(Route::Login {})
    );
}

#[test]
fn authenticated_login_redirects_home() {
    assert_eq!(
        guard(true, &Route::Login {}),
        Navigation::Redirect(Route::Home {})
    );
}

#[test]
fn authenticated_can_open_board_and_home() {
    assert_eq!(guard(true, &Route::Board {}), Navigation::Allow);
    assert_eq!(guard(true, &Route::Home {}), Navigation::Allow);
}

// =============================================================
// Properties over every route
// =============================================================

#[test]
fn anonymous_only_ever_reaches_login() {
    for route in Route::all() {
        let resolved = match guard(false, &route) {
            Navigation::Allow => route.clone(),
            Navigation::Redirect(to) => to,
        };
        assert_eq!(resolved.name(), "login", "from {}", route.name());
    }
}

#[test]
fn authenticated_never_lands_on_login() {
    for route in Route::all() {
        let resolved = match guard(true, &route) {
            Navigation::Allow => route.clone(),
            Navigation::Redirect(to) => to,
        };
        assert_ne!(resolved.name(), "login", "from {}", route.name());
    }
}

#[test]
fn redirect_targets_are_stable_after_one_hop() {
    for authenticated in [false, true] {
        for route in Route::all() {
            if let Navigation::Redirect(to) = guard(authenticated, &route) {
                assert_eq!(guard(authenticated, &to), Navigation::Allow);
            }
        }
    }
}

#[test]
fn route_names() {
    let names: Vec<_> = Route::all().iter().map(Route::name).collect();
    assert_eq!(names, ["home", "login", "board"]);
    assert_eq!(Route::Board {}.to_string(), "/board");
}

#[test]
fn redirect_target_only_for_redirects() {
    assert_eq!(guard(true, &Route::Board {}).redirect_target(), None);
    assert_eq!(
        guard(false, &Route::Home {}).redirect_target(),
        Some(Route::Login {})
    );
}
