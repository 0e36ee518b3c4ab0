//! Navigation guard.
//!
//! Evaluated synchronously before a page renders, from client-held session
//! state only. It is a UX gate: the backend still enforces access on every
//! API call.

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Allow,
    Redirect(Route),
}

impl Navigation {
    pub fn redirect_target(self) -> Option<Route> {
        match self {
            Navigation::Allow => None,
            Navigation::Redirect(to) => Some(to),
        }
    }
}

/// | authenticated | target | result           |
/// |---------------|--------|------------------|
/// | no            | login  | allow            |
/// | no            | other  | redirect → login |
/// | yes           | login  | redirect → home  |
/// | yes           | other  | allow            |
pub fn guard(is_authenticated: bool, target: &Route) -> Navigation {
    let to_login = matches!(target, Route::Login {});
    match (is_authenticated, to_login) {
        (false, false) => Navigation::Redirect(Route::Login {}),
        (true, true) => Navigation::Redirect(Route::Home {}),
        _ => Navigation::Allow,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
