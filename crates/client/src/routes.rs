//! Application routing configuration.

use dioxus::prelude::*;
use dioxus::router::RouterConfig;

use crate::guard::guard;
use crate::stores::UserContext;
use crate::views::{BaseLayout, Board, Home, Login};

// Every page renders inside BaseLayout, which runs the navigation guard
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(BaseLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/board")]
        Board {},
}

impl Route {
    /// Stable route name, independent of the path.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => "home",
            Route::Login {} => "login",
            Route::Board {} => "board",
        }
    }

    pub fn all() -> [Route; 3] {
        [Route::Home {}, Route::Login {}, Route::Board {}]
    }
}

/// Router that runs the navigation guard on every route change, before the
/// new page renders. Needs the user context above it.
#[component]
pub fn GuardedRouter() -> Element {
    let user = use_context::<UserContext>();

    rsx! {
        Router::<Route> {
            config: move || {
                RouterConfig::default().on_update(move |router| {
                    let target = router.current();
                    let authenticated = user.identity.peek().is_authenticated();
                    let redirect = guard(authenticated, &target).redirect_target()?;
                    crate::log_debug!("Guard redirect from '{}' to '{}'", target.name(), redirect.name());
                    Some(redirect.into())
                })
            },
        }
    }
}
