//! Base layout shared by every page.
//!
//! The router redirects before rendering on navigation; this layout covers
//! identity changes that happen without one.

use dioxus::prelude::*;

use crate::guard::guard;
use crate::stores::UserContext;
use crate::Route;

#[component]
pub fn BaseLayout() -> Element {
    let user = use_context::<UserContext>();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let redirect = guard(user.is_authenticated(), &route).redirect_target();

    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(to) = redirect {
            crate::log_debug!("Guard redirect to '{}'", to.name());
            nav.replace(to);
        }
    }));

    let nickname = user.nickname();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { class: "brand", to: Route::Home {}, "Fantasta" }
                if user.is_authenticated() {
                    span { class: "who",
                        "{nickname}"
                        if user.is_admin() {
                            span { class: "badge", "admin" }
                        }
                    }
                }
            }
            main { class: "app-main",
                if redirect.is_some() {
                    p { class: "muted", "Redirecting..." }
                } else {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
