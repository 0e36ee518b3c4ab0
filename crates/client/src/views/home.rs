use dioxus::prelude::*;
use fantasta_shared::PlayerRole;

use crate::api_client::ApiClient;
use crate::realtime::RealtimeContext;
use crate::stores::{ToastContext, UserContext};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut user = use_context::<UserContext>();
    let realtime = use_context::<RealtimeContext>();
    let nav = use_navigator();

    let nickname = user.nickname();
    let state = realtime.state();

    rsx! {
        div { class: "card home",
            h1 { "Welcome, {nickname}" }
            p { class: "muted",
                if state.is_connected() {
                    "Live updates on"
                } else {
                    "Live updates off"
                }
            }

            div { class: "actions",
                Link { class: "btn btn-primary", to: Route::Board {}, "Go to the auction board" }
                button {
                    class: "btn",
                    onclick: move |_| {
                        crate::log_info!("Logging out '{}'", user.nickname());
                        realtime.disconnect();
                        user.clear();
                        nav.replace(Route::Login {});
                    },
                    "Log out"
                }
            }

            if user.is_admin() {
                LaunchPanel {}
            }
        }
    }
}

/// Admin controls to put a random player of a given role up for auction.
#[component]
fn LaunchPanel() -> Element {
    let api = use_context::<ApiClient>();
    let toasts = use_context::<ToastContext>();
    let nav = use_navigator();
    let mut pending = use_signal(|| None::<PlayerRole>);

    rsx! {
        section { class: "launch",
            h2 { "Launch a player" }
            div { class: "role-grid",
                for role in PlayerRole::ALL {
                    button {
                        key: "{role:?}",
                        class: "btn",
                        disabled: pending().is_some(),
                        onclick: {
                            let api = api.clone();
                            move |_| {
                                let api = api.clone();
                                async move {
                                    pending.set(Some(role));
                                    match api.launch_player(role).await {
                                        Ok(session) => {
                                            toasts.success(format!("{} is up for auction", session.player.name));
                                            nav.push(Route::Board {});
                                        }
                                        Err(err) => {
                                            crate::log_error!("Launch {} failed: {}", role.code(), err);
                                            toasts.error(err.user_message());
                                        }
                                    }
                                    pending.set(None);
                                }
                            }
                        },
                        {role.label()}
                    }
                }
            }
        }
    }
}
