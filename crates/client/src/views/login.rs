//! Login page: pick a nickname, the backend creates the user on first use.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::realtime::RealtimeContext;
use crate::stores::{ToastContext, UserContext};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let mut user = use_context::<UserContext>();
    let realtime = use_context::<RealtimeContext>();
    let toasts = use_context::<ToastContext>();
    let nav = use_navigator();

    let mut nickname = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    rsx! {
        div { class: "card login",
            h1 { "Fantasta" }
            p { class: "muted", "Join the auction room" }

            form {
                onsubmit: move |e| {
                    let api = api.clone();
                    async move {
                        e.stop_propagation();
                        e.prevent_default();
                        if is_submitting() {
                            return;
                        }

                        let name = nickname.read().trim().to_string();
                        if name.is_empty() {
                            toasts.error("Pick a nickname first");
                            return;
                        }

                        is_submitting.set(true);
                        match api.login_or_create_user(&name).await {
                            Ok(logged_in) => {
                                crate::log_info!("Logged in as '{}'", logged_in.name);
                                user.set_user(logged_in.id, logged_in.name, logged_in.is_admin);
                                realtime.connect();
                                nav.push(Route::Home {});
                            }
                            Err(err) => {
                                crate::log_error!("Login failed: {}", err);
                                toasts.error(err.user_message());
                            }
                        }
                        is_submitting.set(false);
                    }
                },
                label { r#for: "nickname", "Nickname" }
                input {
                    id: "nickname",
                    value: "{nickname}",
                    placeholder: "e.g. mister_x",
                    autocomplete: "off",
                    oninput: move |e: FormEvent| nickname.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting(),
                    if is_submitting() {
                        "Signing in…"
                    } else {
                        "Enter"
                    }
                }
            }
        }
    }
}
