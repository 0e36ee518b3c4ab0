//! Auction board: the active session, bidding, and admin closing controls.

use dioxus::prelude::*;
use fantasta_shared::{ApiError, AuctionSession};

use crate::api_client::ApiClient;
use crate::stores::{ToastContext, UserContext};

#[component]
pub fn Board() -> Element {
    let api = use_context::<ApiClient>();
    let user = use_context::<UserContext>();

    let mut session = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_active_session().await }
        }
    });

    let body = match &*session.read() {
        None => rsx! { p { class: "muted", "Loading session..." } },
        Some(Err(err)) => {
            let message = err.user_message();
            rsx! {
                p { class: "error", "{message}" }
                button { class: "btn", onclick: move |_| session.restart(), "Retry" }
            }
        }
        Some(Ok(None)) => rsx! {
            p { class: "muted", "No player is up for auction right now." }
            button { class: "btn", onclick: move |_| session.restart(), "Refresh" }
        },
        Some(Ok(Some(active))) => rsx! {
            SessionCard {
                session: active.clone(),
                is_admin: user.is_admin(),
                on_changed: move |_| session.restart(),
            }
        },
    };

    rsx! {
        div { class: "card board",
            h1 { "Auction board" }
            {body}
        }
    }
}

#[component]
fn SessionCard(session: AuctionSession, is_admin: bool, on_changed: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let user = use_context::<UserContext>();
    let toasts = use_context::<ToastContext>();

    let minimum = session.minimum_next_bid();
    let mut bid = use_signal(move || minimum.to_string());
    let mut busy = use_signal(|| false);

    let player = &session.player;
    let name = player.name.clone();
    let price = session.current_price;
    let bidder = session
        .current_bidder
        .clone()
        .unwrap_or_else(|| "nobody yet".to_string());
    let open = session.is_active();

    // Runs one admin/bid request and reports the outcome as a toast
    let run = move |label: &'static str, result: Result<AuctionSession, ApiError>| {
        match result {
            Ok(_) => {
                toasts.success(label);
                on_changed.call(());
            }
            Err(err) => {
                crate::log_error!("{} failed: {}", label, err);
                toasts.error(err.user_message());
            }
        }
    };

    rsx! {
        section { class: "session",
            h2 { "{name}" }
            p { class: "muted",
                {player.role.label()}
                if let Some(team) = &player.team {
                    " · {team}"
                }
            }
            p { class: "price", "€{price}" }
            p { "Highest bidder: {bidder}" }

            if open {
                form {
                    class: "bid-form",
                    onsubmit: {
                        let api = api.clone();
                        move |e: FormEvent| {
                            let api = api.clone();
                            async move {
                                e.prevent_default();
                                let Ok(price) = bid.read().trim().parse::<u32>() else {
                                    toasts.error("Enter a whole number");
                                    return;
                                };
                                if price < minimum {
                                    toasts.error(format!("Bid at least €{minimum}"));
                                    return;
                                }
                                busy.set(true);
                                let result = api.place_bid(&user.user_id(), price).await;
                                run("Bid placed", result);
                                busy.set(false);
                            }
                        }
                    },
                    input {
                        r#type: "number",
                        min: "{minimum}",
                        value: "{bid}",
                        oninput: move |e: FormEvent| bid.set(e.value()),
                    }
                    button { r#type: "submit", class: "btn btn-primary", disabled: busy(), "Bid" }
                }

                if is_admin {
                    div { class: "admin-actions",
                        button {
                            class: "btn",
                            disabled: busy(),
                            onclick: {
                                let api = api.clone();
                                move |_| {
                                    let api = api.clone();
                                    async move {
                                        busy.set(true);
                                        let result = api.declare_winner().await;
                                        run("Winner declared", result);
                                        busy.set(false);
                                    }
                                }
                            },
                            "Declare winner"
                        }
                        button {
                            class: "btn",
                            disabled: busy(),
                            onclick: {
                                let api = api.clone();
                                move |_| {
                                    let api = api.clone();
                                    async move {
                                        busy.set(true);
                                        let result = api.skip_session().await;
                                        run("Player skipped", result);
                                        busy.set(false);
                                    }
                                }
                            },
                            "Skip"
                        }
                    }
                }
            } else {
                p { class: "muted", "This auction is closed." }
            }
        }
    }
}
