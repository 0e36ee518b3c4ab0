//! Fantasta Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use fantasta_client::components::ToastHost;
use fantasta_client::realtime::RealtimeProvider;
use fantasta_client::stores::{ToastProvider, UserProvider};
use fantasta_client::routes::GuardedRouter;
use fantasta_client::{logging, ApiClient, ClientConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ClientConfig::from_env);
    use_context_provider(|| ApiClient::new().with_base_url(config.api_url.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UserProvider {
            ToastProvider {
                RealtimeProvider {
                    GuardedRouter {}
                    ToastHost {}
                }
            }
        }
    }
}
