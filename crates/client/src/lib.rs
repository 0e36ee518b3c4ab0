//! Fantasta Client - Dioxus application
//!
//! Thin client for the fantasta auction backend: session identity, toast
//! notifications, a REST client, realtime socket notifications and a
//! guarded router.

pub mod logging;

pub mod api_client;
pub mod config;
pub mod guard;
pub mod realtime;
pub mod routes;
pub mod storage;
pub mod stores;
pub mod timer;

pub mod components;
pub mod views;

pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use routes::Route;
