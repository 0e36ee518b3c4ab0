//! Realtime notifications from the auction backend.
//!
//! # Architecture
//!
//! ```text
//!   Login view ──connect()──► RealtimeContext
//!                                  │ spawn_forever
//!                                  ▼
//!                      connection::run<PlatformTransport>
//!                        (Engine.IO handshake, ping/pong,
//!                         reconnect with backoff)
//!                                  │ SocketEvent
//!                                  ▼
//!                          RealtimeNotifier ──► NotificationSink
//!                                                (ToastContext)
//! ```
//!
//! Nothing is dialed until `connect()` is called, normally right after a
//! successful login.

mod connection;
mod context;
mod notifier;

#[cfg(not(target_arch = "wasm32"))]
mod transport_native;
#[cfg(not(target_arch = "wasm32"))]
pub use transport_native::NativeTransport as PlatformTransport;

#[cfg(target_arch = "wasm32")]
mod transport_wasm;
#[cfg(target_arch = "wasm32")]
pub use transport_wasm::WebTransport as PlatformTransport;

pub use connection::{
    run, run_session, socket_endpoint, ConnectionState, ReconnectConfig, SessionEnd, SocketEvent,
    Transport, DEFAULT_HEARTBEAT_TIMEOUT,
};
pub use context::{RealtimeContext, RealtimeProvider, SocketSlot};
pub use notifier::{
    NotificationSink, RealtimeConfig, RealtimeNotifier, MSG_CONNECTED, MSG_DISCONNECTED,
};
