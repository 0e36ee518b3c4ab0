//! Realtime context: owns the single socket connection of the app.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures_channel::oneshot;
use futures_util::future::{select, Either};

use super::connection::{self, socket_endpoint, ConnectionState, ReconnectConfig, SocketEvent};
use super::notifier::{RealtimeConfig, RealtimeNotifier};
use super::PlatformTransport;
use crate::config::ClientConfig;
use crate::stores::{ToastContext, UserContext};

/// Connection state plus the handle that stops the running loop.
#[derive(Debug, Default)]
pub struct SocketSlot {
    state: ConnectionState,
    stop: Option<oneshot::Sender<()>>,
}

impl SocketSlot {
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn set_state(&mut self, state: ConnectionState) {
        self.state = state;
    }

    /// Claim the slot for a new connection loop. Returns the loop's stop
    /// signal, or `None` while another loop is up or being attempted.
    pub fn begin(&mut self) -> Option<oneshot::Receiver<()>> {
        if self.state.is_active() {
            return None;
        }
        let (stop_tx, stop_rx) = oneshot::channel();
        self.stop = Some(stop_tx);
        self.state = ConnectionState::Connecting;
        Some(stop_rx)
    }

    /// Stop the running loop and mark the slot disconnected right away, so
    /// an immediate `begin` succeeds. Returns whether a live connection was
    /// dropped.
    pub fn stop(&mut self) -> bool {
        let Some(stop) = self.stop.take() else {
            return false;
        };
        let _ = stop.send(());
        let was_connected = self.state.is_connected();
        self.state = ConnectionState::Disconnected;
        was_connected
    }
}

/// Realtime context provided to the app
#[derive(Clone, Copy)]
pub struct RealtimeContext {
    slot: Signal<SocketSlot>,
    config: Signal<ClientConfig>,
    toasts: ToastContext,
}

impl RealtimeContext {
    /// Open the socket. No-op while a connection is up or being attempted.
    pub fn connect(&self) {
        let mut slot = self.slot;
        if slot.peek().state().is_active() {
            crate::log_debug!("Realtime socket already active");
            return;
        }

        let config = self.config.peek().clone();
        let url = match socket_endpoint(&config.socket_url) {
            Ok(url) => url,
            Err(e) => {
                crate::log_error!("Cannot open realtime socket: {:#}", e);
                slot.write().set_state(ConnectionState::Failed {
                    reason: e.to_string(),
                });
                return;
            }
        };

        let Some(stop_rx) = slot.write().begin() else {
            return;
        };

        let notifier = self.notifier();
        spawn_forever(async move {
            let on_event = move |event: SocketEvent| {
                if let SocketEvent::StateChanged(next) = &event {
                    slot.write().set_state(next.clone());
                }
                notifier.handle(&event);
            };

            let run = Box::pin(connection::run::<PlatformTransport>(
                url,
                ReconnectConfig::default(),
                on_event,
            ));

            // Stop is polled first so a stopped loop never reports again
            if let Either::Left(_) = select(stop_rx, run).await {
                crate::log_info!("Realtime socket closed by client");
            }
        });
    }

    /// Close the socket and stop reconnecting.
    pub fn disconnect(&self) {
        let mut slot = self.slot;
        let was_connected = slot.write().stop();
        if was_connected {
            self.notifier()
                .handle(&SocketEvent::StateChanged(ConnectionState::Disconnected));
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.slot.read().state().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.slot.read().state().is_connected()
    }

    fn notifier(&self) -> RealtimeNotifier<ToastContext> {
        RealtimeNotifier::new(
            self.toasts,
            RealtimeConfig {
                domain_events: self.config.peek().domain_events,
            },
        )
    }
}

/// Provider component for the realtime socket. Needs the toast and user
/// contexts above it.
#[component]
pub fn RealtimeProvider(children: Element) -> Element {
    let toasts = use_context::<ToastContext>();
    let user = use_context::<UserContext>();
    let client_config = use_context::<ClientConfig>();

    let slot = use_signal(SocketSlot::default);
    let config = use_signal(|| client_config);

    let realtime = use_context_provider(|| RealtimeContext {
        slot,
        config,
        toasts,
    });

    // A session restored from storage reconnects without a new login
    use_hook(move || {
        if user.identity.peek().is_authenticated() {
            realtime.connect();
        }
    });

    children
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
