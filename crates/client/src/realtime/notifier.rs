//! Turns realtime socket events into user-facing notifications.

use std::rc::Rc;

use fantasta_shared::ServerEvent;

use super::connection::{ConnectionState, SocketEvent};
use crate::stores::{ToastContext, ToastKind};

pub const MSG_CONNECTED: &str = "🟢 Connected to server";
pub const MSG_DISCONNECTED: &str = "🔴 Disconnected from server";

/// Where notifications go. Injected into the notifier so it has no
/// dependency on how toasts are stored.
pub trait NotificationSink {
    fn notify(&self, message: &str, kind: ToastKind);
}

impl NotificationSink for ToastContext {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.add(message, crate::stores::DEFAULT_TOAST_DURATION, kind);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn notify(&self, message: &str, kind: ToastKind) {
        (**self).notify(message, kind);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealtimeConfig {
    /// Toast auction events pushed by the server
    pub domain_events: bool,
}

pub struct RealtimeNotifier<S> {
    sink: S,
    config: RealtimeConfig,
}

impl<S: NotificationSink> RealtimeNotifier<S> {
    pub fn new(sink: S, config: RealtimeConfig) -> Self {
        Self { sink, config }
    }

    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.sink.notify(message, kind);
    }

    pub fn handle(&self, event: &SocketEvent) {
        match event {
            SocketEvent::StateChanged(ConnectionState::Connected) => {
                crate::log_info!("{}", MSG_CONNECTED);
                self.notify(MSG_CONNECTED, ToastKind::Success);
            }
            SocketEvent::StateChanged(ConnectionState::Disconnected) => {
                crate::log_info!("{}", MSG_DISCONNECTED);
                self.notify(MSG_DISCONNECTED, ToastKind::Error);
            }
            SocketEvent::StateChanged(ConnectionState::Failed { reason }) => {
                crate::log_warn!("Realtime connection gave up: {}", reason);
            }
            SocketEvent::StateChanged(_) => {}
            SocketEvent::Server(server_event) => self.handle_server_event(server_event),
        }
    }

    fn handle_server_event(&self, event: &ServerEvent) {
        crate::log_debug!("Server event: {:?}", event);
        if !self.config.domain_events {
            return;
        }
        let message = match event {
            ServerEvent::NewSession { .. } => "New auction started!".to_string(),
            ServerEvent::NewBid { bid: Some(bid) } => format!("New bid: €{}", bid.price),
            ServerEvent::NewBid { bid: None } => "New bid placed".to_string(),
            ServerEvent::WinnerDeclared { .. } => "Auction closed!".to_string(),
            ServerEvent::Other { .. } => return,
        };
        self.notify(&message, ToastKind::Info);
    }
}

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;
