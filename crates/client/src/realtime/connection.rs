//! Socket.IO connection loop with auto-reconnect.
//!
//! The loop is generic over [`Transport`] so the platform WebSocket is the
//! only part that differs between web and desktop.

use std::time::Duration;

use anyhow::{anyhow, Context};
use fantasta_shared::{EnginePacket, ServerEvent, SocketPacket, SocketPacketKind, ENGINE_IO_VERSION};
use futures_util::future::{select, Either};
use url::Url;

/// Engine.IO defaults (`pingInterval` + `pingTimeout`), used until the
/// server's open packet says otherwise.
pub const DEFAULT_HEARTBEAT_TIMEOUT: Duration = Duration::from_millis(25_000 + 20_000);

/// Connection state of the realtime socket
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Connected, or a connection loop is running.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting
                | ConnectionState::Connected
                | ConnectionState::Reconnecting { .. }
        )
    }
}

/// Configuration for auto-reconnect behavior
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Maximum number of reconnect attempts (0 = infinite)
    pub max_attempts: u32,
    /// Initial delay in milliseconds
    pub initial_delay_ms: u64,
    /// Maximum delay in milliseconds
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_delay_ms: 1000,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

impl ReconnectConfig {
    /// Calculate delay for a given attempt number
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        Duration::from_millis((delay as u64).min(self.max_delay_ms))
    }
}

/// What the connection loop reports to its owner
#[derive(Debug, Clone, PartialEq)]
pub enum SocketEvent {
    StateChanged(ConnectionState),
    Server(ServerEvent),
}

/// Text-frame WebSocket transport.
#[allow(async_fn_in_trait)]
pub trait Transport: Sized {
    async fn open(url: &str) -> anyhow::Result<Self>;
    /// Next text frame; `None` once the socket is closed.
    async fn recv(&mut self) -> Option<anyhow::Result<String>>;
    async fn send(&mut self, text: String) -> anyhow::Result<()>;
}

/// How one transport session ended.
#[derive(Debug, Default)]
pub struct SessionEnd {
    /// The namespace connect was acknowledged at some point
    pub was_connected: bool,
    /// The server disconnected us on purpose; don't reconnect
    pub server_closed: bool,
    pub error: Option<anyhow::Error>,
}

/// Build the Engine.IO WebSocket endpoint for a server base URL.
///
/// `http://host:3000` becomes
/// `ws://host:3000/socket.io/?EIO=4&transport=websocket`.
pub fn socket_endpoint(base: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(base).with_context(|| format!("invalid socket URL '{base}'"))?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(anyhow!("unsupported socket URL scheme '{other}'")),
    };
    url.set_scheme(scheme)
        .map_err(|()| anyhow!("cannot switch '{base}' to {scheme}"))?;
    url.set_path("/socket.io/");
    url.set_query(Some(&format!("EIO={ENGINE_IO_VERSION}&transport=websocket")));
    Ok(url.to_string())
}

/// Drive one open transport until it closes.
pub async fn run_session<T: Transport>(
    transport: &mut T,
    on_event: &mut impl FnMut(SocketEvent),
) -> SessionEnd {
    let mut end = SessionEnd::default();
    let mut heartbeat = DEFAULT_HEARTBEAT_TIMEOUT;

    loop {
        // Deadline restarts on every frame
        let next = {
            let recv = std::pin::pin!(transport.recv());
            let deadline = std::pin::pin!(crate::timer::sleep(heartbeat));
            match select(recv, deadline).await {
                Either::Left((next, _)) => next,
                Either::Right(((), _)) => {
                    end.error = Some(anyhow!("ping timeout after {}ms", heartbeat.as_millis()));
                    break;
                }
            }
        };
        let Some(frame) = next else {
            break;
        };

        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                end.error = Some(e);
                break;
            }
        };

        let packet = match EnginePacket::decode(&frame) {
            Ok(packet) => packet,
            Err(e) => {
                crate::log_warn!("Ignoring realtime frame '{}': {}", frame, e);
                continue;
            }
        };

        let reply = match packet {
            EnginePacket::Open(handshake) => {
                crate::log_debug!(
                    "Engine.IO open: sid={} ping={}ms timeout={}ms",
                    handshake.sid,
                    handshake.ping_interval,
                    handshake.ping_timeout
                );
                heartbeat = Duration::from_millis(
                    handshake.ping_interval.saturating_add(handshake.ping_timeout),
                );
                Some(EnginePacket::Message(SocketPacket::connect()))
            }
            EnginePacket::Ping(data) => Some(EnginePacket::Pong(data)),
            EnginePacket::Close => break,
            EnginePacket::Message(packet) => match packet.kind {
                SocketPacketKind::Connect => {
                    if !end.was_connected {
                        end.was_connected = true;
                        on_event(SocketEvent::StateChanged(ConnectionState::Connected));
                    }
                    None
                }
                SocketPacketKind::Disconnect => {
                    end.server_closed = true;
                    break;
                }
                SocketPacketKind::ConnectError => {
                    let detail = packet.data.map(|d| d.to_string()).unwrap_or_default();
                    end.error = Some(anyhow!("namespace connect refused: {detail}"));
                    break;
                }
                SocketPacketKind::Event | SocketPacketKind::BinaryEvent => {
                    if let Some(event) = ServerEvent::from_packet(&packet) {
                        on_event(SocketEvent::Server(event));
                    }
                    None
                }
                SocketPacketKind::Ack | SocketPacketKind::BinaryAck => None,
            },
            EnginePacket::Pong(_) | EnginePacket::Upgrade | EnginePacket::Noop => None,
        };

        if let Some(reply) = reply {
            if let Err(e) = transport.send(reply.encode()).await {
                end.error = Some(e);
                break;
            }
        }
    }

    end
}

/// Connect to `url` and keep reconnecting until the server closes the
/// session, the attempts run out, or the future is dropped.
pub async fn run<T: Transport>(
    url: String,
    config: ReconnectConfig,
    mut on_event: impl FnMut(SocketEvent),
) {
    let mut attempt = 0u32;

    loop {
        if attempt == 0 {
            on_event(SocketEvent::StateChanged(ConnectionState::Connecting));
        } else {
            on_event(SocketEvent::StateChanged(ConnectionState::Reconnecting { attempt }));
        }

        match T::open(&url).await {
            Ok(mut transport) => {
                let end = run_session(&mut transport, &mut on_event).await;
                if let Some(e) = &end.error {
                    crate::log_error!("Realtime socket error: {:#}", e);
                }
                if end.was_connected {
                    attempt = 0;
                    on_event(SocketEvent::StateChanged(ConnectionState::Disconnected));
                }
                if end.server_closed {
                    crate::log_info!("Server closed the realtime session");
                    if !end.was_connected {
                        on_event(SocketEvent::StateChanged(ConnectionState::Failed {
                            reason: "Server refused the session".to_string(),
                        }));
                    }
                    return;
                }
            }
            Err(e) => {
                crate::log_error!("Realtime connection to {} failed: {:#}", url, e);
            }
        }

        if config.max_attempts > 0 && attempt >= config.max_attempts {
            on_event(SocketEvent::StateChanged(ConnectionState::Failed {
                reason: format!("Max reconnect attempts ({}) exceeded", config.max_attempts),
            }));
            return;
        }

        let delay = config.delay_for_attempt(attempt);
        crate::log_info!(
            "Reconnecting to {} in {}ms (attempt {})",
            url,
            delay.as_millis(),
            attempt + 1
        );
        crate::timer::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;
