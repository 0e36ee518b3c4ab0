//! Realtime protocol: Engine.IO v4 / Socket.IO v5 text packets.
//!
//! The auction backend pushes notifications over Socket.IO. Only the text
//! framing is implemented; binary attachments are skipped, which the
//! backend never sends.
//!
//! ```text
//! engine packet:  <type digit><payload>
//!                 "0{...}"  open handshake
//!                 "2"       ping          -> reply "3"
//!                 "4<socket packet>"
//! socket packet:  <type digit>[<nsp>,][<ack id>][<json>]
//!                 "40"                      connect to "/"
//!                 "42[\"new-bid\",{...}]"   event
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::models::{AuctionSession, BidPlaced};

pub const ENGINE_IO_VERSION: u8 = 4;
pub const DEFAULT_NAMESPACE: &str = "/";

/// Realtime event names emitted by the backend
pub const EVENT_NEW_SESSION: &str = "new-session";
pub const EVENT_NEW_BID: &str = "new-bid";
pub const EVENT_WINNER_DECLARED: &str = "winner-declared";

/// Payload of the Engine.IO open packet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenHandshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    pub ping_interval: u64,
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: Option<u64>,
}

/// Engine.IO transport-level packet
#[derive(Debug, Clone, PartialEq)]
pub enum EnginePacket {
    Open(OpenHandshake),
    Close,
    Ping(Option<String>),
    Pong(Option<String>),
    Message(SocketPacket),
    Upgrade,
    Noop,
}

impl EnginePacket {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let mut chars = text.chars();
        let kind = chars.next().ok_or(ProtocolError::Empty)?;
        let body = chars.as_str();
        let optional = || (!body.is_empty()).then(|| body.to_string());

        Ok(match kind {
            '0' => EnginePacket::Open(serde_json::from_str(body)?),
            '1' => EnginePacket::Close,
            '2' => EnginePacket::Ping(optional()),
            '3' => EnginePacket::Pong(optional()),
            '4' => EnginePacket::Message(SocketPacket::decode(body)?),
            '5' => EnginePacket::Upgrade,
            '6' => EnginePacket::Noop,
            other => return Err(ProtocolError::UnknownEngineType(other)),
        })
    }

    pub fn encode(&self) -> String {
        match self {
            EnginePacket::Open(handshake) => {
                format!("0{}", serde_json::to_string(handshake).unwrap_or_default())
            }
            EnginePacket::Close => "1".to_string(),
            EnginePacket::Ping(data) => format!("2{}", data.as_deref().unwrap_or("")),
            EnginePacket::Pong(data) => format!("3{}", data.as_deref().unwrap_or("")),
            EnginePacket::Message(packet) => format!("4{}", packet.encode()),
            EnginePacket::Upgrade => "5".to_string(),
            EnginePacket::Noop => "6".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketPacketKind {
    Connect,
    Disconnect,
    Event,
    Ack,
    ConnectError,
    BinaryEvent,
    BinaryAck,
}

impl SocketPacketKind {
    fn from_char(c: char) -> Result<Self, ProtocolError> {
        Ok(match c {
            '0' => SocketPacketKind::Connect,
            '1' => SocketPacketKind::Disconnect,
            '2' => SocketPacketKind::Event,
            '3' => SocketPacketKind::Ack,
            '4' => SocketPacketKind::ConnectError,
            '5' => SocketPacketKind::BinaryEvent,
            '6' => SocketPacketKind::BinaryAck,
            other => return Err(ProtocolError::UnknownSocketType(other)),
        })
    }

    fn as_char(self) -> char {
        match self {
            SocketPacketKind::Connect => '0',
            SocketPacketKind::Disconnect => '1',
            SocketPacketKind::Event => '2',
            SocketPacketKind::Ack => '3',
            SocketPacketKind::ConnectError => '4',
            SocketPacketKind::BinaryEvent => '5',
            SocketPacketKind::BinaryAck => '6',
        }
    }

    fn is_binary(self) -> bool {
        matches!(self, SocketPacketKind::BinaryEvent | SocketPacketKind::BinaryAck)
    }
}

/// Socket.IO packet carried inside an Engine.IO message
#[derive(Debug, Clone, PartialEq)]
pub struct SocketPacket {
    pub kind: SocketPacketKind,
    pub namespace: String,
    pub ack_id: Option<u64>,
    pub data: Option<Value>,
}

impl SocketPacket {
    /// Namespace connect request for the default namespace.
    pub fn connect() -> Self {
        Self {
            kind: SocketPacketKind::Connect,
            namespace: DEFAULT_NAMESPACE.to_string(),
            ack_id: None,
            data: None,
        }
    }

    pub fn event(name: &str, args: Vec<Value>) -> Self {
        let mut array = Vec::with_capacity(args.len() + 1);
        array.push(Value::String(name.to_string()));
        array.extend(args);
        Self {
            kind: SocketPacketKind::Event,
            namespace: DEFAULT_NAMESPACE.to_string(),
            ack_id: None,
            data: Some(Value::Array(array)),
        }
    }

    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let mut chars = text.chars();
        let kind = SocketPacketKind::from_char(chars.next().ok_or(ProtocolError::Empty)?)?;
        let mut rest = chars.as_str();

        // Attachment count ("<n>-") precedes the namespace on binary packets
        if kind.is_binary() {
            if let Some(idx) = rest.find('-') {
                rest = &rest[idx + 1..];
            }
        }

        let namespace = if rest.starts_with('/') {
            let end = rest.find(',').unwrap_or(rest.len());
            let nsp = rest[..end].to_string();
            rest = rest.get(end + 1..).unwrap_or("");
            nsp
        } else {
            DEFAULT_NAMESPACE.to_string()
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let ack_id = if digits > 0 {
            Some(
                rest[..digits]
                    .parse::<u64>()
                    .map_err(|e| ProtocolError::InvalidPayload(e.to_string()))?,
            )
        } else {
            None
        };
        rest = &rest[digits..];

        let data = if rest.is_empty() {
            None
        } else {
            Some(serde_json::from_str(rest)?)
        };

        Ok(Self {
            kind,
            namespace,
            ack_id,
            data,
        })
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push(self.kind.as_char());
        if self.namespace != DEFAULT_NAMESPACE {
            out.push_str(&self.namespace);
            out.push(',');
        }
        if let Some(id) = self.ack_id {
            out.push_str(&id.to_string());
        }
        if let Some(data) = &self.data {
            out.push_str(&data.to_string());
        }
        out
    }

    /// Event name and arguments, if this is an event packet.
    pub fn as_event(&self) -> Option<(&str, &[Value])> {
        if !matches!(self.kind, SocketPacketKind::Event | SocketPacketKind::BinaryEvent) {
            return None;
        }
        let array = self.data.as_ref()?.as_array()?;
        let (name, args) = array.split_first()?;
        Some((name.as_str()?, args))
    }
}

/// Domain events pushed by the auction backend
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// A new player was put up for auction
    NewSession { session: Option<AuctionSession> },
    /// Somebody raised the current price
    NewBid { bid: Option<BidPlaced> },
    /// The running auction was closed
    WinnerDeclared { payload: Option<Value> },
    /// Any event this client doesn't know about
    Other { name: String },
}

impl ServerEvent {
    /// Map an event name and its first argument to a typed event.
    ///
    /// Payloads that don't match the expected shape are kept as `None` so
    /// the event itself is never lost.
    pub fn from_event(name: &str, args: &[Value]) -> Self {
        let first = args.first().cloned();
        match name {
            EVENT_NEW_SESSION => ServerEvent::NewSession {
                session: first.and_then(|v| serde_json::from_value(v).ok()),
            },
            EVENT_NEW_BID => ServerEvent::NewBid {
                bid: first.and_then(|v| serde_json::from_value(v).ok()),
            },
            EVENT_WINNER_DECLARED => ServerEvent::WinnerDeclared { payload: first },
            other => ServerEvent::Other {
                name: other.to_string(),
            },
        }
    }

    pub fn from_packet(packet: &SocketPacket) -> Option<Self> {
        let (name, args) = packet.as_event()?;
        Some(Self::from_event(name, args))
    }
}

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;
