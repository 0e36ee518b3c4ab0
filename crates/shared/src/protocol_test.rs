use super::*;
use serde_json::json;

// =============================================================
// Engine packets
// =============================================================

#[test]
fn decode_open_handshake() {
    let text = r#"0{"sid":"lv_VI97HAXpY6yYWAAAC","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;
    let EnginePacket::Open(handshake) = EnginePacket::decode(text).unwrap() else {
        panic!("expected open packet");
    };
    assert_eq!(handshake.sid, "lv_VI97HAXpY6yYWAAAC");
    assert_eq!(handshake.ping_interval, 25000);
    assert_eq!(handshake.ping_timeout, 20000);
    assert_eq!(handshake.max_payload, Some(1_000_000));
}

#[test]
fn decode_ping_and_reply_pong() {
    assert_eq!(EnginePacket::decode("2").unwrap(), EnginePacket::Ping(None));
    assert_eq!(EnginePacket::Pong(None).encode(), "3");
    assert_eq!(
        EnginePacket::decode("2probe").unwrap(),
        EnginePacket::Ping(Some("probe".into()))
    );
}

#[test]
fn decode_close_upgrade_noop() {
    assert_eq!(EnginePacket::decode("1").unwrap(), EnginePacket::Close);
    assert_eq!(EnginePacket::decode("5").unwrap(), EnginePacket::Upgrade);
    assert_eq!(EnginePacket::decode("6").unwrap(), EnginePacket::Noop);
}

#[test]
fn decode_rejects_empty_and_unknown() {
    assert_eq!(EnginePacket::decode(""), Err(ProtocolError::Empty));
    assert_eq!(
        EnginePacket::decode("9"),
        Err(ProtocolError::UnknownEngineType('9'))
    );
    assert_eq!(
        EnginePacket::decode("49"),
        Err(ProtocolError::UnknownSocketType('9'))
    );
}

#[test]
fn decode_open_with_bad_json_is_invalid_payload() {
    assert!(matches!(
        EnginePacket::decode("0{not json"),
        Err(ProtocolError::InvalidPayload(_))
    ));
}

// =============================================================
// Socket packets
// =============================================================

#[test]
fn connect_packet_encodes_as_40() {
    assert_eq!(EnginePacket::Message(SocketPacket::connect()).encode(), "40");
}

#[test]
fn decode_connect_ack_with_sid() {
    let EnginePacket::Message(packet) = EnginePacket::decode(r#"40{"sid":"abc"}"#).unwrap() else {
        panic!("expected message packet");
    };
    assert_eq!(packet.kind, SocketPacketKind::Connect);
    assert_eq!(packet.namespace, "/");
    assert_eq!(packet.data, Some(json!({ "sid": "abc" })));
}

#[test]
fn decode_event_with_namespace_and_ack() {
    let packet = SocketPacket::decode(r#"2/admin,13["new-bid",{"price":5}]"#).unwrap();
    assert_eq!(packet.kind, SocketPacketKind::Event);
    assert_eq!(packet.namespace, "/admin");
    assert_eq!(packet.ack_id, Some(13));
    let (name, args) = packet.as_event().unwrap();
    assert_eq!(name, "new-bid");
    assert_eq!(args, &[json!({ "price": 5 })]);
}

#[test]
fn decode_namespace_without_payload() {
    let packet = SocketPacket::decode("1/admin,").unwrap();
    assert_eq!(packet.kind, SocketPacketKind::Disconnect);
    assert_eq!(packet.namespace, "/admin");
    assert!(packet.data.is_none());
}

#[test]
fn decode_binary_event_skips_attachment_count() {
    let packet = SocketPacket::decode(r#"51-["upload",{"_placeholder":true,"num":0}]"#).unwrap();
    assert_eq!(packet.kind, SocketPacketKind::BinaryEvent);
    assert_eq!(packet.as_event().map(|(n, _)| n), Some("upload"));
}

#[test]
fn event_packet_encodes_name_first() {
    let packet = SocketPacket::event("hello", vec![json!(1), json!("two")]);
    assert_eq!(packet.encode(), r#"2["hello",1,"two"]"#);
}

#[test]
fn non_event_has_no_event_view() {
    assert!(SocketPacket::connect().as_event().is_none());
}

// =============================================================
// ServerEvent
// =============================================================

#[test]
fn new_bid_event_is_typed() {
    let packet = SocketPacket::decode(r#"2["new-bid",{"price":21,"nickname":"mario"}]"#).unwrap();
    let event = ServerEvent::from_packet(&packet).unwrap();
    let ServerEvent::NewBid { bid: Some(bid) } = event else {
        panic!("expected typed bid, got {event:?}");
    };
    assert_eq!(bid.price, 21);
    assert_eq!(bid.nickname.as_deref(), Some("mario"));
}

#[test]
fn malformed_payload_keeps_event() {
    let event = ServerEvent::from_event(EVENT_NEW_SESSION, &[json!("oops")]);
    assert_eq!(event, ServerEvent::NewSession { session: None });
}

#[test]
fn winner_declared_without_payload() {
    let event = ServerEvent::from_event(EVENT_WINNER_DECLARED, &[]);
    assert_eq!(event, ServerEvent::WinnerDeclared { payload: None });
}

#[test]
fn unknown_event_is_other() {
    let event = ServerEvent::from_event("chat", &[]);
    assert_eq!(event, ServerEvent::Other { name: "chat".into() });
}
