use super::*;
use serde_json::json;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_mongo_style_id() {
    let user: User = serde_json::from_value(json!({
        "_id": "65f0c1",
        "name": "mario",
        "isAdmin": true
    }))
    .unwrap();
    assert_eq!(user.id, "65f0c1");
    assert_eq!(user.name, "mario");
    assert!(user.is_admin);
}

#[test]
fn user_admin_flag_defaults_to_false() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "name": "luigi" })).unwrap();
    assert!(!user.is_admin);
}

#[test]
fn login_request_body_uses_name_field() {
    let body = serde_json::to_value(LoginRequest { name: "peach".into() }).unwrap();
    assert_eq!(body, json!({ "name": "peach" }));
}

// =============================================================
// PlayerRole
// =============================================================

#[test]
fn player_role_serializes_as_code() {
    let body = serde_json::to_value(LaunchPlayerRequest { role: PlayerRole::Midfielder }).unwrap();
    assert_eq!(body, json!({ "role": "C" }));
}

#[test]
fn player_role_codes_match_from_code() {
    for role in PlayerRole::ALL {
        assert_eq!(PlayerRole::from_code(role.code()), Some(role));
    }
    assert_eq!(PlayerRole::from_code("X"), None);
}

// =============================================================
// AuctionSession
// =============================================================

#[test]
fn auction_session_parses_minimal_payload() {
    let session: AuctionSession = serde_json::from_value(json!({
        "_id": "s1",
        "player": { "_id": "p1", "name": "Barella", "role": "C", "team": "Inter" },
        "currentPrice": 12
    }))
    .unwrap();
    assert_eq!(session.id, "s1");
    assert_eq!(session.player.team.as_deref(), Some("Inter"));
    assert_eq!(session.current_price, 12);
    assert!(session.current_bidder.is_none());
    assert!(session.is_active());
    assert_eq!(session.minimum_next_bid(), 13);
}

#[test]
fn auction_session_status_closed() {
    let session: AuctionSession = serde_json::from_value(json!({
        "id": "s2",
        "player": { "id": "p2", "name": "Maignan", "role": "P" },
        "currentPrice": 30,
        "currentBidder": "u9",
        "status": "closed"
    }))
    .unwrap();
    assert_eq!(session.status, SessionStatus::Closed);
    assert!(!session.is_active());
}

#[test]
fn place_bid_body_is_camel_case() {
    let body = serde_json::to_value(PlaceBidRequest {
        user_id: "u1".into(),
        price: 42,
    })
    .unwrap();
    assert_eq!(body, json!({ "userId": "u1", "price": 42 }));
}
