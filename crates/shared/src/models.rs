//! Shared data models for the auction backend's REST and realtime payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Identity ---

/// User record returned by `POST /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub name: String,
}

// --- Players ---

/// Roster role of a player. Serialized with the single-letter codes the
/// backend uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    /// Goalkeeper
    #[serde(rename = "P")]
    Goalkeeper,
    #[serde(rename = "D")]
    Defender,
    #[serde(rename = "C")]
    Midfielder,
    #[serde(rename = "A")]
    Forward,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Goalkeeper,
        PlayerRole::Defender,
        PlayerRole::Midfielder,
        PlayerRole::Forward,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "P",
            PlayerRole::Defender => "D",
            PlayerRole::Midfielder => "C",
            PlayerRole::Forward => "A",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "Goalkeeper",
            PlayerRole::Defender => "Defender",
            PlayerRole::Midfielder => "Midfielder",
            PlayerRole::Forward => "Forward",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub role: PlayerRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotation: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchPlayerRequest {
    pub role: PlayerRole,
}

// --- Auction sessions ---

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    #[default]
    Active,
    Closed,
    Skipped,
}

/// One player's auction, from launch until a winner is declared or the
/// session is skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSession {
    #[serde(alias = "_id")]
    pub id: String,
    pub player: Player,
    #[serde(default)]
    pub current_price: u32,
    /// User id of the highest bidder so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bidder: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl AuctionSession {
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Smallest bid the backend will accept next.
    pub fn minimum_next_bid(&self) -> u32 {
        self.current_price.saturating_add(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    pub user_id: String,
    pub price: u32,
}

// --- Push payloads ---

/// Payload of the `new-bid` realtime event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BidPlaced {
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;
