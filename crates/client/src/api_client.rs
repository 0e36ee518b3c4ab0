//! HTTP client for the auction backend.
//!
//! One method per backend operation. Each performs a single request and
//! returns the decoded payload; no retries, no timeouts.

use fantasta_shared::{
    ApiError, AuctionSession, LaunchPlayerRequest, LoginRequest, PlaceBidRequest, Player,
    PlayerRole, User,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// GET `path` and decode the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.client.get(self.url(path));
        send(rb, "GET", path).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body_bytes = encode_body(body)?;
        let rb = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body_bytes);
        send(rb, "POST", path).await
    }

    /// POST to `path` without a request body
    pub async fn post<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.client.post(self.url(path));
        send(rb, "POST", path).await
    }

    // --- Auction API ---

    /// Log in as `nickname`, creating the user on first use
    pub async fn login_or_create_user(&self, nickname: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            name: nickname.to_string(),
        };
        self.post_json("/users/me", &body).await
    }

    /// Player currently under auction, if any
    pub async fn get_active_session(&self) -> Result<Option<AuctionSession>, ApiError> {
        self.get_json("/sessions/active").await
    }

    /// Put a new player of `role` up for auction (admin only)
    pub async fn launch_player(&self, role: PlayerRole) -> Result<AuctionSession, ApiError> {
        self.post_json("/players/launch", &LaunchPlayerRequest { role })
            .await
    }

    pub async fn get_player_by_id(&self, id: &str) -> Result<Player, ApiError> {
        self.get_json(&format!("/players/{}", urlencoding::encode(id)))
            .await
    }

    pub async fn place_bid(&self, user_id: &str, price: u32) -> Result<AuctionSession, ApiError> {
        let body = PlaceBidRequest {
            user_id: user_id.to_string(),
            price,
        };
        self.post_json("/sessions/place-bid", &body).await
    }

    /// Close the running auction, awarding the player to the highest bidder
    pub async fn declare_winner(&self) -> Result<AuctionSession, ApiError> {
        self.post("/sessions/declare-winner").await
    }

    /// Close the running auction without a winner
    pub async fn skip_session(&self) -> Result<AuctionSession, ApiError> {
        self.post("/sessions/skip-session").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send<TRes: DeserializeOwned>(
    rb: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<TRes, ApiError> {
    let resp = rb.send().await.map_err(|e| {
        crate::log_error!("{} {} failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    let status = resp.status().as_u16();
    let is_success = resp.status().is_success();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !is_success {
        crate::log_warn!("{} {} returned {}", method, path, status);
        return Err(ApiError::Http { status, body: text });
    }

    decode_body(&text)
}

pub(crate) fn encode_body<TReq: Serialize>(body: &TReq) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

/// Decode a success body; an empty body decodes as JSON `null`.
pub(crate) fn decode_body<TRes: DeserializeOwned>(text: &str) -> Result<TRes, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new().with_base_url("http://localhost:3000/");
        assert_eq!(
            client.url("/sessions/active"),
            "http://localhost:3000/sessions/active"
        );
        assert_eq!(client.url("users/me"), "http://localhost:3000/users/me");
    }

    #[test]
    fn url_without_base_is_relative() {
        let client = ApiClient::new();
        assert_eq!(client.url("players/7"), "/players/7");
        assert_eq!(client.url("/players/7"), "/players/7");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::new().with_base_url("http://localhost:3000");
        assert_eq!(
            client.url("https://api.example.com/x"),
            "https://api.example.com/x"
        );
    }

    #[test]
    fn null_or_empty_body_is_no_session() {
        let none: Option<AuctionSession> = decode_body("null").unwrap();
        assert!(none.is_none());
        let empty: Option<AuctionSession> = decode_body("  ").unwrap();
        assert!(empty.is_none());
    }

    #[test]
    fn wrong_shape_is_deserialize_error() {
        let result: Result<User, _> = decode_body(r#"{"unexpected":true}"#);
        assert!(matches!(result, Err(ApiError::Deserialize(_))));
    }

    #[test]
    fn unencodable_request_is_serialize_error() {
        // JSON object keys must be strings
        let body = std::collections::HashMap::from([((1u8, 2u8), 3u8)]);
        let result = encode_body(&body);
        assert!(matches!(result, Err(ApiError::Serialize(_))));
    }

    #[test]
    fn request_body_encodes_camel_case() {
        let body = PlaceBidRequest {
            user_id: "u1".to_string(),
            price: 12,
        };
        let bytes = encode_body(&body).unwrap();
        assert_eq!(bytes, br#"{"userId":"u1","price":12}"#);
    }
}
