//! Shared types for the fantasta auction client.
//!
//! Wire models for the REST API, the realtime packet codec, and the error
//! types surfaced to the UI.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::*;
pub use models::*;
pub use protocol::*;
