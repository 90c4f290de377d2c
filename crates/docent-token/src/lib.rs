//! Room access token primitives for the Docent platform.
//!
//! This crate builds and signs the room-provider access tokens that authorize
//! a participant or agent to join a real-time room. A token is a compact,
//! self-contained JWT (HMAC-SHA256) binding the subject identity, display
//! name, room name, opaque metadata, capability set, and expiry. Signing is
//! a pure in-process computation; this crate has no networking and holds no
//! state between calls.

mod claims;
mod error;
mod grant;
mod mint;
mod verify;

pub use claims::AccessClaims;
pub use error::TokenError;
pub use grant::{RoomGrant, TokenIdentity};
pub use mint::{mint_access_token, TokenTimeConfig, DEFAULT_TTL_SECS};
pub use verify::decode_access_token;
