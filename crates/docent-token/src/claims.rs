use serde::{Deserialize, Serialize};

use crate::grant::RoomGrant;

/// JWT payload for a room access token.
///
/// The room provider validates the signature with the shared API secret and
/// reads the capability set from the `video` claim. `iss` carries the API
/// key so the provider can select the matching secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// The API key the token was signed under.
    pub iss: String,
    /// Subject identity (participant or agent name).
    pub sub: String,
    /// Not-before timestamp (Unix seconds); the mint time.
    pub nbf: i64,
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
    /// Display name shown to other room participants.
    pub name: String,
    /// Opaque presence metadata, passed through verbatim.
    #[serde(default)]
    pub metadata: String,
    /// Room capability grant.
    pub video: RoomGrant,
}
