use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};

use crate::claims::AccessClaims;
use crate::error::TokenError;
use crate::grant::{RoomGrant, TokenIdentity};

/// Default token lifetime: 6 hours, matching the room provider's default.
pub const DEFAULT_TTL_SECS: i64 = 21_600;

/// Controls token issue time and lifetime.
#[derive(Debug, Clone, Copy)]
pub struct TokenTimeConfig {
    /// Optional mint-time override (Unix seconds). `None` means now.
    pub start_time: Option<i64>,
    /// Lifetime in seconds from the mint time.
    pub ttl_secs: i64,
}

impl Default for TokenTimeConfig {
    fn default() -> Self {
        Self {
            start_time: None,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

/// Mints a signed room access token.
///
/// The token is an HS256 JWT signed with `api_secret`, carrying the subject
/// identity, display name, metadata, capability grant, and an expiry derived
/// from `time_config`. Once minted the token is an immutable value; nothing
/// is persisted.
///
/// # Errors
///
/// Returns [`TokenError::EmptyRoom`] or [`TokenError::EmptyIdentity`] when
/// the grant's room or the subject identity is empty, and
/// [`TokenError::Signing`] if the signing computation itself fails.
pub fn mint_access_token(
    api_key: &str,
    api_secret: &str,
    subject: &TokenIdentity,
    grant: &RoomGrant,
    time_config: TokenTimeConfig,
) -> Result<String, TokenError> {
    if grant.room.is_empty() {
        return Err(TokenError::EmptyRoom);
    }
    if subject.identity.is_empty() {
        return Err(TokenError::EmptyIdentity);
    }

    let start_time = time_config
        .start_time
        .unwrap_or_else(|| Utc::now().timestamp());
    let claims = AccessClaims {
        iss: api_key.to_owned(),
        sub: subject.identity.clone(),
        nbf: start_time,
        exp: start_time + time_config.ttl_secs,
        name: subject.name.clone(),
        metadata: subject.metadata.clone(),
        video: grant.clone(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}
