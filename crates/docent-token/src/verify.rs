use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::AccessClaims;
use crate::error::TokenError;

/// Decodes and verifies a room access token with the shared API secret.
///
/// Checks the HS256 signature and the `exp` claim. Used by tests and by
/// collaborators that need to inspect a grant locally; the room provider
/// performs its own equivalent verification on join.
///
/// # Errors
///
/// Returns [`TokenError::Verification`] when the signature does not match
/// or the token has expired.
pub fn decode_access_token(token: &str, api_secret: &str) -> Result<AccessClaims, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    jsonwebtoken::decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(api_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(TokenError::Verification)
}
