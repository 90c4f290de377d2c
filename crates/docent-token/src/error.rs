use thiserror::Error;

/// Errors produced by token minting and verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The caller provided an empty room name.
    #[error("room name cannot be empty")]
    EmptyRoom,
    /// The caller provided an empty subject identity.
    #[error("subject identity cannot be empty")]
    EmptyIdentity,
    /// The signing computation failed.
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    /// The token failed signature or expiry verification.
    #[error("token verification failed: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
}
