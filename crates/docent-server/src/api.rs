//! Token issuance handlers for the Docent server.

use crate::AppState;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docent_token::{mint_access_token, RoomGrant, TokenIdentity, TokenTimeConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Identity used when the caller does not name a participant.
pub const DEFAULT_PARTICIPANT_NAME: &str = "Guest";

/// Identity used when the caller does not name an agent.
pub const DEFAULT_AGENT_NAME: &str = "AIAgent";

/// Fixed presence metadata marking a subject as an automated agent.
/// Always overrides caller input on the agent endpoint.
pub const AGENT_METADATA: &str = r#"{"type": "agent"}"#;

/// Request body for participant token issuance.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// The room the participant wants to join.
    #[serde(rename = "roomName")]
    pub room_name: Option<String>,
    /// Display identity; defaults to [`DEFAULT_PARTICIPANT_NAME`].
    #[serde(rename = "participantName")]
    pub participant_name: Option<String>,
    /// Opaque presence metadata (e.g. serialized artwork description),
    /// passed through verbatim.
    #[serde(default)]
    pub metadata: Option<String>,
}

/// Response body for successful participant token issuance.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed access token.
    pub token: String,
    /// Echo of the requested room.
    #[serde(rename = "roomName")]
    pub room_name: String,
    /// The identity the token was issued to.
    #[serde(rename = "participantName")]
    pub participant_name: String,
}

/// Request body for agent token issuance.
#[derive(Debug, Deserialize)]
pub struct AgentTokenRequest {
    /// The room the agent should join.
    #[serde(rename = "roomName")]
    pub room_name: Option<String>,
    /// Agent identity; defaults to [`DEFAULT_AGENT_NAME`].
    #[serde(rename = "agentName")]
    pub agent_name: Option<String>,
}

/// Response body for successful agent token issuance.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentTokenResponse {
    /// The signed access token.
    pub token: String,
    /// Echo of the requested room.
    #[serde(rename = "roomName")]
    pub room_name: String,
    /// The identity the token was issued to.
    #[serde(rename = "agentName")]
    pub agent_name: String,
}

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Extracts a non-empty room name or rejects the request.
///
/// Missing and empty room names are client errors with a fixed message
/// (part of the wire contract), never server faults.
fn require_room_name(room_name: Option<&str>) -> Result<&str, ApiError> {
    room_name
        .filter(|room| !room.is_empty())
        .ok_or_else(|| ApiError::BadRequest("roomName is required".to_string()))
}

/// Handler for `POST /api/livekit/token`.
///
/// Issues a participant token: join, publish, subscribe, and publish-data
/// capabilities, but no permission to update own metadata.
pub async fn issue_token_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let room_name = require_room_name(payload.room_name.as_deref())?;
    let participant_name = payload
        .participant_name
        .unwrap_or_else(|| DEFAULT_PARTICIPANT_NAME.to_string());
    let metadata = payload.metadata.unwrap_or_default();

    let subject = TokenIdentity::new(participant_name.clone()).with_metadata(metadata);
    let grant = RoomGrant::participant(room_name);
    let token = mint_access_token(
        &state.api_key,
        &state.api_secret,
        &subject,
        &grant,
        TokenTimeConfig {
            start_time: None,
            ttl_secs: state.token_ttl_secs,
        },
    )
    .map_err(|e| {
        tracing::error!(room = room_name, "token minting failed: {e}");
        ApiError::InternalServerError(e.to_string())
    })?;

    tracing::debug!(
        room = room_name,
        identity = %participant_name,
        "issued participant token"
    );

    Ok(Json(TokenResponse {
        token,
        room_name: room_name.to_string(),
        participant_name,
    }))
}

/// Handler for `POST /api/livekit/agent-token`.
///
/// Issues an agent token: the participant capability set plus permission to
/// update own presence metadata, with the metadata forced to the fixed
/// agent marker regardless of caller input.
pub async fn issue_agent_token_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AgentTokenRequest>,
) -> Result<Json<AgentTokenResponse>, ApiError> {
    let room_name = require_room_name(payload.room_name.as_deref())?;
    let agent_name = payload
        .agent_name
        .unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string());

    let subject = TokenIdentity::new(agent_name.clone()).with_metadata(AGENT_METADATA);
    let grant = RoomGrant::agent(room_name);
    let token = mint_access_token(
        &state.api_key,
        &state.api_secret,
        &subject,
        &grant,
        TokenTimeConfig {
            start_time: None,
            ttl_secs: state.token_ttl_secs,
        },
    )
    .map_err(|e| {
        tracing::error!(room = room_name, "agent token minting failed: {e}");
        ApiError::InternalServerError(e.to_string())
    })?;

    tracing::debug!(
        room = room_name,
        identity = %agent_name,
        "issued agent token"
    );

    Ok(Json(AgentTokenResponse {
        token,
        room_name: room_name.to_string(),
        agent_name,
    }))
}
