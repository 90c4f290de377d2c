use serde::{Deserialize, Serialize};

/// Capability set granted for a specific room.
///
/// Field names on the wire follow the room provider's grant schema, so a
/// token minted here is accepted verbatim by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGrant {
    /// The room the subject may join.
    pub room: String,
    /// Whether the subject may join the room at all.
    #[serde(rename = "roomJoin")]
    pub room_join: bool,
    /// Whether the subject may publish media to the room.
    #[serde(rename = "canPublish")]
    pub can_publish: bool,
    /// Whether the subject may subscribe to other participants' media.
    #[serde(rename = "canSubscribe")]
    pub can_subscribe: bool,
    /// Whether the subject may publish data messages.
    #[serde(rename = "canPublishData")]
    pub can_publish_data: bool,
    /// Whether the subject may rewrite its own presence metadata.
    ///
    /// Granted to agents only: an agent updates its presence metadata during
    /// a session (e.g. to signal readiness); ordinary participants never
    /// receive this capability.
    #[serde(rename = "canUpdateOwnMetadata")]
    pub can_update_own_metadata: bool,
}

impl RoomGrant {
    /// The grant set for an ordinary participant.
    pub fn participant(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
            can_publish_data: true,
            can_update_own_metadata: false,
        }
    }

    /// The grant set for an automated agent: the participant set plus
    /// permission to update its own presence metadata.
    pub fn agent(room: impl Into<String>) -> Self {
        Self {
            can_update_own_metadata: true,
            ..Self::participant(room)
        }
    }
}

/// The subject a token is issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    /// Unique identifier of the token holder.
    pub identity: String,
    /// Human-readable display name; defaults to the identity.
    pub name: String,
    /// Opaque application payload attached to the subject's room presence.
    /// Not parsed or validated here.
    pub metadata: String,
}

impl TokenIdentity {
    /// Creates an identity whose display name equals the identity itself
    /// and whose metadata is empty.
    pub fn new(identity: impl Into<String>) -> Self {
        let identity = identity.into();
        Self {
            name: identity.clone(),
            identity,
            metadata: String::new(),
        }
    }

    /// Attaches an opaque metadata payload.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }
}
