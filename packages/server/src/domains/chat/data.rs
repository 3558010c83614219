//! GraphQL data types for the chat domain.

use serde::{Deserialize, Serialize};

use crate::domains::chat::models::MessageWithAuthor;

/// GraphQL-friendly representation of a chat message
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A message in a room")]
pub struct MessageData {
    /// Unique identifier
    pub id: String,

    /// Room this message belongs to
    pub room_id: String,

    /// Author member ID
    pub author_id: String,

    /// Author display name, if the identity provider supplied one
    pub author_name: Option<String>,

    /// Author avatar URL
    pub author_image: Option<String>,

    /// Message text
    pub content: String,

    /// When the message was sent (ISO 8601)
    pub created_at: String,
}

impl From<MessageWithAuthor> for MessageData {
    fn from(m: MessageWithAuthor) -> Self {
        Self {
            id: m.id.to_string(),
            room_id: m.room_id.to_string(),
            author_id: m.author_id.to_string(),
            author_name: m.author_name,
            author_image: m.author_image,
            content: m.content,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
