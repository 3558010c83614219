//! GraphQL data types for the rooms domain.

use serde::{Deserialize, Serialize};

use crate::common::RoomId;
use crate::domains::rooms::models::Room;

/// GraphQL-friendly representation of a room
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A classroom chat session")]
pub struct RoomData {
    /// Unique identifier
    pub id: String,

    /// Room title
    pub name: String,

    /// Optional description shown to joining students
    pub description: Option<String>,

    /// Member ID of the creating teacher
    pub created_by: String,

    /// Display name of the creating teacher
    pub creator_name: Option<String>,

    /// Whether the session is still running
    pub active: bool,

    /// Path students use to join; the UI prepends its origin
    pub share_path: String,

    /// When the room was created (ISO 8601)
    pub created_at: String,
}

impl RoomData {
    pub fn from_room(room: Room, creator_name: Option<String>) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            description: room.description,
            created_by: room.created_by.to_string(),
            creator_name,
            active: room.active,
            share_path: share_path(room.id),
            created_at: room.created_at.to_rfc3339(),
        }
    }
}

/// Joinable room path; the web client turns this into a full share link
/// by prepending its own origin.
pub fn share_path(room_id: RoomId) -> String {
    format!("/room/{}", room_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_path_contains_room_id() {
        let id = RoomId::new();
        let path = share_path(id);
        assert_eq!(path, format!("/room/{}", id));
    }
}
