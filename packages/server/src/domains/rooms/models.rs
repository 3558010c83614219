use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{MemberId, RoomId};

/// Room - a classroom chat session created by a teacher.
///
/// The creator is the room's teacher; there is no stored role field.
/// Everything role-related is derived by comparing against `created_by`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: MemberId,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Room Queries
// =============================================================================

impl Room {
    /// Find room by ID
    pub async fn find_by_id(id: RoomId, pool: &PgPool) -> Result<Option<Self>> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(room)
    }

    /// Create a new room
    pub async fn create(
        name: String,
        description: Option<String>,
        created_by: MemberId,
        pool: &PgPool,
    ) -> Result<Self> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (id, name, description, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(RoomId::new())
        .bind(name)
        .bind(description)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(room)
    }

    /// Find rooms created by a member, newest first
    pub async fn find_by_creator(created_by: MemberId, pool: &PgPool) -> Result<Vec<Self>> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(created_by)
        .fetch_all(pool)
        .await?;
        Ok(rooms)
    }

    /// End a room (set inactive), scoped to the creator.
    ///
    /// Returns `None` when the room does not exist or the caller is not the
    /// creator - the ownership check lives in the WHERE clause.
    pub async fn end(id: RoomId, created_by: MemberId, pool: &PgPool) -> Result<Option<Self>> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND created_by = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(created_by)
        .fetch_optional(pool)
        .await?;
        Ok(room)
    }
}
