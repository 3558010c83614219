use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{MemberId, RoomId};

/// Member - a participant provisioned from the identity provider.
///
/// `name` is nullable: the provider may not supply a display name. Display
/// code falls back to a placeholder in that case.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: MemberId,
    pub name: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Member Queries
// =============================================================================

impl Member {
    /// Find member by ID
    pub async fn find_by_id(id: MemberId, pool: &PgPool) -> Result<Option<Self>> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(member)
    }

    /// Insert or refresh a member from verified token claims.
    ///
    /// The identity provider owns the display name, so a conflict updates it.
    pub async fn upsert(
        id: MemberId,
        name: Option<String>,
        image: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (id, name, image)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, image = EXCLUDED.image
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(image)
        .fetch_one(pool)
        .await?;
        Ok(member)
    }

    /// Find members who authored at least one message in a room.
    ///
    /// This is the participant list: a member "joins" a room by sending a
    /// message, not by any explicit membership record.
    pub async fn find_participants(room_id: RoomId, pool: &PgPool) -> Result<Vec<Self>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT DISTINCT m.*
            FROM members m
            JOIN messages msg ON msg.author_id = m.id
            WHERE msg.room_id = $1
            ORDER BY m.id
            "#,
        )
        .bind(room_id)
        .fetch_all(pool)
        .await?;
        Ok(members)
    }
}
