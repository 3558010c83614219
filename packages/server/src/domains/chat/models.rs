use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{MemberId, MessageId, RoomId};

/// Message - a single chat contribution tied to an author and a room.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: MessageId,
    pub room_id: RoomId,
    pub author_id: MemberId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Message joined with its author's display info.
///
/// This is the read model the transcript normalizer consumes; the author
/// name stays nullable here and only becomes a placeholder at
/// normalization time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageWithAuthor {
    pub id: MessageId,
    pub room_id: RoomId,
    pub author_id: MemberId,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Message Queries
// =============================================================================

impl Message {
    /// Create a new message
    pub async fn create(
        room_id: RoomId,
        author_id: MemberId,
        content: String,
        pool: &PgPool,
    ) -> Result<Self> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, room_id, author_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(MessageId::new())
        .bind(room_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await?;
        Ok(message)
    }
}

impl MessageWithAuthor {
    /// Find message by ID, with author display info
    pub async fn find_by_id(id: MessageId, pool: &PgPool) -> Result<Option<Self>> {
        let message = sqlx::query_as::<_, MessageWithAuthor>(
            r#"
            SELECT msg.id, msg.room_id, msg.author_id,
                   m.name AS author_name, m.image AS author_image,
                   msg.content, msg.created_at
            FROM messages msg
            LEFT JOIN members m ON m.id = msg.author_id
            WHERE msg.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(message)
    }

    /// Find messages for a room in send order.
    ///
    /// Insertion order is send order; nothing downstream resorts.
    pub async fn find_by_room(room_id: RoomId, pool: &PgPool) -> Result<Vec<Self>> {
        let messages = sqlx::query_as::<_, MessageWithAuthor>(
            r#"
            SELECT msg.id, msg.room_id, msg.author_id,
                   m.name AS author_name, m.image AS author_image,
                   msg.content, msg.created_at
            FROM messages msg
            LEFT JOIN members m ON m.id = msg.author_id
            WHERE msg.room_id = $1
            ORDER BY msg.created_at, msg.id
            "#,
        )
        .bind(room_id)
        .fetch_all(pool)
        .await?;
        Ok(messages)
    }
}
