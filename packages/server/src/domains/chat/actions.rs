//! Chat domain actions - called directly from GraphQL mutations.

use anyhow::{bail, Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::common::RoomId;
use crate::domains::chat::models::{Message, MessageWithAuthor};
use crate::domains::member::models::Member;
use crate::domains::rooms::models::Room;
use crate::server::middleware::AuthUser;

/// Send a message to a room.
///
/// The member row is provisioned from the verified claims, the room must
/// exist and still be active. Returns the message joined with the author's
/// display info for the response.
pub async fn send_message(
    room_id: RoomId,
    content: String,
    author: &AuthUser,
    pool: &PgPool,
) -> Result<MessageWithAuthor> {
    info!(room_id = %room_id, member_id = %author.member_id, "Sending message");

    let room = Room::find_by_id(room_id, pool)
        .await?
        .context("room not found")?;

    if !room.active {
        bail!("room has ended");
    }

    Member::upsert(author.member_id, author.name.clone(), None, pool).await?;

    let message = Message::create(room_id, author.member_id, content, pool).await?;

    MessageWithAuthor::find_by_id(message.id, pool)
        .await?
        .context("message vanished after insert")
}
