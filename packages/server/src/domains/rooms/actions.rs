//! Rooms domain actions - called directly from GraphQL mutations.

use anyhow::{bail, Result};
use sqlx::PgPool;
use tracing::info;

use crate::common::RoomId;
use crate::domains::member::models::Member;
use crate::domains::rooms::models::Room;
use crate::server::middleware::AuthUser;

/// Create a room on behalf of an authenticated teacher.
///
/// Provisions the member row from the verified claims first, so the room's
/// `created_by` foreign key always resolves.
pub async fn create_room(
    name: String,
    description: Option<String>,
    creator: &AuthUser,
    pool: &PgPool,
) -> Result<Room> {
    info!(member_id = %creator.member_id, "Creating room");

    Member::upsert(creator.member_id, creator.name.clone(), None, pool).await?;
    Room::create(name, description, creator.member_id, pool).await
}

/// End a room. Only the creator may end their room.
pub async fn end_room(room_id: RoomId, caller: &AuthUser, pool: &PgPool) -> Result<Room> {
    info!(room_id = %room_id, member_id = %caller.member_id, "Ending room");

    match Room::end(room_id, caller.member_id, pool).await? {
        Some(room) => Ok(room),
        None => bail!("room not found or caller is not the room creator"),
    }
}
