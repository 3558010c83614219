//! Analytics domain actions - called directly from GraphQL queries.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::common::RoomId;
use crate::domains::analytics::data::ParticipantScoreData;
use crate::domains::analytics::scoring::score_participation;
use crate::domains::analytics::transcript::normalize_transcript;
use crate::domains::chat::models::MessageWithAuthor;
use crate::domains::rooms::models::Room;

/// Compute the participation report for a room.
///
/// Fetches a fresh snapshot of the transcript, normalizes it against the
/// room creator's id, scores it, and returns one row per student who sent
/// at least one message. An unknown room simply has no teacher and no
/// messages, so the result degrades to an empty report rather than an
/// error.
pub async fn room_participant_scores(
    room_id: RoomId,
    pool: &PgPool,
) -> Result<Vec<ParticipantScoreData>> {
    let teacher_id = Room::find_by_id(room_id, pool).await?.map(|r| r.created_by);
    let messages = MessageWithAuthor::find_by_room(room_id, pool).await?;

    let events = normalize_transcript(&messages, teacher_id);
    let scores = score_participation(&events);

    info!(room_id = %room_id, students = scores.len(), "Computed participation scores");

    let mut rows: Vec<ParticipantScoreData> = scores
        .into_iter()
        .map(|(name, score)| ParticipantScoreData { name, score })
        .collect();

    // Stable display order; the scorer itself imposes none.
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));

    Ok(rows)
}
