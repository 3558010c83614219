//! Transcript normalization - stored messages to role-tagged chat events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MemberId;
use crate::domains::chat::models::MessageWithAuthor;

/// Display name used when the identity provider supplied none.
pub const PLACEHOLDER_AUTHOR: &str = "Anonymous";

/// Role of a chat event's author, derived at normalization time.
///
/// There is no stored role field anywhere: the room's `created_by` is the
/// single source of truth, so renaming or re-authoring after the fact is
/// impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    Student,
}

/// A message as the participation scorer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEvent {
    pub author_name: String,
    pub role: Role,
    pub sent_at: DateTime<Utc>,
    pub body: String,
}

/// Convert stored message records into an ordered sequence of chat events.
///
/// Input order is preserved; storage already returns messages in send
/// order. A message authored by `teacher_id` is tagged `Teacher`, everything
/// else `Student` - with no teacher id at all, every message is a student
/// message. Missing or empty display names fall back to
/// [`PLACEHOLDER_AUTHOR`].
pub fn normalize_transcript(
    messages: &[MessageWithAuthor],
    teacher_id: Option<MemberId>,
) -> Vec<ChatEvent> {
    messages
        .iter()
        .map(|m| ChatEvent {
            author_name: match m.author_name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => PLACEHOLDER_AUTHOR.to_string(),
            },
            role: match teacher_id {
                Some(teacher) if teacher == m.author_id => Role::Teacher,
                _ => Role::Student,
            },
            sent_at: m.created_at,
            body: m.content.clone(),
        })
        .collect()
}
