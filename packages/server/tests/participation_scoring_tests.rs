//! End-to-end tests for the participation pipeline: stored messages through
//! transcript normalization into the scorer, without a database.

use chrono::{TimeZone, Utc};
use server_core::common::{MemberId, MessageId, RoomId};
use server_core::domains::analytics::scoring::{
    score_participation, BASE_PARTICIPATION_POINTS, QUESTION_RESPONSE_BONUS,
};
use server_core::domains::analytics::transcript::{normalize_transcript, PLACEHOLDER_AUTHOR};
use server_core::domains::chat::models::MessageWithAuthor;

fn message(
    room_id: RoomId,
    author_id: MemberId,
    author_name: Option<&str>,
    content: &str,
    at_secs: i64,
) -> MessageWithAuthor {
    MessageWithAuthor {
        id: MessageId::new(),
        room_id,
        author_id,
        author_name: author_name.map(String::from),
        author_image: None,
        content: content.to_string(),
        created_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
    }
}

#[test]
fn classroom_session_scores_end_to_end() {
    let room = RoomId::new();
    let teacher = MemberId::new();
    let alice = MemberId::new();
    let bob = MemberId::new();

    let messages = vec![
        message(room, teacher, Some("Ms. Nguyen"), "Welcome everyone", 0),
        message(room, alice, Some("Alice"), "hello!", 10),
        message(
            room,
            teacher,
            Some("Ms. Nguyen"),
            "What is photosynthesis?",
            20,
        ),
        message(room, bob, Some("Bob"), "plants making food from light", 30),
        message(room, alice, Some("Alice"), "chlorophyll is involved too", 40),
    ];

    let events = normalize_transcript(&messages, Some(teacher));
    let scores = score_participation(&events);

    // Alice: two messages. Bob: one message plus the first-reply bonus.
    assert_eq!(scores.get("Alice"), Some(&(2 * BASE_PARTICIPATION_POINTS)));
    assert_eq!(
        scores.get("Bob"),
        Some(&(BASE_PARTICIPATION_POINTS + QUESTION_RESPONSE_BONUS))
    );
    assert_eq!(scores.get("Ms. Nguyen"), None);
    assert_eq!(scores.len(), 2);
}

#[test]
fn teacher_questions_do_not_score_without_replies() {
    let room = RoomId::new();
    let teacher = MemberId::new();

    let messages = vec![
        message(room, teacher, Some("Ms. Nguyen"), "Anyone here?", 0),
        message(room, teacher, Some("Ms. Nguyen"), "Hello?", 10),
    ];

    let events = normalize_transcript(&messages, Some(teacher));
    let scores = score_participation(&events);

    assert!(scores.is_empty());
}

#[test]
fn bonus_requires_strictly_later_reply() {
    let room = RoomId::new();
    let teacher = MemberId::new();
    let alice = MemberId::new();

    // Reply shares the question's timestamp, so no bonus applies.
    let messages = vec![
        message(room, teacher, Some("Ms. Nguyen"), "Ready?", 100),
        message(room, alice, Some("Alice"), "yes", 100),
    ];

    let events = normalize_transcript(&messages, Some(teacher));
    let scores = score_participation(&events);

    assert_eq!(scores.get("Alice"), Some(&BASE_PARTICIPATION_POINTS));
}

#[test]
fn nameless_students_share_the_placeholder_ledger_entry() {
    let room = RoomId::new();
    let teacher = MemberId::new();
    let ghost_a = MemberId::new();
    let ghost_b = MemberId::new();

    let messages = vec![
        message(room, ghost_a, None, "first", 0),
        message(room, ghost_b, Some(""), "second", 10),
    ];

    let events = normalize_transcript(&messages, Some(teacher));
    let scores = score_participation(&events);

    assert_eq!(
        scores.get(PLACEHOLDER_AUTHOR),
        Some(&(2 * BASE_PARTICIPATION_POINTS))
    );
    assert_eq!(scores.len(), 1);
}

#[test]
fn later_question_replaces_an_unanswered_one() {
    let room = RoomId::new();
    let teacher = MemberId::new();
    let alice = MemberId::new();

    let messages = vec![
        message(room, teacher, Some("Ms. Nguyen"), "First question?", 0),
        message(room, teacher, Some("Ms. Nguyen"), "Second question?", 10),
        message(room, alice, Some("Alice"), "answering the second", 20),
        message(room, alice, Some("Alice"), "more thoughts", 30),
    ];

    let events = normalize_transcript(&messages, Some(teacher));
    let scores = score_participation(&events);

    // Only one bonus total: the marker is consumed by the first reply.
    assert_eq!(
        scores.get("Alice"),
        Some(&(2 * BASE_PARTICIPATION_POINTS + QUESTION_RESPONSE_BONUS))
    );
}
