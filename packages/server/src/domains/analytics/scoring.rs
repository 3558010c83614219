//! Participation scoring - a single pass over an ordered event sequence.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::transcript::{ChatEvent, Role};

/// Points every student message earns.
pub const BASE_PARTICIPATION_POINTS: i32 = 10;

/// Extra points for the first student reply after an open teacher question.
pub const QUESTION_RESPONSE_BONUS: i32 = 50;

/// Score student participation over an ordered transcript.
///
/// One left-to-right pass with a single piece of threaded state: the
/// timestamp of the most recent unanswered teacher question. Rules:
///
/// - A teacher message whose trimmed body ends with `?` opens a question,
///   overwriting any earlier unanswered one.
/// - Every student message earns [`BASE_PARTICIPATION_POINTS`].
/// - The first student message sent strictly after an open question earns
///   [`QUESTION_RESPONSE_BONUS`] on top and consumes the question; later
///   replies to the same question earn only the base points. A timestamp
///   tie with the question does not qualify.
/// - Teacher messages never earn points and never create ledger entries.
///
/// The ledger is keyed by display name, so only students who sent at least
/// one message appear. Total over the input, pure, and O(n).
pub fn score_participation(events: &[ChatEvent]) -> HashMap<String, i32> {
    let mut ledger: HashMap<String, i32> = HashMap::new();
    let mut open_question_at: Option<DateTime<Utc>> = None;

    for event in events {
        match event.role {
            Role::Teacher => {
                if event.body.trim().ends_with('?') {
                    open_question_at = Some(event.sent_at);
                }
            }
            Role::Student => {
                let score = ledger.entry(event.author_name.clone()).or_insert(0);
                *score += BASE_PARTICIPATION_POINTS;

                if let Some(asked_at) = open_question_at {
                    if event.sent_at > asked_at {
                        *score += QUESTION_RESPONSE_BONUS;
                        open_question_at = None;
                    }
                }
            }
        }
    }

    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn teacher(body: &str, at_secs: i64) -> ChatEvent {
        ChatEvent {
            author_name: "Ms. Nguyen".to_string(),
            role: Role::Teacher,
            sent_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
            body: body.to_string(),
        }
    }

    fn student(name: &str, body: &str, at_secs: i64) -> ChatEvent {
        ChatEvent {
            author_name: name.to_string(),
            role: Role::Student,
            sent_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_transcript_yields_empty_ledger() {
        let scores = score_participation(&[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_reply_after_question_earns_bonus() {
        let events = vec![teacher("Any questions?", 0), student("Alice", "yes", 1)];

        let scores = score_participation(&events);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["Alice"], 60);
    }

    #[test]
    fn test_message_before_question_earns_only_base() {
        let events = vec![
            student("Alice", "hi", 0),
            teacher("Why?", 1),
            student("Alice", "because", 2),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 70);
    }

    #[test]
    fn test_only_first_reply_is_rewarded() {
        let events = vec![
            teacher("Ready?", 0),
            student("Alice", "yes", 1),
            student("Bob", "yes", 2),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 60);
        assert_eq!(scores["Bob"], 10);
    }

    #[test]
    fn test_timestamp_tie_does_not_qualify() {
        let events = vec![teacher("Done?", 5), student("Alice", "yes", 5)];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 10);
    }

    #[test]
    fn test_unanswered_question_is_inert() {
        let events = vec![
            student("Alice", "hello", 0),
            teacher("Anyone there?", 1),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 10);
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_latest_question_overwrites_earlier_one() {
        // Two consecutive questions: only a reply after the second is a
        // reply, and it consumes the marker entirely.
        let events = vec![
            teacher("First question?", 0),
            teacher("Second question?", 1),
            student("Alice", "answering", 2),
            student("Bob", "me too", 3),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 60);
        assert_eq!(scores["Bob"], 10);
    }

    #[test]
    fn test_question_detection_trims_whitespace() {
        let events = vec![teacher("  Ready?  \n", 0), student("Alice", "yes", 1)];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 60);
    }

    #[test]
    fn test_teacher_statements_do_not_open_questions() {
        let events = vec![
            teacher("Settle down everyone.", 0),
            student("Alice", "ok", 1),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores["Alice"], 10);
    }

    #[test]
    fn test_teacher_never_enters_ledger() {
        let events = vec![teacher("Welcome?", 0), teacher("Anyone?", 1)];

        let scores = score_participation(&events);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_scoring_is_pure() {
        let events = vec![
            teacher("Ready?", 0),
            student("Alice", "yes", 1),
            student("Bob", "yes", 2),
        ];

        let first = score_participation(&events);
        let second = score_participation(&events);
        assert_eq!(first, second);
    }

    #[test]
    fn test_totals_decompose_into_base_and_bonus() {
        // k messages and j rewarded replies: total = 10k + 50j with j <= k.
        let events = vec![
            teacher("One?", 0),
            student("Alice", "a", 1),
            student("Alice", "b", 2),
            teacher("Two?", 3),
            student("Alice", "c", 4),
        ];

        let scores = score_participation(&events);
        // 3 messages, 2 rewarded replies
        assert_eq!(scores["Alice"], 3 * BASE_PARTICIPATION_POINTS + 2 * QUESTION_RESPONSE_BONUS);
    }

    #[test]
    fn test_anonymous_students_share_one_ledger_entry() {
        // Placeholder-name collisions are intentional: the ledger is keyed
        // by display name only.
        let events = vec![
            student("Anonymous", "hi", 0),
            student("Anonymous", "hello", 1),
        ];

        let scores = score_participation(&events);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["Anonymous"], 20);
    }
}
