//! Analytics domain - participation scoring over a room transcript.
//!
//! Two steps: normalize stored messages into role-tagged chat events, then
//! run a single scoring pass over the ordered events. Both structures are
//! derived fresh per request and never persisted.

pub mod actions;
pub mod data;
pub mod scoring;
pub mod transcript;

pub use scoring::score_participation;
pub use transcript::{normalize_transcript, ChatEvent, Role};
