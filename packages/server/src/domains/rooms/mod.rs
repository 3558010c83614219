//! Rooms domain - classroom chat sessions with an active/ended lifecycle.

pub mod actions;
pub mod data;
pub mod models;

pub use models::*;
