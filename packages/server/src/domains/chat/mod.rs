//! Chat domain - messages exchanged inside a room.

pub mod actions;
pub mod data;
pub mod models;

pub use models::*;
