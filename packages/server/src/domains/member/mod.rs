//! Member domain - participants (teachers and students).
//!
//! Members are provisioned lazily from verified identity-provider claims
//! on their first authenticated write.

pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
