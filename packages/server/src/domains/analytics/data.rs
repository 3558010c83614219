//! GraphQL data types for the analytics domain.

use serde::{Deserialize, Serialize};

/// One row of the participation report
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "Participation score for a single student")]
pub struct ParticipantScoreData {
    /// Student display name (placeholder for anonymous participants)
    pub name: String,

    /// Total participation points
    pub score: i32,
}
