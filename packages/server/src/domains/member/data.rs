//! GraphQL data types for the member domain.

use serde::{Deserialize, Serialize};

use crate::domains::member::models::Member;

/// GraphQL-friendly representation of a member
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A chat participant (teacher or student)")]
pub struct MemberData {
    /// Unique identifier
    pub id: String,

    /// Display name, if the identity provider supplied one
    pub name: Option<String>,

    /// Avatar URL
    pub image: Option<String>,

    /// When the member was first seen (ISO 8601)
    pub created_at: String,
}

impl From<Member> for MemberData {
    fn from(m: Member) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name,
            image: m.image,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
