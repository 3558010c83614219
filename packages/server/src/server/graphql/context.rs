use juniper::{FieldError, FieldResult};
use sqlx::PgPool;

use crate::domains::auth::AuthError;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Contains shared resources plus the per-request authenticated user (if
/// any), populated by the JWT middleware.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool, auth_user: Option<AuthUser>) -> Self {
        Self { db_pool, auth_user }
    }

    /// Return the authenticated user or a field error.
    pub fn require_auth(&self) -> FieldResult<&AuthUser> {
        self.auth_user.as_ref().ok_or_else(|| {
            FieldError::new(
                AuthError::AuthenticationRequired.to_string(),
                juniper::Value::null(),
            )
        })
    }
}
