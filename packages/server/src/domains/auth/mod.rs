//! Auth domain - verification of identity-provider tokens.
//!
//! Tokens are minted by the external identity provider with a shared secret
//! and issuer; this domain only verifies them and exposes the claims.

pub mod errors;
pub mod jwt;

pub use errors::AuthError;
pub use jwt::{Claims, JwtService};
