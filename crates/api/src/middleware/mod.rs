//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::CurrentEvent`] -- Requires a selected event on that token.

pub mod auth;
