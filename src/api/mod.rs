//! API route definitions
//!
//! The primary API is GraphQL at /graphql. The only REST endpoints are
//! the health probes.

pub mod health;
