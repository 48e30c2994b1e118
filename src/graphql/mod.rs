//! GraphQL API for the synthetic book catalog
//!
//! This module provides a read-only GraphQL API using async-graphql.
//! The layout follows one query module per entity: each file in
//! `queries/` defines a struct with `#[derive(Default)]` and an
//! `#[Object]` impl, combined into `QueryRoot` via `MergedObject` in
//! `schema.rs`. Relationship fields live on the entity types in
//! `types.rs` as `ComplexObject` resolvers.

pub mod helpers;
pub mod pagination;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{BookshelfSchema, QueryRoot, build_schema};
