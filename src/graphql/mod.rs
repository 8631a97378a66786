//! GraphQL API
//!
//! This module provides the GraphQL API using async-graphql: queries and
//! mutations over the book catalog, served at /graphql.
//!
//! Queries and mutations live in domain-specific files under `queries/` and
//! `mutations/`; each defines a struct with `#[derive(Default)]` and an
//! `#[Object]` impl, combined into the roots with `#[derive(MergedObject)]`
//! in `schema.rs`.

pub mod helpers;
pub mod mutations;
pub mod pagination;
pub mod queries;
mod schema;
pub mod types;
pub mod validation;

pub use schema::{BookstoreSchema, MutationRoot, QueryRoot, build_schema};
