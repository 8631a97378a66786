//! GraphQL schema definition
//!
//! This is the single API surface for the Bookstore backend.

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::BookRepository;
use crate::ids::IdGenerator;

use super::mutations::BookMutations;
use super::queries::BookQueries;

/// The GraphQL schema type
pub type BookstoreSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(
    repository: Arc<dyn BookRepository>,
    ids: Arc<dyn IdGenerator>,
) -> BookstoreSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(repository)
    .data(ids)
    .finish()
}
