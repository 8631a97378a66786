pub mod books;

pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::BookRepository;
    pub(crate) use crate::graphql::helpers::{
        authors_from_input, book_document_to_graphql, new_book_document,
    };
    pub(crate) use crate::graphql::types::{AddBookInput, Book, UpdateBookInput};
    pub(crate) use crate::graphql::validation::{
        validate_authors, validate_book_id, validate_length, validate_title,
    };
    pub(crate) use crate::ids::IdGenerator;
}
