pub mod books;

pub use books::BookQueries;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::BookRepository;
    pub(crate) use crate::graphql::helpers::book_document_to_graphql;
    pub(crate) use crate::graphql::pagination::PagedBooksResult;
    pub(crate) use crate::graphql::types::Book;
    pub(crate) use crate::graphql::validation::{
        validate_book_id, validate_page, validate_page_size,
    };
}
