// Helper functions shared across GraphQL query/mutation modules.

use chrono::Utc;

use crate::db::{AuthorDocument, BookDocument};
use crate::ids::IdGenerator;

use super::types::{AddBookInput, Author, AuthorInput, Book, Review};

/// Convert a BookDocument from the database to a GraphQL Book type
pub(crate) fn book_document_to_graphql(doc: BookDocument) -> Book {
    Book {
        id: doc.id,
        title: doc.title,
        image_url: doc.image_url,
        description: doc.description,
        published_date: doc.published_date,
        publisher: doc.publisher,
        length: doc.length,
        authors: doc
            .authors
            .into_iter()
            .map(|a| Author {
                id: a.id,
                name: a.name,
            })
            .collect(),
        reviews: doc
            .reviews
            .into_iter()
            .map(|r| Review {
                id: r.id,
                rating: r.rating,
                title: r.title,
                description: r.description,
            })
            .collect(),
    }
}

/// Build embedded author documents from input, generating a fresh id for
/// each. Caller-supplied ids are never honored.
pub(crate) fn authors_from_input(
    authors: &[AuthorInput],
    ids: &dyn IdGenerator,
) -> Vec<AuthorDocument> {
    authors
        .iter()
        .map(|a| AuthorDocument {
            id: ids.generate(),
            name: a.name.clone(),
        })
        .collect()
}

/// Construct a new book document from validated input. Timestamps are
/// placeholders here; the repository stamps them on create.
pub(crate) fn new_book_document(input: AddBookInput, ids: &dyn IdGenerator) -> BookDocument {
    let now = Utc::now();
    BookDocument {
        id: ids.generate(),
        title: input.title,
        image_url: input.image_url,
        description: input.description,
        published_date: input.published_date.unwrap_or_default(),
        publisher: input.publisher,
        length: input.length,
        authors: authors_from_input(&input.authors, ids),
        reviews: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}
