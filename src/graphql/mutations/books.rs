use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a new book to the catalog
    async fn add_book(&self, ctx: &Context<'_>, input: AddBookInput) -> Result<Book> {
        validate_title(&input.title)?;
        validate_length(input.length)?;
        validate_authors(&input.authors)?;

        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();
        let ids = ctx.data_unchecked::<Arc<dyn IdGenerator>>();

        let book = new_book_document(input, ids.as_ref());
        tracing::info!(book_id = %book.id, title = %book.title, "Adding book");

        let stored = repo
            .create(book)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to create book: {}", e)))?;

        Ok(book_document_to_graphql(stored))
    }

    /// Update a book: replaces every scalar field and the entire author list
    /// (with fresh author ids), leaving reviews untouched
    async fn update_book(&self, ctx: &Context<'_>, input: UpdateBookInput) -> Result<Book> {
        validate_book_id(&input.id)?;
        validate_title(&input.title)?;
        validate_length(input.length)?;
        validate_authors(&input.authors)?;

        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();
        let ids = ctx.data_unchecked::<Arc<dyn IdGenerator>>();

        let mut book = repo
            .get_by_id(&input.id)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to update book: {}", e)))?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("Book with ID '{}' was not found", input.id))
            })?;

        book.title = input.title;
        book.image_url = input.image_url;
        book.description = input.description;
        book.published_date = input.published_date.unwrap_or_default();
        book.publisher = input.publisher;
        book.length = input.length;
        book.authors = authors_from_input(&input.authors, ids.as_ref());

        // A concurrent delete between the fetch above and this replace makes
        // the repository report nothing modified; that race is accepted.
        let modified = repo
            .update(&input.id, &mut book)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to update book: {}", e)))?;
        if !modified {
            return Err(async_graphql::Error::new(format!(
                "Failed to update book with ID '{}'",
                input.id
            )));
        }

        tracing::info!(book_id = %book.id, title = %book.title, "Updated book");
        Ok(book_document_to_graphql(book))
    }

    /// Delete a book by ID. Deletion is physical; returns true on success
    async fn delete_book(&self, ctx: &Context<'_>, id: String) -> Result<bool> {
        validate_book_id(&id)?;

        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();

        repo.get_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to delete book: {}", e)))?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("Book with ID '{}' was not found", id))
            })?;

        let deleted = repo
            .delete(&id)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to delete book: {}", e)))?;
        if !deleted {
            return Err(async_graphql::Error::new(format!(
                "Failed to delete book with ID '{}'",
                id
            )));
        }

        tracing::info!(book_id = %id, "Deleted book");
        Ok(true)
    }
}
