use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get the full unfiltered book list
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();

        let docs = repo
            .get_all()
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to retrieve books: {}", e)))?;

        Ok(docs.into_iter().map(book_document_to_graphql).collect())
    }

    /// Get one page of books plus pagination metadata
    async fn paged_books(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 10)] page_size: i32,
    ) -> Result<PagedBooksResult> {
        validate_page(page)?;
        validate_page_size(page_size)?;

        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();

        let (docs, total_count) = repo.get_paged(page, page_size).await.map_err(|e| {
            async_graphql::Error::new(format!("Failed to retrieve paged books: {}", e))
        })?;

        let books = docs.into_iter().map(book_document_to_graphql).collect();
        Ok(PagedBooksResult::assemble(
            books,
            page,
            page_size,
            total_count,
        ))
    }

    /// Get a specific book by ID
    async fn book(&self, ctx: &Context<'_>, id: String) -> Result<Book> {
        validate_book_id(&id)?;

        let repo = ctx.data_unchecked::<Arc<dyn BookRepository>>();

        let doc = repo
            .get_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to retrieve book: {}", e)))?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("Book with ID '{}' was not found", id))
            })?;

        Ok(book_document_to_graphql(doc))
    }
}
