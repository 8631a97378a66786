//! Book collection repository
//!
//! The repository translates domain calls into storage queries and performs
//! no business validation; callers (the GraphQL resolvers) validate inputs
//! before any storage access.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Book document as stored in MongoDB. Authors and reviews are embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDocument {
    /// 24-hex object id, set by the caller before insert
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub published_date: DateTime<Utc>,
    pub publisher: String,
    /// Page count
    pub length: i32,
    pub authors: Vec<AuthorDocument>,
    #[serde(default)]
    pub reviews: Vec<ReviewDocument>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Author embedded in a book document. Owned by exactly one book; the id is
/// regenerated whenever the author list is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDocument {
    pub id: String,
    pub name: String,
}

/// Review embedded in a book document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDocument {
    pub id: String,
    /// 1-5 by convention
    pub rating: i32,
    pub title: String,
    pub description: String,
}

/// Storage operations over the book collection.
///
/// Mirrors what the GraphQL resolvers need; a Mongo-backed implementation is
/// the production default, and tests substitute an in-memory one.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, in storage order
    async fn get_all(&self) -> Result<Vec<BookDocument>>;

    /// One page of books plus the total unfiltered count. Page bounds are
    /// assumed already validated by the caller.
    async fn get_paged(&self, page: i32, page_size: i32) -> Result<(Vec<BookDocument>, u64)>;

    /// Exact match on id; absence is not an error
    async fn get_by_id(&self, id: &str) -> Result<Option<BookDocument>>;

    /// Stamp both timestamps and insert; the id must already be set
    async fn create(&self, book: BookDocument) -> Result<BookDocument>;

    /// Stamp updatedAt and fully replace the document matched by id.
    /// Returns whether any document was actually modified.
    async fn update(&self, id: &str, book: &mut BookDocument) -> Result<bool>;

    /// Returns whether a document was actually removed
    async fn delete(&self, id: &str) -> Result<bool>;
}

pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
}

impl MongoBookRepository {
    pub fn new(collection: Collection<BookDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn get_all(&self) -> Result<Vec<BookDocument>> {
        let books = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(books)
    }

    async fn get_paged(&self, page: i32, page_size: i32) -> Result<(Vec<BookDocument>, u64)> {
        let total_count = self.collection.count_documents(doc! {}).await?;

        let skip = (page as u64 - 1) * page_size as u64;
        let books = self
            .collection
            .find(doc! {})
            .skip(skip)
            .limit(page_size as i64)
            .await?
            .try_collect()
            .await?;

        Ok((books, total_count))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<BookDocument>> {
        let book = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(book)
    }

    async fn create(&self, mut book: BookDocument) -> Result<BookDocument> {
        let now = Utc::now();
        book.created_at = now;
        book.updated_at = now;
        self.collection.insert_one(&book).await?;
        Ok(book)
    }

    async fn update(&self, id: &str, book: &mut BookDocument) -> Result<bool> {
        book.updated_at = Utc::now();
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &*book)
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
