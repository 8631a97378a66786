//! Database connection and collection access

pub mod books;
pub mod seed;

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

pub use books::{
    AuthorDocument, BookDocument, BookRepository, MongoBookRepository, ReviewDocument,
};

/// Name of the collection holding book documents.
pub const BOOKS_COLLECTION: &str = "books";

/// Database wrapper providing typed collection access.
///
/// Clones are cheap and share one underlying connection pool, so a single
/// instance is safe to hand to every request handler.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB. Failure here is fatal to process startup.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database),
        })
    }

    /// Get a typed collection by name
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Get a book repository over the books collection
    pub fn books(&self) -> MongoBookRepository {
        MongoBookRepository::new(self.collection(BOOKS_COLLECTION))
    }

    /// Verify the server is reachable
    pub async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create the indexes expected by the catalog's access patterns:
    /// title asc, publisher asc, publishedDate desc, (title, publisher) asc.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let books = self.collection::<BookDocument>(BOOKS_COLLECTION);

        let models = vec![
            IndexModel::builder()
                .keys(doc! { "title": 1 })
                .options(IndexOptions::builder().name("title_idx".to_string()).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "publisher": 1 })
                .options(
                    IndexOptions::builder()
                        .name("publisher_idx".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "publishedDate": -1 })
                .options(
                    IndexOptions::builder()
                        .name("published_date_idx".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "title": 1, "publisher": 1 })
                .options(
                    IndexOptions::builder()
                        .name("title_publisher_idx".to_string())
                        .build(),
                )
                .build(),
        ];

        books.create_indexes(models).await?;
        Ok(())
    }
}
