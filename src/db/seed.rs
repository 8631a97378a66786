//! Demo catalog seeding for development environments.
//!
//! Runs once at startup, only when SEED_DEMO_DATA is set and the books
//! collection is empty. Existing documents are never touched, so re-runs are
//! no-ops.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson::doc;
use tracing::debug;

use crate::db::{AuthorDocument, BOOKS_COLLECTION, BookDocument, Database, ReviewDocument};
use crate::ids::{IdGenerator, ObjectIdGenerator};

/// Insert the demo catalog if the books collection is empty.
/// Returns the number of books inserted (0 when skipped).
pub async fn seed_demo_books(db: &Database) -> Result<u64> {
    let collection = db.collection::<BookDocument>(BOOKS_COLLECTION);

    let existing = collection.count_documents(doc! {}).await?;
    if existing > 0 {
        debug!(existing, "Books collection already populated, skipping demo seed");
        return Ok(0);
    }

    let books = demo_books(&ObjectIdGenerator);
    let count = books.len() as u64;
    collection.insert_many(&books).await?;

    Ok(count)
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn demo_books(ids: &dyn IdGenerator) -> Vec<BookDocument> {
    let now = Utc::now();

    let book = |title: &str,
                image_url: &str,
                description: &str,
                published: DateTime<Utc>,
                publisher: &str,
                length: i32,
                authors: &[&str],
                reviews: &[(i32, &str, &str)]| BookDocument {
        id: ids.generate(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        description: description.to_string(),
        published_date: published,
        publisher: publisher.to_string(),
        length,
        authors: authors
            .iter()
            .map(|name| AuthorDocument {
                id: ids.generate(),
                name: name.to_string(),
            })
            .collect(),
        reviews: reviews
            .iter()
            .map(|(rating, title, description)| ReviewDocument {
                id: ids.generate(),
                rating: *rating,
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        created_at: now,
        updated_at: now,
    };

    vec![
        book(
            "C# in Depth: Fourth Edition",
            "https://images.manning.com/book/3/90e5f96-b921-41e9-9ca5-6b8e3e6ccba7/Skeet-CSID-4ed-HI.png",
            "A guided tour through the evolution of C#, aimed at developers \
             who already know the language and want to master it.",
            date(2019, 3, 23),
            "Manning",
            528,
            &["Jon Skeet"],
            &[
                (5, "Really in depth", "Explains the internals as well as the syntax. Highly recommended."),
                (4, "Not for beginners", "Dense but rewarding once you have a year or two of C# behind you."),
                (5, "Excellent writing", "Clear, precise and occasionally funny."),
            ],
        ),
        book(
            "The Rust Programming Language",
            "https://nostarch.com/sites/default/files/styles/uc_product/public/rust2ndeditionad.png",
            "The official book on Rust, covering ownership, traits, error \
             handling and concurrency from first principles.",
            date(2019, 8, 6),
            "No Starch Press",
            560,
            &["Steve Klabnik", "Carol Nichols"],
            &[
                (5, "The canonical reference", "Still the best starting point for the language."),
                (4, "Good but slow in places", "The middle chapters drag a little; the rest is superb."),
            ],
        ),
        book(
            "Designing Data-Intensive Applications",
            "https://learning.oreilly.com/library/cover/9781491903063/",
            "The big ideas behind reliable, scalable and maintainable systems: \
             storage engines, replication, partitioning and stream processing.",
            date(2017, 3, 16),
            "O'Reilly Media",
            616,
            &["Martin Kleppmann"],
            &[],
        ),
    ]
}
