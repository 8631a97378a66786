//! GraphQL type definitions
//!
//! These types mirror the stored documents but are decorated with
//! async-graphql attributes. Timestamps stay internal to the documents.

use async_graphql::{ComplexObject, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

/// A book in the catalog, with embedded authors and reviews
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub published_date: DateTime<Utc>,
    pub publisher: String,
    /// Page count
    pub length: i32,
    pub authors: Vec<Author>,
    pub reviews: Vec<Review>,
}

#[ComplexObject]
impl Book {
    /// Mean of all review ratings, rounded to one decimal place.
    /// Null when the book has no reviews.
    async fn average_review(&self) -> Option<f64> {
        average_rating(self.reviews.iter().map(|r| r.rating))
    }
}

/// An author of a book
#[derive(Debug, Clone, SimpleObject)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// A reader review of a book
#[derive(Debug, Clone, SimpleObject)]
pub struct Review {
    pub id: String,
    /// 1-5 by convention
    pub rating: i32,
    pub title: String,
    pub description: String,
}

/// Author name as supplied by the caller; ids are always server-generated
#[derive(Debug, Clone, InputObject)]
pub struct AuthorInput {
    pub name: String,
}

/// Input for the addBook mutation
#[derive(Debug, Clone, InputObject)]
pub struct AddBookInput {
    pub title: String,
    #[graphql(default)]
    pub image_url: String,
    #[graphql(default)]
    pub description: String,
    pub published_date: Option<DateTime<Utc>>,
    #[graphql(default)]
    pub publisher: String,
    pub length: i32,
    pub authors: Vec<AuthorInput>,
}

/// Input for the updateBook mutation; replaces every scalar field and the
/// whole author list, leaving reviews untouched
#[derive(Debug, Clone, InputObject)]
pub struct UpdateBookInput {
    pub id: String,
    pub title: String,
    #[graphql(default)]
    pub image_url: String,
    #[graphql(default)]
    pub description: String,
    pub published_date: Option<DateTime<Utc>>,
    #[graphql(default)]
    pub publisher: String,
    pub length: i32,
    pub authors: Vec<AuthorInput>,
}

/// Rounded mean of a sequence of ratings; `None` for an empty sequence.
/// Pure so it stays trivially unit-testable.
pub fn average_rating(ratings: impl IntoIterator<Item = i32>) -> Option<f64> {
    let mut sum = 0i64;
    let mut count = 0u32;
    for rating in ratings {
        sum += i64::from(rating);
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let mean = sum as f64 / f64::from(count);
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_no_ratings_is_none() {
        assert_eq!(average_rating([]), None);
    }

    #[test]
    fn average_of_one_rating_is_that_rating() {
        assert_eq!(average_rating([4]), Some(4.0));
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        // 13 / 3 = 4.333... -> 4.3
        assert_eq!(average_rating([5, 4, 4]), Some(4.3));
        // 14 / 3 = 4.666... -> 4.7
        assert_eq!(average_rating([5, 5, 4]), Some(4.7));
    }

    #[test]
    fn average_of_exact_mean_stays_exact() {
        assert_eq!(average_rating([5, 1]), Some(3.0));
    }
}
