//! Input validation shared across GraphQL query/mutation modules.
//!
//! Each rule is a small predicate so every resolver pulls in only the checks
//! for the fields it actually touches. All rules run before any storage
//! access.

use thiserror::Error;

use crate::ids;

use super::types::AuthorInput;

/// A rejected input, reported to the caller before any storage access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Page must be greater than 0")]
    PageOutOfRange,
    #[error("Page size must be between 1 and 100")]
    PageSizeOutOfRange,
    #[error("Book ID is required and cannot be empty")]
    MissingId,
    #[error("Invalid book ID format: '{0}'. Expected a 24-character hex object id")]
    MalformedId(String),
    #[error("Title is required")]
    MissingTitle,
    #[error("Length must be greater than 0")]
    NonPositiveLength,
    #[error("At least one author is required")]
    NoAuthors,
}

pub fn validate_page(page: i32) -> Result<(), ValidationError> {
    if page < 1 {
        return Err(ValidationError::PageOutOfRange);
    }
    Ok(())
}

pub fn validate_page_size(page_size: i32) -> Result<(), ValidationError> {
    if !(1..=100).contains(&page_size) {
        return Err(ValidationError::PageSizeOutOfRange);
    }
    Ok(())
}

pub fn validate_book_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::MissingId);
    }
    if !ids::is_valid_id(id) {
        return Err(ValidationError::MalformedId(id.to_string()));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    Ok(())
}

pub fn validate_length(length: i32) -> Result<(), ValidationError> {
    if length <= 0 {
        return Err(ValidationError::NonPositiveLength);
    }
    Ok(())
}

pub fn validate_authors(authors: &[AuthorInput]) -> Result<(), ValidationError> {
    if authors.is_empty() {
        return Err(ValidationError::NoAuthors);
    }
    Ok(())
}
