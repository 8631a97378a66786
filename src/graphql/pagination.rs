//! Page-number pagination types for GraphQL
//!
//! The catalog uses classic page/pageSize pagination. The metadata is a pure
//! function of `(page, pageSize, totalCount)` so it is trivially
//! unit-testable.

use async_graphql::SimpleObject;

use super::types::Book;

/// One page of books plus pagination metadata
#[derive(SimpleObject, Debug, Clone)]
pub struct PagedBooksResult {
    pub books: Vec<Book>,
    pub total_count: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PagedBooksResult {
    /// Assemble a page result from a slice of books and the metadata triple
    pub fn assemble(books: Vec<Book>, page: i32, page_size: i32, total_count: u64) -> Self {
        let meta = page_meta(page, page_size, total_count);
        Self {
            books,
            total_count: total_count as i64,
            page,
            page_size,
            total_pages: meta.total_pages,
            has_next_page: meta.has_next_page,
            has_previous_page: meta.has_previous_page,
        }
    }
}

/// Pagination metadata derived from a `(page, pageSize, totalCount)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: i32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Compute pagination metadata. Integer ceiling division for totalPages; an
/// empty collection yields zero pages and never a next page.
pub fn page_meta(page: i32, page_size: i32, total_count: u64) -> PageMeta {
    let total_pages = total_count.div_ceil(page_size as u64) as i32;
    PageMeta {
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn total_pages_uses_ceiling_division() {
        assert_eq!(page_meta(1, 10, 15).total_pages, 2);
        assert_eq!(page_meta(1, 10, 20).total_pages, 2);
        assert_eq!(page_meta(1, 10, 21).total_pages, 3);
        assert_eq!(page_meta(1, 10, 1).total_pages, 1);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let meta = page_meta(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn empty_collection_past_page_one_still_reports_previous() {
        let meta = page_meta(3, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn next_and_previous_flags() {
        // 15 items, 5 per page -> 3 pages
        let first = page_meta(1, 5, 15);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let middle = page_meta(2, 5, 15);
        assert!(middle.has_next_page);
        assert!(middle.has_previous_page);

        let last = page_meta(3, 5, 15);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
    }

    #[test]
    fn page_past_the_end_has_no_next() {
        let meta = page_meta(7, 5, 15);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }
}
