pub mod service;

use async_trait::async_trait;
use crate::books::domain::Reviews;
use crate::books::dto::{BookDto, BookListing};
use crate::core::bookstore::BookstoreResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> BookstoreResult<BookListing>;
    async fn find_book_by_isbn(&self, isbn: &str) -> BookstoreResult<BookDto>;
    async fn find_books_by_author(&self, author: &str) -> BookstoreResult<BookListing>;
    async fn find_books_by_title(&self, title: &str) -> BookstoreResult<BookListing>;
    async fn find_reviews(&self, isbn: &str) -> BookstoreResult<Reviews>;
    async fn add_review(&self, isbn: &str, reviewer: &str, review: &str) -> BookstoreResult<Reviews>;
    async fn remove_review(&self, isbn: &str, reviewer: &str) -> BookstoreResult<Reviews>;
}
