pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_author(&self, author: &str) -> BookstoreResult<Vec<BookEntity>>;

    async fn find_by_title(&self, title: &str) -> BookstoreResult<Vec<BookEntity>>;

    // adds or replaces the review of `reviewer`; returns the updated book and the
    // review it replaced, if any
    async fn put_review(&self, isbn: &str, reviewer: &str, review: &str) -> BookstoreResult<(BookEntity, Option<String>)>;

    // removes the review of `reviewer`, failing with not-found when there is none
    async fn remove_review(&self, isbn: &str, reviewer: &str) -> BookstoreResult<BookEntity>;
}
