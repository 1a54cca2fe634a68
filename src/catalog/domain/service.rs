use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::domain::Reviews;
use crate::books::dto::{BookDto, BookListing};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const NO_BOOKS_BY_AUTHOR: &str = "No books found by this author";
pub const NO_BOOKS_WITH_TITLE: &str = "No books found with this title";
pub const REVIEW_NOT_FOUND: &str = "Review not found";

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    // the review change is already stored, so a failed publish is only logged
    async fn publish_reviews(&self, event: serde_json::Result<DomainEvent>, isbn: &str, reviewer: &str) {
        let published = match event {
            Ok(event) => {
                let event = event
                    .with_metadata("branch", self.branch_id.as_str())
                    .with_metadata("reviewer", reviewer);
                self.events_publisher.publish(&event).await
            }
            Err(err) => Err(BookstoreError::from(err)),
        };
        if let Err(err) = published {
            warn!(isbn, reviewer, error = %err, "failed to publish review event");
        }
    }
}

fn to_listing(books: Vec<BookEntity>, not_found: &str) -> BookstoreResult<BookListing> {
    if books.is_empty() {
        return Err(BookstoreError::not_found(not_found));
    }
    Ok(BookListing(books.iter().map(BookDto::from).collect()))
}

// repositories report their own wording for missing keys; clients get a fixed one
fn book_not_found(err: BookstoreError) -> BookstoreError {
    match err {
        BookstoreError::NotFound { .. } => BookstoreError::not_found(BOOK_NOT_FOUND),
        other => other,
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> BookstoreResult<BookListing> {
        let books = self.book_repository.query(&HashMap::new()).await?;
        Ok(BookListing(books.iter().map(BookDto::from).collect()))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> BookstoreResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b)).map_err(book_not_found)
    }

    async fn find_books_by_author(&self, author: &str) -> BookstoreResult<BookListing> {
        to_listing(self.book_repository.find_by_author(author).await?, NO_BOOKS_BY_AUTHOR)
    }

    async fn find_books_by_title(&self, title: &str) -> BookstoreResult<BookListing> {
        to_listing(self.book_repository.find_by_title(title).await?, NO_BOOKS_WITH_TITLE)
    }

    async fn find_reviews(&self, isbn: &str) -> BookstoreResult<Reviews> {
        self.book_repository.get(isbn).await.map(|b| b.reviews).map_err(book_not_found)
    }

    async fn add_review(&self, isbn: &str, reviewer: &str, review: &str) -> BookstoreResult<Reviews> {
        if review.trim().is_empty() {
            return Err(BookstoreError::validation("Review text is required", Some("missing_review".to_string())));
        }
        let (book, previous) = self.book_repository.put_review(isbn, reviewer, review).await.map_err(book_not_found)?;
        let replaced = previous.is_some();
        info!(isbn, reviewer, replaced, "review stored");
        let event = if replaced {
            DomainEvent::updated("reviews", "books", isbn, &book.reviews)
        } else {
            DomainEvent::added("reviews", "books", isbn, &book.reviews)
        };
        self.publish_reviews(event, isbn, reviewer).await;
        Ok(book.reviews)
    }

    async fn remove_review(&self, isbn: &str, reviewer: &str) -> BookstoreResult<Reviews> {
        let book = self.book_repository.get(isbn).await.map_err(book_not_found)?;
        if !book.reviews.contains_key(reviewer) {
            return Err(BookstoreError::not_found(REVIEW_NOT_FOUND));
        }
        let book = self.book_repository.remove_review(isbn, reviewer).await.map_err(|err| match err {
            BookstoreError::NotFound { .. } => BookstoreError::not_found(REVIEW_NOT_FOUND),
            other => other,
        })?;
        info!(isbn, reviewer, "review removed");
        self.publish_reviews(DomainEvent::deleted("reviews", "books", isbn, &reviewer), isbn, reviewer).await;
        Ok(book.reviews)
    }
}
