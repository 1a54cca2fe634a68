use std::collections::HashMap;
use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

pub struct MemoryBookRepository {
    table: MemoryTable<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookstoreResult<usize> {
        if entity.isbn.trim().is_empty() {
            return Err(BookstoreError::validation("book isbn must not be empty", None));
        }
        self.table.insert(entity)
    }

    async fn get(&self, id: &str) -> BookstoreResult<BookEntity> {
        self.table.get(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> BookstoreResult<Vec<BookEntity>> {
        self.table.query(predicate)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> BookstoreResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("author".to_string(), author.to_string()),
        ]);
        self.query(&predicate).await
    }

    async fn find_by_title(&self, title: &str) -> BookstoreResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("title".to_string(), title.to_string()),
        ]);
        self.query(&predicate).await
    }

    async fn put_review(&self, isbn: &str, reviewer: &str, review: &str) -> BookstoreResult<(BookEntity, Option<String>)> {
        debug!(isbn, reviewer, "storing review");
        self.table.modify(isbn, |book| {
            Ok(book.reviews.insert(reviewer.to_string(), review.to_string()))
        })
    }

    async fn remove_review(&self, isbn: &str, reviewer: &str) -> BookstoreResult<BookEntity> {
        debug!(isbn, reviewer, "removing review");
        self.table.modify(isbn, |book| {
            book.reviews.remove(reviewer).map(|_| ()).ok_or_else(|| BookstoreError::not_found(
                format!("no review by {} for {}", reviewer, isbn).as_str()))
        }).map(|(book, _)| book)
    }
}
