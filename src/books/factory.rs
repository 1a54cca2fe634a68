use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::{Repository, RepositoryStore};

pub(crate) async fn create_book_repository(store: RepositoryStore, seed: &[BookEntity]) -> BookstoreResult<Arc<dyn BookRepository>> {
    match store {
        RepositoryStore::InMemory => {
            let repo = MemoryBookRepository::new("books");
            for book in seed {
                repo.create(book).await?;
            }
            info!(books = seed.len(), "catalog loaded");
            Ok(Arc::new(repo))
        }
    }
}
