use std::sync::Arc;
use crate::core::repository::RepositoryStore;
use crate::users::repository::UserRepository;
use crate::users::repository::memory_user_repository::MemoryUserRepository;

pub(crate) fn create_user_repository(store: RepositoryStore) -> Arc<dyn UserRepository> {
    match store {
        RepositoryStore::InMemory => Arc::new(MemoryUserRepository::new("users")),
    }
}
