pub mod service;

use async_trait::async_trait;
use crate::core::bookstore::BookstoreResult;
use crate::users::dto::UserDto;

#[async_trait]
pub trait AccountService: Sync + Send {
    async fn register(&self, username: &str, password: &str) -> BookstoreResult<UserDto>;
    async fn authenticate(&self, username: &str, password: &str) -> BookstoreResult<UserDto>;
}
