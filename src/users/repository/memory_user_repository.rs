use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;
use crate::utils::memory::MemoryTable;

pub struct MemoryUserRepository {
    table: MemoryTable<UserEntity>,
}

impl MemoryUserRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<UserEntity> for MemoryUserRepository {
    async fn create(&self, entity: &UserEntity) -> BookstoreResult<usize> {
        self.table.insert(entity)
    }

    async fn get(&self, id: &str) -> BookstoreResult<UserEntity> {
        self.table.get(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> BookstoreResult<Vec<UserEntity>> {
        self.table.query(predicate)
    }
}

impl UserRepository for MemoryUserRepository {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use crate::core::bookstore::BookstoreError;
    use crate::core::repository::Repository;
    use crate::users::domain::model::UserEntity;
    use crate::users::repository::memory_user_repository::MemoryUserRepository;

    #[tokio::test]
    async fn test_should_create_get_users() {
        let users_repo = MemoryUserRepository::new("users");
        let size = users_repo.create(&UserEntity::new("alice", "secret")).await.expect("should create user");
        assert_eq!(1, size);
        let loaded = users_repo.get("alice").await.expect("should return user");
        assert_eq!("secret", loaded.password.as_str());
        assert!(matches!(users_repo.get("bob").await, Err(BookstoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_username() {
        let users_repo = MemoryUserRepository::new("users");
        users_repo.create(&UserEntity::new("alice", "secret")).await.expect("should create user");
        let dup = users_repo.create(&UserEntity::new("alice", "other")).await;
        assert!(matches!(dup, Err(BookstoreError::DuplicateKey { .. })));
        assert_eq!("secret", users_repo.get("alice").await.expect("should return user").password.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_registration_order() {
        let users_repo = MemoryUserRepository::new("users");
        for name in ["carol", "alice", "bob"] {
            users_repo.create(&UserEntity::new(name, "pw")).await.expect("should create user");
        }
        let all = users_repo.query(&HashMap::new()).await.expect("should list users");
        assert_eq!(vec!["carol", "alice", "bob"], all.iter().map(|u| u.username.as_str()).collect::<Vec<_>>());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_register_once_under_concurrency() {
        let users_repo = Arc::new(MemoryUserRepository::new("users"));
        let mut handles = vec![];
        for i in 0..32 {
            let repo = users_repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(&UserEntity::new("racer", format!("pw{}", i).as_str())).await.is_ok()
            }));
        }
        let mut created = 0;
        for handle in handles {
            if handle.await.expect("task should finish") {
                created += 1;
            }
        }
        assert_eq!(1, created);
    }
}
