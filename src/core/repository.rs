use async_trait::async_trait;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::bookstore::BookstoreResult;
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails with duplicate-key if its id is already taken
    async fn create(&self, entity: &Entity) -> BookstoreResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> BookstoreResult<Entity>;

    // find entities whose attributes equal every predicate value; an empty
    // predicate returns all entities in insertion order
    async fn query(&self, predicate: &HashMap<String, String>) -> BookstoreResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => GatewayPublisherVia::Logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_map_store_to_publisher() {
        assert_eq!(GatewayPublisherVia::Logs, RepositoryStore::InMemory.gateway_publisher());
    }
}
