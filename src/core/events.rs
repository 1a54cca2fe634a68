use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of change recorded by an event
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records a change to users or reviews so that other services can
// follow the catalog without polling it
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Added, name, group, key, data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Updated, name, group, key, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Deleted, name, group, key, data)
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    fn build<T: Serialize>(kind: DomainEventType, name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: HashMap::new(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
