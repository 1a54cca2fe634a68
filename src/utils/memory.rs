use std::collections::HashMap;
use std::sync::RwLock;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::{Attributed, Identifiable};

struct Rows<E> {
    index: HashMap<String, usize>,
    rows: Vec<E>,
}

// MemoryTable keeps entities in insertion order with an id index. Every
// operation takes the lock once, so check-and-insert is atomic.
pub(crate) struct MemoryTable<E> {
    name: String,
    inner: RwLock<Rows<E>>,
}

impl<E: Identifiable + Attributed + Clone> MemoryTable<E> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            inner: RwLock::new(Rows { index: HashMap::new(), rows: vec![] }),
        }
    }

    pub(crate) fn insert(&self, entity: &E) -> BookstoreResult<usize> {
        let mut guard = self.inner.write().map_err(|_| BookstoreError::poisoned(&self.name))?;
        let id = entity.id();
        if guard.index.contains_key(&id) {
            return Err(BookstoreError::duplicate_key(
                format!("{} already contains {}", self.name, id).as_str()));
        }
        let pos = guard.rows.len();
        guard.rows.push(entity.clone());
        guard.index.insert(id, pos);
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> BookstoreResult<E> {
        let guard = self.inner.read().map_err(|_| BookstoreError::poisoned(&self.name))?;
        guard.index.get(id)
            .and_then(|pos| guard.rows.get(*pos))
            .cloned()
            .ok_or_else(|| BookstoreError::not_found(format!("{} not found for {}", self.name, id).as_str()))
    }

    // applies `change` to the stored entity under the write lock and returns a
    // copy of the result along with whatever `change` returned
    pub(crate) fn modify<F, R>(&self, id: &str, change: F) -> BookstoreResult<(E, R)>
        where F: FnOnce(&mut E) -> BookstoreResult<R> {
        let mut guard = self.inner.write().map_err(|_| BookstoreError::poisoned(&self.name))?;
        let pos = *guard.index.get(id)
            .ok_or_else(|| BookstoreError::not_found(format!("{} not found for {}", self.name, id).as_str()))?;
        let entity = guard.rows.get_mut(pos)
            .ok_or_else(|| BookstoreError::runtime(format!("{} index out of sync for {}", self.name, id).as_str(), None))?;
        let out = change(entity)?;
        Ok((entity.clone(), out))
    }

    pub(crate) fn query(&self, predicate: &HashMap<String, String>) -> BookstoreResult<Vec<E>> {
        let guard = self.inner.read().map_err(|_| BookstoreError::poisoned(&self.name))?;
        Ok(guard.rows.iter()
            .filter(|row| predicate.iter().all(|(k, v)| row.attribute(k) == Some(v.as_str())))
            .cloned()
            .collect())
    }
}
