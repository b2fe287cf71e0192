//! In-memory transactional key-value store.
//!
//! The reference implementation of the persistence boundary: a committed
//! map plus an optional staged overlay. While a scope is open, writes land
//! in the overlay and reads see the overlay merged over committed state.
//! Commit applies the overlay; rollback discards it.
//!
//! One store carries at most one open scope; it models a single logical
//! connection. Concurrent units of work each get their own store (or, in
//! production, their own pooled connection).

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::transaction::{TransactionError, TransactionManager};

#[derive(Default)]
struct Inner {
    committed: BTreeMap<String, Value>,
    /// Staged overlay while a scope is open. `None` values are tombstones.
    staged: Option<BTreeMap<String, Option<Value>>>,
    sequence: i64,
}

/// Shared in-memory backend for the memory repositories.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a key, seeing staged writes when a scope is open.
    pub fn get(&self, key: &str) -> Option<Value> {
        let inner = self.inner.lock().unwrap();

        if let Some(staged) = &inner.staged {
            if let Some(entry) = staged.get(key) {
                return entry.clone();
            }
        }

        inner.committed.get(key).cloned()
    }

    /// Writes a key. Staged when a scope is open, durable otherwise.
    pub fn put(&self, key: impl Into<String>, value: Value) {
        let mut inner = self.inner.lock().unwrap();

        let key = key.into();
        match &mut inner.staged {
            Some(staged) => {
                staged.insert(key, Some(value));
            }
            None => {
                inner.committed.insert(key, value);
            }
        }
    }

    /// Removes a key. Returns whether the key was visible before removal.
    pub fn remove(&self, key: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();

        let existed = match &inner.staged {
            Some(staged) => match staged.get(key) {
                Some(entry) => entry.is_some(),
                None => inner.committed.contains_key(key),
            },
            None => inner.committed.contains_key(key),
        };

        match &mut inner.staged {
            Some(staged) => {
                staged.insert(key.to_string(), None);
            }
            None => {
                inner.committed.remove(key);
            }
        }

        existed
    }

    /// Returns all visible entries whose key starts with `prefix`, in key
    /// order.
    pub fn scan_prefix(&self, prefix: &str) -> Vec<(String, Value)> {
        let inner = self.inner.lock().unwrap();

        let mut merged: BTreeMap<String, Option<Value>> = inner
            .committed
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), Some(v.clone())))
            .collect();

        if let Some(staged) = &inner.staged {
            for (k, v) in staged.iter().filter(|(k, _)| k.starts_with(prefix)) {
                merged.insert(k.clone(), v.clone());
            }
        }

        merged
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }

    /// Allocates the next id. Ids survive rollback; gaps are fine, as with
    /// database sequences.
    pub fn next_id(&self) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.sequence += 1;
        inner.sequence
    }

    fn begin(&self) -> Result<(), TransactionError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.staged.is_some() {
            return Err(TransactionError::AlreadyInTransaction);
        }

        inner.staged = Some(BTreeMap::new());
        Ok(())
    }

    fn commit(&self) -> Result<(), TransactionError> {
        let mut inner = self.inner.lock().unwrap();

        let Some(staged) = inner.staged.take() else {
            return Err(TransactionError::NoActiveTransaction);
        };

        for (key, value) in staged {
            match value {
                Some(value) => {
                    inner.committed.insert(key, value);
                }
                None => {
                    inner.committed.remove(&key);
                }
            }
        }

        Ok(())
    }

    fn rollback(&self) {
        // Idempotent: discarding a nonexistent overlay is a no-op.
        self.inner.lock().unwrap().staged = None;
    }
}

/// Transaction manager over a [`MemoryStore`].
pub struct MemoryTransactionManager {
    store: Arc<MemoryStore>,
}

impl MemoryTransactionManager {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionManager for MemoryTransactionManager {
    async fn start_transaction(&mut self) -> Result<(), TransactionError> {
        self.store.begin()
    }

    async fn commit_transaction(&mut self) -> Result<(), TransactionError> {
        self.store.commit()
    }

    async fn rollback_transaction(&mut self) -> Result<(), TransactionError> {
        self.store.rollback();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_see_staged_writes() {
        let store = MemoryStore::new();
        store.begin().unwrap();
        store.put("k", json!(1));
        assert_eq!(store.get("k"), Some(json!(1)));
    }

    #[test]
    fn test_scan_prefix_merges_overlay() {
        let store = MemoryStore::new();
        store.put("a:1", json!(1));
        store.put("a:2", json!(2));
        store.put("b:1", json!(3));

        store.begin().unwrap();
        store.put("a:3", json!(4));
        store.remove("a:1");

        let keys: Vec<String> = store.scan_prefix("a:").into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a:2".to_string(), "a:3".to_string()]);
    }

    #[test]
    fn test_ids_survive_rollback() {
        let store = MemoryStore::new();
        store.begin().unwrap();
        let first = store.next_id();
        store.rollback();
        assert_eq!(store.next_id(), first + 1);
    }
}
