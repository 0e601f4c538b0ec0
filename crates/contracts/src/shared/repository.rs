//! Data access for record explorers.
//!
//! Pages only see `RecordRepository<T>`; the in-memory implementation is
//! seeded from fixtures and keeps deletions for the current session.

use crate::shared::table::TableRecord;
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error("record not found: {0}")]
    NotFound(String),
}

pub trait RecordRepository<T>: Send + Sync {
    /// All records in store order
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    /// Remove one record
    fn remove(&self, id: &str) -> Result<T, RepositoryError>;

    /// Remove every record whose id is in `ids`; unknown ids are skipped.
    /// Returns the number removed.
    fn remove_many(&self, ids: &[String]) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: TableRecord> InMemoryRepository<T> {
    /// Seed the store; ids must be unique
    pub fn new(records: Vec<T>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.row_id().to_string()) {
                return Err(RepositoryError::DuplicateId(record.row_id().to_string()));
            }
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> RecordRepository<T> for InMemoryRepository<T>
where
    T: TableRecord + Send + Sync,
{
    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.read().iter().find(|r| r.row_id() == id).cloned()
    }

    fn remove(&self, id: &str) -> Result<T, RepositoryError> {
        let mut records = self.write();
        let pos = records
            .iter()
            .position(|r| r.row_id() == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        Ok(records.remove(pos))
    }

    fn remove_many(&self, ids: &[String]) -> usize {
        let ids: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut records = self.write();
        let before = records.len();
        records.retain(|r| !ids.contains(r.row_id()));
        let removed = before - records.len();
        log::debug!("removed {} record(s)", removed);
        removed
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_room_type::aggregate::RoomType;
    use crate::domain::a003_room_type::fixtures::room_types;

    fn repo() -> InMemoryRepository<RoomType> {
        InMemoryRepository::new(room_types()).unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut records = room_types();
        records.push(records[0].clone());
        let err = InMemoryRepository::new(records).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateId(room_types()[0].id.clone()));
    }

    #[test]
    fn test_remove_and_not_found() {
        let repo = repo();
        let before = repo.len();
        let id = repo.list()[0].id.clone();
        assert_eq!(repo.remove(&id).unwrap().id, id);
        assert_eq!(repo.len(), before - 1);
        assert!(repo.get(&id).is_none());
        assert_eq!(repo.remove(&id), Err(RepositoryError::NotFound(id)));
    }

    #[test]
    fn test_remove_many_skips_unknown_ids() {
        let repo = repo();
        let before = repo.len();
        let ids: Vec<String> = repo.list().iter().take(2).map(|r| r.id.clone()).collect();
        let mut with_unknown = ids.clone();
        with_unknown.push("RT-999".to_string());
        assert_eq!(repo.remove_many(&with_unknown), 2);
        assert_eq!(repo.len(), before - 2);
    }
}
