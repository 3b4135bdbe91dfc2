use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{ReceiptId, ScoreRecord};

/// Storage abstraction so the service can be exercised in isolation.
pub trait PointsRepository: Send + Sync {
    /// Stores a new record. Existing ids are never overwritten.
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store shared by every request task.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPointsRepository {
    records: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl InMemoryPointsRepository {
    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("points store lock poisoned".to_string())
}

impl PointsRepository for InMemoryPointsRepository {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.points);
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).map(|points| ScoreRecord {
            id: id.clone(),
            points: *points,
        }))
    }
}
