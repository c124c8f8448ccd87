use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProfileStore, UserDraft, UserRecord};
use crate::error::StoreError;

/// An in-memory profile store for tests and demonstration.
///
/// Behaves like the real backend: ids are assigned on create, updates
/// replace the whole record, deletes of unknown ids report not-found. A
/// one-shot failure can be scripted to exercise error paths.
pub struct InMemoryStore {
    records: Mutex<Vec<UserRecord>>,
    fail_next: Mutex<Option<u16>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next operation fail with the given HTTP status.
    pub fn fail_next(&self, status: u16) {
        *self.fail_next.lock().unwrap() = Some(status);
    }

    fn take_fault(&self) -> Result<(), StoreError> {
        match self.fail_next.lock().unwrap().take() {
            Some(status) => Err(StoreError::RequestFailed { status }),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.take_fault()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<UserRecord, StoreError> {
        self.take_fault()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        self.take_fault()?;
        let record = UserRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            photo: draft.photo.clone(),
            brief: draft.brief.clone(),
            contact: draft.contact.clone(),
            interests: draft.interests.clone(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        self.take_fault()?;
        let mut records = self.records.lock().unwrap();
        // A real backend answers PUT on a missing id with a plain 404.
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RequestFailed { status: 404 })?;
        *slot = UserRecord {
            id: id.to_string(),
            name: draft.name.clone(),
            photo: draft.photo.clone(),
            brief: draft.brief.clone(),
            contact: draft.contact.clone(),
            interests: draft.interests.clone(),
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.take_fault()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
