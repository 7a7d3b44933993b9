//! In-memory batch store for local development and testing.
//!
//! Holds one roster snapshot behind an `RwLock`. Order is significant: the
//! vector keeps backend query order, inserts append, and updates replace in
//! place so an edited batch keeps its position.

use async_trait::async_trait;
use log::info;
use parking_lot::RwLock;

use super::error::{ErrorContext, StoreError, StoreResult};
use super::repository::BatchRepository;
use crate::api::{Batch, BatchId, BatchRoster};

#[derive(Default)]
struct RosterState {
    batches: Vec<Batch>,
    checksum: Option<String>,
}

/// In-memory implementation of [`BatchRepository`].
pub struct LocalBatchStore {
    state: RwLock<RosterState>,
}

impl LocalBatchStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RosterState::default()),
        }
    }

    /// Create a store pre-loaded with a parsed roster.
    pub fn with_roster(roster: BatchRoster) -> Self {
        Self {
            state: RwLock::new(RosterState {
                batches: roster.batches,
                checksum: Some(roster.checksum),
            }),
        }
    }
}

impl Default for LocalBatchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchRepository for LocalBatchStore {
    async fn replace_roster(&self, roster: BatchRoster) -> StoreResult<usize> {
        let count = roster.batches.len();
        let mut state = self.state.write();
        state.batches = roster.batches;
        state.checksum = Some(roster.checksum);
        info!("replaced roster snapshot with {} batches", count);
        Ok(count)
    }

    async fn list_batches(&self) -> StoreResult<Vec<Batch>> {
        Ok(self.state.read().batches.clone())
    }

    async fn get_batch(&self, id: &BatchId) -> StoreResult<Batch> {
        self.state
            .read()
            .batches
            .iter()
            .find(|batch| batch.id == *id)
            .cloned()
            .ok_or_else(|| {
                StoreError::not_found(format!("batch {} not found", id)).with_context(
                    ErrorContext::new("get_batch")
                        .with_entity("batch")
                        .with_entity_id(id),
                )
            })
    }

    async fn insert_batch(&self, batch: Batch) -> StoreResult<()> {
        let mut state = self.state.write();
        if state.batches.iter().any(|existing| existing.id == batch.id) {
            return Err(StoreError::validation(format!(
                "batch {} already exists",
                batch.id
            ))
            .with_context(
                ErrorContext::new("insert_batch")
                    .with_entity("batch")
                    .with_entity_id(&batch.id),
            ));
        }
        state.batches.push(batch);
        Ok(())
    }

    async fn update_batch(&self, batch: Batch) -> StoreResult<()> {
        let mut state = self.state.write();
        match state.batches.iter().position(|existing| existing.id == batch.id) {
            Some(position) => {
                state.batches[position] = batch;
                Ok(())
            }
            None => Err(
                StoreError::not_found(format!("batch {} not found", batch.id)).with_context(
                    ErrorContext::new("update_batch")
                        .with_entity("batch")
                        .with_entity_id(&batch.id),
                ),
            ),
        }
    }

    async fn roster_checksum(&self) -> StoreResult<Option<String>> {
        Ok(self.state.read().checksum.clone())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BatchStatus, CourseId, InstructorId};
    use chrono::Weekday;

    fn sample_batch(id: &str, name: &str) -> Batch {
        Batch {
            id: BatchId::new(id),
            name: name.to_string(),
            course_id: CourseId::new("course-1"),
            instructor_ids: vec![InstructorId::new("i1")],
            status: BatchStatus::Active,
            days: vec![Weekday::Mon],
            time_range: "09:00 AM - 10:00 AM".to_string(),
            start_date: None,
            end_date: None,
        }
    }

    fn sample_roster() -> BatchRoster {
        BatchRoster {
            checksum: "abc123".to_string(),
            batches: vec![sample_batch("b-1", "First"), sample_batch("b-2", "Second")],
        }
    }

    #[tokio::test]
    async fn test_replace_roster_and_list_order() {
        let store = LocalBatchStore::new();
        let count = store.replace_roster(sample_roster()).await.unwrap();
        assert_eq!(count, 2);

        let batches = store.list_batches().await.unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].name, "First");
        assert_eq!(batches[1].name, "Second");
        assert_eq!(
            store.roster_checksum().await.unwrap(),
            Some("abc123".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_batch_not_found() {
        let store = LocalBatchStore::new();
        let err = store.get_batch(&BatchId::new("missing")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = LocalBatchStore::with_roster(sample_roster());
        let err = store.insert_batch(sample_batch("b-1", "Dup")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let store = LocalBatchStore::with_roster(sample_roster());
        let mut edited = sample_batch("b-1", "First Renamed");
        edited.time_range = "11:00 AM - 12:00 PM".to_string();
        store.update_batch(edited).await.unwrap();

        let batches = store.list_batches().await.unwrap();
        assert_eq!(batches[0].name, "First Renamed");
        assert_eq!(batches[1].name, "Second");
    }

    #[tokio::test]
    async fn test_update_missing_batch_is_not_found() {
        let store = LocalBatchStore::new();
        let err = store.update_batch(sample_batch("b-9", "Nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = LocalBatchStore::new();
        assert!(store.health_check().await.unwrap());
    }
}
