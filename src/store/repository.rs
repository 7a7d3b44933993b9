//! Repository trait for the batch snapshot store.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::api::{Batch, BatchId, BatchRoster};

/// Abstract interface over wherever the batch list lives.
///
/// The in-memory [`super::LocalBatchStore`] mirrors what the portal holds
/// after fetching the list from the backend; other implementations can back
/// this with a live API client without touching the services layer.
///
/// Implementations must preserve backend query order in `list_batches` —
/// conflict reporting is first-match in that order.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BatchRepository: Send + Sync {
    /// Replace the whole snapshot with a freshly fetched roster.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of batches in the new snapshot
    async fn replace_roster(&self, roster: BatchRoster) -> StoreResult<usize>;

    /// All batches in backend query order.
    async fn list_batches(&self) -> StoreResult<Vec<Batch>>;

    /// Fetch one batch by id.
    async fn get_batch(&self, id: &BatchId) -> StoreResult<Batch>;

    /// Append a newly created batch to the snapshot.
    async fn insert_batch(&self, batch: Batch) -> StoreResult<()>;

    /// Replace a stored batch in place, keeping its roster position.
    async fn update_batch(&self, batch: Batch) -> StoreResult<()>;

    /// Checksum of the JSON the current snapshot was parsed from, if any.
    async fn roster_checksum(&self) -> StoreResult<Option<String>>;

    /// Whether the store is usable.
    async fn health_check(&self) -> StoreResult<bool>;
}
