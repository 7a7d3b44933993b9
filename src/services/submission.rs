//! Create-batch and edit-batch submit flows.
//!
//! These are the two call sites the batch form goes through: field
//! validation, then the conflict check against the roster snapshot, then
//! the store write. The result is advisory — the backend runs the
//! authoritative check when the real create/update request is issued — but
//! it gives the user feedback before any network round trip.

use log::debug;
use uuid::Uuid;

use crate::api::{Batch, BatchId, BatchStatus, Candidate};
use crate::services::conflict::find_conflict_with_settings;
use crate::services::validation::{
    has_blocking_issues, validate_candidate_with_settings, ValidationIssue, ValidationSettings,
};
use crate::store::{BatchRepository, StoreError};

/// Why a submission was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Field validation found blocking issues; the full list is attached.
    #[error("candidate failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    /// The candidate's slot collides with an existing batch. The display
    /// string is the exact message the form surfaces to the user.
    #[error("Conflict detected! This time slot overlaps with existing batch: \"{batch_name}\" for the selected instructor(s).")]
    Conflict { batch_name: String },

    /// The store itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validate and create a new batch with default settings.
pub async fn create_batch(
    repo: &dyn BatchRepository,
    candidate: Candidate,
) -> Result<Batch, SubmissionError> {
    create_batch_with_settings(repo, candidate, &ValidationSettings::default()).await
}

/// Validate and create a new batch.
///
/// Runs field validation, then the conflict check over the current roster
/// with no exclusion. On success the batch is appended to the snapshot with
/// a freshly minted id (standing in for the id the backend would assign)
/// and `Active` status.
pub async fn create_batch_with_settings(
    repo: &dyn BatchRepository,
    candidate: Candidate,
    settings: &ValidationSettings,
) -> Result<Batch, SubmissionError> {
    let issues = validate_candidate_with_settings(&candidate, settings);
    if has_blocking_issues(&issues) {
        return Err(SubmissionError::Invalid(issues));
    }

    let batches = repo.list_batches().await?;
    if let Some(name) = find_conflict_with_settings(&candidate, &batches, None, settings) {
        return Err(SubmissionError::Conflict {
            batch_name: name.to_string(),
        });
    }

    let batch = batch_from_candidate(
        BatchId::new(Uuid::new_v4().to_string()),
        BatchStatus::Active,
        candidate,
    );
    repo.insert_batch(batch.clone()).await?;
    debug!("created batch {} ({})", batch.name, batch.id);
    Ok(batch)
}

/// Validate and update an existing batch with default settings.
pub async fn update_batch(
    repo: &dyn BatchRepository,
    id: &BatchId,
    candidate: Candidate,
) -> Result<Batch, SubmissionError> {
    update_batch_with_settings(repo, id, candidate, &ValidationSettings::default()).await
}

/// Validate and update an existing batch.
///
/// Identical to creation except the edited batch's own id is excluded from
/// the conflict check so an unchanged schedule never conflicts with itself.
/// The stored record keeps its id, status, and roster position.
pub async fn update_batch_with_settings(
    repo: &dyn BatchRepository,
    id: &BatchId,
    candidate: Candidate,
    settings: &ValidationSettings,
) -> Result<Batch, SubmissionError> {
    let issues = validate_candidate_with_settings(&candidate, settings);
    if has_blocking_issues(&issues) {
        return Err(SubmissionError::Invalid(issues));
    }

    let existing = repo.get_batch(id).await?;

    let batches = repo.list_batches().await?;
    if let Some(name) = find_conflict_with_settings(&candidate, &batches, Some(id), settings) {
        return Err(SubmissionError::Conflict {
            batch_name: name.to_string(),
        });
    }

    let batch = batch_from_candidate(existing.id, existing.status, candidate);
    repo.update_batch(batch.clone()).await?;
    debug!("updated batch {} ({})", batch.name, batch.id);
    Ok(batch)
}

/// Materialize a candidate as a stored batch. The slot is rendered back to
/// the backend's `"hh:mm AM - hh:mm PM"` string form.
fn batch_from_candidate(id: BatchId, status: BatchStatus, candidate: Candidate) -> Batch {
    Batch {
        id,
        name: candidate.name,
        course_id: candidate.course_id,
        instructor_ids: candidate.instructor_ids,
        status,
        days: candidate.days,
        time_range: candidate.time_slot.to_string(),
        start_date: candidate.start_date,
        end_date: candidate.end_date,
    }
}
