//! Schedule conflict detection.
//!
//! Given a candidate batch and the roster snapshot, decide whether the
//! candidate's weekly slot collides with an existing active batch sharing an
//! instructor. Pure and synchronous: the roster is a read-only snapshot and
//! nothing here performs I/O.

use log::{debug, warn};

use crate::api::{Batch, BatchId, Candidate};
use crate::models::time::parse_time_range;
use crate::services::validation::ValidationSettings;

/// Find the first batch that conflicts with `candidate`, in roster order.
///
/// Returns the conflicting batch's name, or `None` when the candidate is
/// clear to submit. `exclude` skips one batch by id — pass the batch being
/// edited so it cannot conflict with itself.
///
/// A batch conflicts when all of the following hold:
/// - it is `Active`,
/// - it shares at least one instructor with the candidate,
/// - it shares at least one weekday with the candidate,
/// - its stored time range overlaps the candidate's slot as half-open
///   intervals (touching endpoints do not conflict).
///
/// Batches whose stored time range cannot be parsed are skipped, never
/// reported as errors. An empty candidate day or instructor list means no
/// conflict can be determined and `None` is returned immediately.
pub fn find_conflict<'a>(
    candidate: &Candidate,
    batches: &'a [Batch],
    exclude: Option<&BatchId>,
) -> Option<&'a str> {
    find_conflict_with_settings(candidate, batches, exclude, &ValidationSettings::default())
}

/// [`find_conflict`] with explicit settings controlling how lenient skips
/// are logged.
pub fn find_conflict_with_settings<'a>(
    candidate: &Candidate,
    batches: &'a [Batch],
    exclude: Option<&BatchId>,
    settings: &ValidationSettings,
) -> Option<&'a str> {
    if candidate.days.is_empty() || candidate.instructor_ids.is_empty() {
        return None;
    }

    let candidate_slot = candidate.time_slot;

    for batch in batches {
        if exclude.is_some_and(|id| *id == batch.id) {
            continue;
        }
        if !batch.status.is_active() {
            continue;
        }
        if !batch
            .instructor_ids
            .iter()
            .any(|id| candidate.instructor_ids.contains(id))
        {
            continue;
        }
        if !batch.days.iter().any(|day| candidate.days.contains(day)) {
            continue;
        }

        let stored_slot = match parse_time_range(&batch.time_range) {
            Ok(slot) => slot,
            Err(err) => {
                if settings.warn_on_unparseable_times {
                    warn!(
                        "skipping batch {:?} (id {}) in conflict check: {}",
                        batch.name, batch.id, err
                    );
                } else {
                    debug!(
                        "skipping batch {:?} (id {}) in conflict check: {}",
                        batch.name, batch.id, err
                    );
                }
                continue;
            }
        };

        // First match wins; the roster keeps backend query order.
        if candidate_slot.overlaps(&stored_slot) {
            return Some(batch.name.as_str());
        }
    }

    None
}
