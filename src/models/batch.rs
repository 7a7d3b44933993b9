// ============================================================================
// Roster JSON Parsing and Normalization
// ============================================================================
//
// The portal backend serves the batch list either as a bare array or wrapped
// in `{"batches": [...]}`. Records are normalized here, at the data-access
// boundary, into the canonical `api::Batch` shape; in particular the
// historical single-vs-list `instructor` field is flattened to one list of
// ids before anything downstream sees it.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use log::warn;

use crate::api::{Batch, BatchId, BatchRoster, BatchStatus, CourseId, InstructorId};

#[derive(serde::Deserialize)]
struct BatchRecordInput {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    instructor: Option<InstructorField>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    days: Vec<String>,
    #[serde(default)]
    time: String,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

/// Schema migration artifact: older records store a single instructor id,
/// newer ones a list.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum InstructorField {
    One(String),
    Many(Vec<String>),
}

#[derive(serde::Deserialize)]
struct RosterWrapper {
    batches: Vec<BatchRecordInput>,
}

fn validate_input_roster(roster_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(roster_json).context("Invalid roster JSON")?;
    let has_batches = value.is_array()
        || value
            .as_object()
            .and_then(|obj| obj.get("batches"))
            .is_some();
    if !has_batches {
        anyhow::bail!("Missing required 'batches' field");
    }
    Ok(())
}

/// Parse a backend batch-list response into a [`BatchRoster`].
///
/// Accepts either a bare array of batch records or a `{"batches": [...]}`
/// wrapper. Record order is preserved exactly as served — conflict checks
/// report the first match in this order.
pub fn parse_batch_roster_json_str(roster_json: &str) -> Result<BatchRoster> {
    validate_input_roster(roster_json)?;

    let records: Vec<BatchRecordInput> =
        match serde_json::from_str::<RosterWrapper>(roster_json) {
            Ok(wrapper) => wrapper.batches,
            Err(_) => serde_json::from_str(roster_json)
                .context("Failed to deserialize batch list using Serde")?,
        };

    let batches = records.into_iter().map(normalize_record).collect();

    Ok(BatchRoster {
        checksum: compute_roster_checksum(roster_json),
        batches,
    })
}

/// Adapter from the wire record to the canonical domain shape.
///
/// Instructors are flattened into one deduplicated list and day names are
/// parsed to weekdays; the stored time-range string is carried through raw
/// so the detector can apply its lenient-skip policy at check time.
fn normalize_record(input: BatchRecordInput) -> Batch {
    let status = BatchStatus::parse_lenient(&input.status);
    if status == BatchStatus::Unknown && !input.status.trim().is_empty() {
        warn!(
            "unrecognized status {:?} on batch {:?}",
            input.status, input.name
        );
    }

    Batch {
        id: BatchId::new(input.id),
        name: input.name,
        course_id: CourseId::new(input.course),
        instructor_ids: flatten_instructors(input.instructor),
        status,
        days: parse_days(&input.days),
        time_range: input.time,
        start_date: input.start_date,
        end_date: input.end_date,
    }
}

/// Flatten the single-vs-list instructor representations into one list of
/// ids, deduplicated, first appearance wins.
fn flatten_instructors(field: Option<InstructorField>) -> Vec<InstructorId> {
    let raw = match field {
        None => Vec::new(),
        Some(InstructorField::One(id)) => vec![id],
        Some(InstructorField::Many(ids)) => ids,
    };

    let mut ids: Vec<InstructorId> = Vec::with_capacity(raw.len());
    for id in raw {
        let id = InstructorId::new(id);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Parse weekday names, dropping anything unrecognizable. Duplicates
/// collapse, first appearance wins.
fn parse_days(names: &[String]) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = Vec::with_capacity(names.len());
    for name in names {
        match name.trim().parse::<Weekday>() {
            Ok(day) => {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            Err(_) => warn!("dropping unrecognized weekday name {:?}", name),
        }
    }
    days
}

/// Compute a checksum for the roster JSON, used to skip redundant refreshes.
fn compute_roster_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// Tests
// ============================================================================
