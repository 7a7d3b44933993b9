//! Shared domain types for the batch validation core.
//!
//! Canonical shapes live here; wire-format parsing and normalization live in
//! [`crate::models`]. Everything derives Serde so callers can round-trip the
//! types through JSON the same way the portal backend does.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub use crate::models::time::{ClockMinutes, TimeSlot};
pub use crate::services::validation::{Criticality, ValidationIssue};

/// Opaque backend identifier for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque backend identifier for an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructorId(String);

impl InstructorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque backend identifier for a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a batch. Only `Active` batches participate in
/// conflict checks; anything else can never block scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Active,
    Inactive,
    Completed,
    /// Unrecognized wire value. Treated like inactive for scheduling.
    Unknown,
}

impl BatchStatus {
    /// Lenient mapping from the wire's status string. Anything
    /// unrecognized maps to `Unknown` rather than failing the record.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => BatchStatus::Active,
            "inactive" => BatchStatus::Inactive,
            "completed" => BatchStatus::Completed,
            _ => BatchStatus::Unknown,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, BatchStatus::Active)
    }
}

impl Default for BatchStatus {
    fn default() -> Self {
        BatchStatus::Unknown
    }
}

/// A scheduled recurring cohort tied to one course and one or more
/// instructors, with a weekly day/time pattern.
///
/// `time_range` keeps the backend's raw `"hh:mm AM - hh:mm PM"` string;
/// it is parsed at conflict-check time so malformed values degrade to
/// "cannot conflict" instead of poisoning the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub name: String,
    pub course_id: CourseId,
    pub instructor_ids: Vec<InstructorId>,
    pub status: BatchStatus,
    pub days: Vec<Weekday>,
    pub time_range: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// An in-progress (unsaved) batch definition from the create/edit form.
/// The form pre-normalizes its time inputs, so the slot is already in
/// minutes since midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub course_id: CourseId,
    pub instructor_ids: Vec<InstructorId>,
    pub days: Vec<Weekday>,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// One fetched snapshot of the backend's batch list, in backend query
/// order, plus a checksum of the source JSON for refresh deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRoster {
    pub checksum: String,
    pub batches: Vec<Batch>,
}
